//! # Reactor Engine
//!
//! A hierarchical transform engine and procedural scene composer for an animated
//! reactor room.
//!
//! ## Features
//!
//! - **Explicit Transforms**: column-major affine matrices with a save/restore stack
//! - **Procedural Geometry**: lazy sphere and torus quad-strip generators
//! - **Scene Graph**: ordered nodes animated purely from a single clock value
//! - **Backend Agnostic**: drawing goes through the [`Renderer`](render::Renderer) trait
//! - **Headless Recording**: [`RecordingRenderer`](render::RecordingRenderer) for tests and tooling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reactor_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReactorConfig::default();
//!     let mut engine = Engine::new(&config, RecordingRenderer::new())?;
//!     let mut events = ScriptedEvents::new().with_key_press(60, KeyCode::Space);
//!     engine.run(&mut events, Some(120))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, AppEvent, EventSource, ScriptedEvents};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppEvent, Engine, EngineError, EventSource, ScriptedEvents,
        core::config::{Config, ReactorConfig},
        foundation::{
            math::{Mat4, Transform, Vec3},
            time::{AnimationClock, FrameTimer},
        },
        input::{InputAction, InputManager, KeyCode},
        render::{Camera, CameraOrbit, Material, RecordingRenderer, Renderer},
        scene::{SceneControls, SceneGraph, SceneNode, SceneRenderer, TransformStack},
    };
}
