//! Rendering collaborator interface
//!
//! The scene composer never talks to a graphics device directly. It drives a
//! [`Renderer`] implementation through primitive draw calls and fixed-function
//! state setters, passing the cumulative model transform explicitly with each draw.
//!
//! ## Module Organization
//!
//! - [`backend`]: the [`Renderer`] trait a device backend implements
//! - [`material`]: surface, emission and blending parameters
//! - [`lighting`]: the light rig configured once per frame
//! - [`primitives`]: procedural geometry and the camera
//! - [`recording`]: an in-memory renderer that records calls and frame statistics

pub mod backend;
pub mod lighting;
pub mod material;
pub mod primitives;
pub mod recording;

pub use backend::Renderer;
pub use lighting::{LightingEnvironment, PointLight};
pub use material::{BlendMode, Color, Emission, Material, Rgb};
pub use primitives::{Camera, CameraOrbit, Quad, QuadStrip, Vertex};
pub use recording::{DrawCall, FrameStats, Primitive, RecordingRenderer};

use thiserror::Error;

/// Errors reported by a renderer backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A draw or state call failed during a frame
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
