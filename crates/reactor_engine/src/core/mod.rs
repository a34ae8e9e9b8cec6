//! # Core Engine Module
//!
//! Shared configuration types used by the engine and the binaries that drive it.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration tree for window, animation, camera, scene and engine
//! - **Foundation**: Low-level utilities (math, time, logging), re-exported for convenience

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    AnimationConfig,
    CameraConfig,
    Config,
    ConfigError,
    ConfigFormat,
    EngineConfig,
    ReactorConfig,
    SceneConfig,
    ScriptedKey,
    WindowConfig,
};
