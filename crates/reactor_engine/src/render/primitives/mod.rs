//! Core primitive types for rendering
//!
//! Procedural meshes and the camera.

pub mod camera;
pub mod mesh;

// Re-export commonly used types
pub use camera::{Camera, CameraOrbit};
pub use mesh::{sphere, torus, Quad, QuadStrip, SphereStrips, TorusStrips, Vertex};
