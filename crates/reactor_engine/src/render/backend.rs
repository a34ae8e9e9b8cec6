//! Backend abstraction trait for the rendering system
//!
//! A backend owns the graphics device: double buffering, depth and cull state,
//! viewport setup and the actual vertex submission. The scene composer only sees
//! this trait.
//!
//! # Transform Ownership
//! Backends never hold a "current model matrix" of their own. Every draw call
//! receives the cumulative model transform explicitly, so the composer's
//! [`TransformStack`](crate::scene::TransformStack) is the single source of truth.
//!
//! # State Calls
//! State setters (material, emission, lighting, blend, colour) are sticky until
//! changed, in the fixed-function manner. They are infallible; a backend that can
//! fail applies them lazily and reports errors from the next draw.

use crate::foundation::math::{Transform, Vec3};
use crate::render::lighting::LightingEnvironment;
use crate::render::material::{BlendMode, Color, Emission, Material};
use crate::render::primitives::{Quad, QuadStrip};
use crate::render::RenderResult;

/// Main rendering backend trait
pub trait Renderer {
    /// Clear colour and depth for a new frame
    fn clear_frame(&mut self, color: Color) -> RenderResult<()>;

    /// Load a look-at view matrix
    fn set_view_matrix(&mut self, eye: Vec3, target: Vec3, up: Vec3);

    /// Load a perspective projection
    fn set_projection(&mut self, fov_y_degrees: f32, aspect: f32, near: f32, far: f32);

    /// Program ambient and light registers
    fn configure_lighting(&mut self, environment: &LightingEnvironment);

    /// Set the surface material for lit geometry
    fn set_material(&mut self, material: &Material);

    /// Set the emissive term
    fn set_emissive(&mut self, emission: Emission);

    /// Reset the emissive term to black
    fn clear_emissive(&mut self);

    /// Enable or disable the lighting model
    fn set_lighting(&mut self, enabled: bool);

    /// Select the blend mode
    fn set_blend(&mut self, mode: BlendMode);

    /// Flat colour used while lighting is disabled
    fn set_color(&mut self, color: Color);

    /// Draw polygons as outlines instead of filled
    fn set_wireframe(&mut self, enabled: bool);

    /// Draw a quad strip placed by `model`
    fn submit_quad_strip(&mut self, model: &Transform, strip: &QuadStrip) -> RenderResult<()>;

    /// Draw a single flat quad placed by `model`
    fn submit_quad(&mut self, model: &Transform, quad: &Quad) -> RenderResult<()>;

    /// Draw the device's built-in low-poly sphere
    fn submit_solid_sphere(&mut self, model: &Transform, radius: f32, slices: u32, stacks: u32) -> RenderResult<()>;

    /// Draw the device's built-in cube with edge length `size`
    fn submit_solid_cube(&mut self, model: &Transform, size: f32) -> RenderResult<()>;

    /// Present the finished frame
    fn present_frame(&mut self) -> RenderResult<()>;
}
