//! Scene nodes of the reactor room
//!
//! Each node owns its animation constants and exposes its motion as pure
//! functions of `t`, so the same formulas drive drawing and tests.

mod containment;
mod crew;
mod effects;
mod floor;
mod reactor_core;
mod structure;

pub use containment::ContainmentNode;
pub use crew::{MachinesNode, Operator, PeopleNode};
pub use effects::{HologramsNode, Particle, ParticlesNode};
pub use floor::{FloorLightsNode, FloorNode};
pub use reactor_core::{CoreNode, Ring, RingsNode};
pub use structure::{CeilingLightsNode, WallsNode};

use crate::render::primitives::{sphere, torus, Quad};
use crate::render::{BlendMode, RenderResult, Renderer};
use crate::scene::TransformStack;

/// Unit cube scaled to `sx × sy × sz` in the current frame
pub(crate) fn draw_cube(
    stack: &mut TransformStack,
    renderer: &mut dyn Renderer,
    sx: f32,
    sy: f32,
    sz: f32,
) -> RenderResult<()> {
    stack.with_pushed(|stack| {
        stack.scale(sx, sy, sz);
        renderer.submit_solid_cube(stack.current(), 1.0)
    })
}

/// Tessellated sphere centred on the current origin
pub(crate) fn draw_sphere(
    stack: &TransformStack,
    renderer: &mut dyn Renderer,
    radius: f32,
    latitude_steps: u32,
    longitude_steps: u32,
) -> RenderResult<()> {
    for strip in sphere(radius, latitude_steps, longitude_steps) {
        renderer.submit_quad_strip(stack.current(), &strip)?;
    }
    Ok(())
}

/// Tessellated torus around the current Z axis
pub(crate) fn draw_torus(
    stack: &TransformStack,
    renderer: &mut dyn Renderer,
    major_radius: f32,
    minor_radius: f32,
    major_steps: u32,
    minor_steps: u32,
) -> RenderResult<()> {
    for strip in torus(major_radius, minor_radius, major_steps, minor_steps) {
        renderer.submit_quad_strip(stack.current(), &strip)?;
    }
    Ok(())
}

/// Flat quad in the current frame
pub(crate) fn draw_quad(stack: &TransformStack, renderer: &mut dyn Renderer, quad: &Quad) -> RenderResult<()> {
    renderer.submit_quad(stack.current(), quad)
}

/// Run `f` with lighting off and `blend` active, then restore lit opaque state
///
/// State is restored even when `f` fails.
pub(crate) fn unlit<R>(
    renderer: &mut dyn Renderer,
    blend: BlendMode,
    f: impl FnOnce(&mut dyn Renderer) -> RenderResult<R>,
) -> RenderResult<R> {
    renderer.set_lighting(false);
    if blend != BlendMode::Opaque {
        renderer.set_blend(blend);
    }

    let result = f(&mut *renderer);

    if blend != BlendMode::Opaque {
        renderer.set_blend(BlendMode::Opaque);
    }
    renderer.set_lighting(true);
    result
}
