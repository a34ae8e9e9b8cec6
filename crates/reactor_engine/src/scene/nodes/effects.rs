//! Translucent and unlit effects: hologram panels and the particle swarm

use crate::foundation::math::Vec3;
use crate::render::primitives::Quad;
use crate::render::{BlendMode, Color, RenderResult, Renderer};
use crate::scene::nodes::{draw_quad, unlit};
use crate::scene::{FrameContext, SceneNode, TransformStack};

/// Radial ring of additive hologram panels
#[derive(Debug, Clone, Copy, Default)]
pub struct HologramsNode;

impl HologramsNode {
    /// Number of panels
    pub const COUNT: u32 = 6;
    /// Yaw offset between panels, in degrees
    pub const YAW_STEP: f32 = 60.0;
    /// Yaw in degrees per unit of `t`
    pub const YAW_RATE: f32 = 0.006;
    /// Distance from the vertical axis
    pub const DISTANCE: f32 = 3.2;
    /// Panel base height at rest
    pub const LIFT: f32 = 1.2;
    /// Bob amplitude
    pub const BOB_AMPLITUDE: f32 = 0.2;
    /// Bob frequency
    pub const BOB_FREQUENCY: f32 = 0.0002;
    /// Per-panel phase offset in units of `t`
    pub const BOB_PHASE: f32 = 30.0;
    /// Backward tilt about the panel's X axis
    pub const TILT_DEGREES: f32 = -30.0;
    /// Panel translucency
    pub const ALPHA: f32 = 0.35;

    /// Panel shape
    pub fn panel() -> Quad {
        Quad::upright(1.6, 1.2)
    }

    /// Yaw of panel `i` about +Y, in degrees
    pub fn yaw(index: u32, time: f32) -> f32 {
        index as f32 * Self::YAW_STEP + time * Self::YAW_RATE
    }

    /// Height of panel `i`
    pub fn lift(index: u32, time: f32) -> f32 {
        Self::LIFT + ((time + index as f32 * Self::BOB_PHASE) * Self::BOB_FREQUENCY).sin() * Self::BOB_AMPLITUDE
    }

    /// Tint of panel `i`
    pub fn color(index: u32) -> Color {
        [0.1 + 0.08 * index as f32, 0.8, 1.0, Self::ALPHA]
    }
}

impl SceneNode for HologramsNode {
    fn name(&self) -> &'static str {
        "holograms"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        let panel = Self::panel();
        unlit(renderer, BlendMode::Additive, |renderer| {
            for i in 0..Self::COUNT {
                stack.with_pushed(|stack| {
                    stack.rotate(Self::yaw(i, ctx.time), 0.0, 1.0, 0.0);
                    stack.translate(0.0, Self::lift(i, ctx.time), Self::DISTANCE);
                    stack.rotate(Self::TILT_DEGREES, 1.0, 0.0, 0.0);
                    renderer.set_color(Self::color(i));
                    draw_quad(stack, renderer, &panel)
                })?;
            }
            Ok(())
        })
    }
}

/// Placement of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Centre position relative to the room origin
    pub position: Vec3,
    /// Uniform scale; swings through zero, which mirrors the sphere
    pub scale: f32,
}

/// Breathing swarm of small spheres around the core
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticlesNode;

impl ParticlesNode {
    /// Number of particles
    pub const COUNT: u32 = 50;
    /// Sphere radius before scaling
    pub const RADIUS: f32 = 0.05;
    /// Slices and stacks of the built-in sphere
    pub const SEGMENTS: u32 = 8;
    /// Flat particle colour
    pub const COLOR: Color = [0.2, 1.0, 1.0, 1.0];

    /// Placement of particle `i` at time `t`
    ///
    /// The angular offset `i · 360 / COUNT` is fed to the trig functions as
    /// radians, which scatters the particles instead of spacing them evenly.
    pub fn particle(index: u32, time: f32) -> Particle {
        let i = index as f32;
        let angle = i * 360.0 / Self::COUNT as f32 + time * 0.012;
        let radius = 2.5 + 0.2 * (time * 0.005 + i).sin();
        let height = 0.5 * (time * 0.007 + i).sin();
        let scale = 0.1 + 2.0 * (time * 0.03 + i * 0.15).sin();

        let (s, c) = angle.sin_cos();
        Particle {
            position: Vec3::new(radius * c, height, radius * s),
            scale,
        }
    }
}

impl SceneNode for ParticlesNode {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        unlit(renderer, BlendMode::Opaque, |renderer| {
            renderer.set_color(Self::COLOR);
            for i in 0..Self::COUNT {
                let particle = Self::particle(i, ctx.time);
                stack.with_pushed(|stack| {
                    let p = particle.position;
                    stack.translate(p.x, p.y, p.z);
                    stack.scale(particle.scale, particle.scale, particle.scale);
                    renderer.submit_solid_sphere(stack.current(), Self::RADIUS, Self::SEGMENTS, Self::SEGMENTS)
                })?;
            }
            Ok(())
        })
    }
}
