//! The glowing core and its three spinning rings

use crate::render::{Emission, Material, RenderResult, Renderer, Rgb};
use crate::scene::nodes::{draw_sphere, draw_torus};
use crate::scene::{FrameContext, SceneNode, TransformStack};

/// Stationary sphere with a pulsing emissive term
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreNode;

impl CoreNode {
    /// Core colour, used for diffuse, specular and emission
    pub const COLOR: Rgb = [0.0, 0.8, 1.0];
    /// Specular exponent
    pub const SHININESS: f32 = 100.0;
    /// Sphere radius
    pub const RADIUS: f32 = 2.0;
    /// Latitude and longitude steps
    pub const STEPS: u32 = 32;

    /// Emission intensity at rest
    pub const PULSE_BASE: f32 = 0.6;
    /// Emission swing either side of the base
    pub const PULSE_AMPLITUDE: f32 = 0.4;
    /// Pulse frequency in radians per unit of `t`
    pub const PULSE_FREQUENCY: f32 = 0.02;

    /// Emission intensity at time `t`, always within `[0.2, 1.0]`
    pub fn pulse(time: f32) -> f32 {
        Self::PULSE_BASE + Self::PULSE_AMPLITUDE * (time * Self::PULSE_FREQUENCY).sin()
    }

    /// Core surface
    pub fn material() -> Material {
        Material::from_rgb(Self::COLOR, Self::COLOR, Self::SHININESS)
    }
}

impl SceneNode for CoreNode {
    fn name(&self) -> &'static str {
        "core"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.set_material(&Self::material());
        renderer.set_emissive(Emission::new(Self::COLOR, Self::pulse(ctx.time)));
        let result = draw_sphere(stack, renderer, Self::RADIUS, Self::STEPS, Self::STEPS);
        renderer.clear_emissive();
        result
    }
}

/// One of the rings around the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Rotation axis
    pub axis: [f32; 3],
    /// Degrees of rotation per unit of `t`
    pub rate: f32,
    /// Distance from the centre to the middle of the tube
    pub major_radius: f32,
    /// Tube radius
    pub minor_radius: f32,
    /// Surface
    pub material: Material,
}

impl Ring {
    /// Rotation angle in degrees at time `t`
    pub fn angle(&self, time: f32) -> f32 {
        time * self.rate
    }
}

const RING_SPECULAR: Rgb = [0.7, 0.9, 1.0];

/// Three concentric tori, each spinning about its own axis
#[derive(Debug, Clone, Copy, Default)]
pub struct RingsNode;

impl RingsNode {
    /// Steps around the ring
    pub const MAJOR_STEPS: u32 = 64;
    /// Steps around the tube
    pub const MINOR_STEPS: u32 = 12;

    /// Inner to outer
    pub const RINGS: [Ring; 3] = [
        Ring {
            axis: [0.0, 0.0, 1.0],
            rate: 2.0,
            major_radius: 3.5,
            minor_radius: 0.15,
            material: Material::from_rgb([0.4, 0.7, 1.0], RING_SPECULAR, 60.0),
        },
        Ring {
            axis: [0.0, 1.0, 0.0],
            rate: 3.0,
            major_radius: 5.0,
            minor_radius: 0.12,
            material: Material::from_rgb([0.8, 0.3, 1.0], RING_SPECULAR, 60.0),
        },
        Ring {
            axis: [1.0, 0.0, 0.0],
            rate: 4.0,
            major_radius: 6.5,
            minor_radius: 0.1,
            material: Material::from_rgb([1.0, 0.6, 0.2], RING_SPECULAR, 40.0),
        },
    ];
}

impl SceneNode for RingsNode {
    fn name(&self) -> &'static str {
        "rings"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        for ring in &Self::RINGS {
            renderer.set_material(&ring.material);
            stack.with_pushed(|stack| {
                let [x, y, z] = ring.axis;
                stack.rotate(ring.angle(ctx.time), x, y, z);
                draw_torus(
                    stack,
                    renderer,
                    ring.major_radius,
                    ring.minor_radius,
                    Self::MAJOR_STEPS,
                    Self::MINOR_STEPS,
                )
            })?;
        }
        Ok(())
    }
}
