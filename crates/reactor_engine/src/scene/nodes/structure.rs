//! Room shell: walls, ceiling slab and the ceiling LED grid

use crate::render::{BlendMode, Emission, Material, RenderResult, Renderer, Rgb};
use crate::scene::nodes::{draw_cube, unlit};
use crate::scene::{FrameContext, SceneNode, TransformStack};

/// Back wall, left wall and ceiling slab
#[derive(Debug, Clone, Copy, Default)]
pub struct WallsNode;

impl WallsNode {
    /// Shared wall surface
    pub const MATERIAL: Material = Material::from_rgb([0.3, 0.3, 0.35], [0.2, 0.2, 0.25], 5.0);

    /// `(centre, extents)` of each slab in draw order
    pub const PANELS: [([f32; 3], [f32; 3]); 3] = [
        ([0.0, 5.0, -15.0], [30.5, 10.2, 0.5]),
        ([-15.0, 5.0, 0.0], [0.5, 10.2, 30.5]),
        ([0.0, 10.0, 0.0], [30.5, 0.5, 30.5]),
    ];
}

impl SceneNode for WallsNode {
    fn name(&self) -> &'static str {
        "walls"
    }

    fn draw(&self, _ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        for ([x, y, z], [sx, sy, sz]) in Self::PANELS {
            renderer.set_material(&Self::MATERIAL);
            stack.with_pushed(|stack| {
                stack.translate(x, y, z);
                draw_cube(stack, renderer, sx, sy, sz)
            })?;
        }
        Ok(())
    }
}

/// 7×7 grid of independently pulsing LEDs under the ceiling
#[derive(Debug, Clone, Copy, Default)]
pub struct CeilingLightsNode;

impl CeilingLightsNode {
    /// Grid runs over `-HALF_EXTENT..=HALF_EXTENT` on both axes
    pub const HALF_EXTENT: i32 = 3;
    /// Distance between LEDs
    pub const SPACING: f32 = 4.0;
    /// LED centre height
    pub const HEIGHT: f32 = 9.75;
    /// LED extents
    pub const SIZE: [f32; 3] = [0.3, 0.05, 0.3];
    /// LED colour at full intensity
    pub const COLOR: Rgb = [1.0, 1.0, 0.6];

    /// Intensity of the LED at grid cell `(row, col)`
    pub fn pulse(row: i32, col: i32, time: f32) -> f32 {
        0.5 + 0.5 * (time * 0.05 + row as f32 + col as f32).sin()
    }
}

impl SceneNode for CeilingLightsNode {
    fn name(&self) -> &'static str {
        "ceiling_lights"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        let [sx, sy, sz] = Self::SIZE;
        unlit(renderer, BlendMode::Opaque, |renderer| {
            for row in -Self::HALF_EXTENT..=Self::HALF_EXTENT {
                for col in -Self::HALF_EXTENT..=Self::HALF_EXTENT {
                    let emission = Emission::new(Self::COLOR, Self::pulse(row, col, ctx.time));
                    renderer.set_emissive(emission);
                    renderer.set_color(emission.rgba());

                    let result = stack.with_pushed(|stack| {
                        stack.translate(row as f32 * Self::SPACING, Self::HEIGHT, col as f32 * Self::SPACING);
                        draw_cube(stack, renderer, sx, sy, sz)
                    });
                    renderer.clear_emissive();
                    result?;
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_pulse_is_phased_by_cell() {
        assert_eq!(CeilingLightsNode::pulse(0, 0, 0.0), 0.5);
        // Cells on the same anti-diagonal share a phase
        assert_eq!(CeilingLightsNode::pulse(-2, 1, 40.0), CeilingLightsNode::pulse(1, -2, 40.0));
        assert_ne!(CeilingLightsNode::pulse(0, 0, 40.0), CeilingLightsNode::pulse(0, 1, 40.0));
        for row in -3..=3 {
            for col in -3..=3 {
                let p = CeilingLightsNode::pulse(row, col, 123.4);
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
