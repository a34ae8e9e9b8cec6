//! Containment struts and base slab

use crate::render::{Material, RenderResult, Renderer};
use crate::scene::nodes::draw_cube;
use crate::scene::{FrameContext, SceneNode, TransformStack};

/// Ring of struts around the core plus the slab it stands on
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentNode;

impl ContainmentNode {
    /// Number of struts
    pub const STRUTS: u32 = 8;
    /// Angle between neighbouring struts, about Z
    pub const STRUT_STEP_DEGREES: f32 = 45.0;
    /// Strut distance from the axis
    pub const STRUT_RADIUS: f32 = 6.5;
    /// Scale applied before the strut cube
    pub const STRUT_SCALE: [f32; 3] = [0.4, 0.4, 10.0];
    /// Strut cube extents
    pub const STRUT_SIZE: [f32; 3] = [0.3, 0.3, 6.0];
    /// Strut surface
    pub const STRUT_MATERIAL: Material = Material::from_rgb([0.7, 0.7, 0.7], [0.3, 0.3, 0.3], 30.0);

    /// Base slab centre height
    pub const BASE_HEIGHT: f32 = -4.5;
    /// Base slab extents
    pub const BASE_SIZE: [f32; 3] = [16.0, 1.0, 16.0];
    /// Base slab surface, matching the walls
    pub const BASE_MATERIAL: Material = Material::from_rgb([0.3, 0.3, 0.35], [0.06, 0.06, 0.06], 5.0);
}

impl SceneNode for ContainmentNode {
    fn name(&self) -> &'static str {
        "containment"
    }

    fn draw(&self, _ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        let [scale_x, scale_y, scale_z] = Self::STRUT_SCALE;
        let [sx, sy, sz] = Self::STRUT_SIZE;
        for i in 0..Self::STRUTS {
            stack.with_pushed(|stack| {
                stack.rotate(i as f32 * Self::STRUT_STEP_DEGREES, 0.0, 0.0, 1.0);
                stack.translate(Self::STRUT_RADIUS, 0.0, 0.0);
                stack.scale(scale_x, scale_y, scale_z);
                renderer.set_material(&Self::STRUT_MATERIAL);
                draw_cube(stack, renderer, sx, sy, sz)
            })?;
        }

        renderer.set_material(&Self::BASE_MATERIAL);
        stack.with_pushed(|stack| {
            stack.translate(0.0, Self::BASE_HEIGHT, 0.0);
            let [bx, by, bz] = Self::BASE_SIZE;
            draw_cube(stack, renderer, bx, by, bz)
        })
    }
}
