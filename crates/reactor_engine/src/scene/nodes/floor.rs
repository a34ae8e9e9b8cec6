//! Floor slab and the floor light grid

use crate::render::{BlendMode, Color, Material, RenderResult, Renderer};
use crate::scene::nodes::{draw_cube, unlit};
use crate::scene::{FrameContext, SceneNode, TransformStack};

/// Thin slab under the whole room
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorNode;

impl FloorNode {
    /// Slab surface
    pub const MATERIAL: Material = Material::from_rgb([0.3, 0.3, 0.35], [0.05, 0.05, 0.05], 5.0);
    /// Slab centre height
    pub const HEIGHT: f32 = -5.5;
    /// Slab extents
    pub const SIZE: [f32; 3] = [30.5, 0.2, 30.5];
}

impl SceneNode for FloorNode {
    fn name(&self) -> &'static str {
        "floor"
    }

    fn draw(&self, _ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.set_material(&Self::MATERIAL);
        stack.translate(0.0, Self::HEIGHT, 0.0);
        let [sx, sy, sz] = Self::SIZE;
        draw_cube(stack, renderer, sx, sy, sz)
    }
}

/// 11×11 grid of unlit markers resting on the floor
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorLightsNode;

impl FloorLightsNode {
    /// Grid runs over `-HALF_EXTENT..=HALF_EXTENT` on both axes
    pub const HALF_EXTENT: i32 = 5;
    /// Distance between markers
    pub const SPACING: f32 = 2.5;
    /// Marker centre height
    pub const HEIGHT: f32 = -5.4;
    /// Marker extents
    pub const SIZE: [f32; 3] = [0.2, 0.05, 0.2];
    /// Flat marker colour
    pub const COLOR: Color = [0.2, 1.0, 0.8, 1.0];

    /// Marker positions in draw order
    pub fn positions() -> impl Iterator<Item = [f32; 3]> {
        let range = -Self::HALF_EXTENT..=Self::HALF_EXTENT;
        range.clone().flat_map(move |i| {
            range
                .clone()
                .map(move |j| [i as f32 * Self::SPACING, Self::HEIGHT, j as f32 * Self::SPACING])
        })
    }
}

impl SceneNode for FloorLightsNode {
    fn name(&self) -> &'static str {
        "floor_lights"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        if !ctx.controls.show_floor_lights {
            return Ok(());
        }

        unlit(renderer, BlendMode::Opaque, |renderer| {
            renderer.set_color(Self::COLOR);
            let [sx, sy, sz] = Self::SIZE;
            for [x, y, z] in Self::positions() {
                stack.with_pushed(|stack| {
                    stack.translate(x, y, z);
                    draw_cube(stack, renderer, sx, sy, sz)
                })?;
            }
            Ok(())
        })
    }
}
