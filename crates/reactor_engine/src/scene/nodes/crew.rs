//! Operators walking the floor and the machines they tend

use crate::foundation::math::Vec3;
use crate::render::primitives::Quad;
use crate::render::{BlendMode, Color, Material, RenderResult, Renderer};
use crate::scene::nodes::{draw_cube, draw_quad, draw_sphere, unlit};
use crate::scene::{FrameContext, SceneNode, TransformStack};

const BODY: Material = Material::from_rgb([0.8, 0.3, 0.1], [0.8, 0.3, 0.1], 10.0);
const HEAD: Material = Material::from_rgb([1.0, 0.8, 0.6], [1.0, 0.8, 0.6], 10.0);
const LIMB: Material = Material::from_rgb([0.7, 0.3, 0.1], [0.7, 0.3, 0.1], 10.0);

/// Limb offsets from the head frame with their extents
const LIMBS: [([f32; 2], [f32; 3]); 4] = [
    ([-0.35, 0.3], [0.1, 0.6, 0.1]),
    ([0.35, 0.3], [0.1, 0.6, 0.1]),
    ([-0.15, -0.9], [0.1, 0.8, 0.1]),
    ([0.15, -0.9], [0.1, 0.8, 0.1]),
];

/// A figure circling an anchor point on the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operator {
    /// Anchor X
    pub anchor_x: f32,
    /// Anchor Z
    pub anchor_z: f32,
    /// Phase offset in radians
    pub phase: f32,
}

impl Operator {
    /// Radius of the walking circle
    pub const WALK_RADIUS: f32 = 1.0;
    /// Walking rate in radians per unit of `t`
    pub const WALK_RATE: f32 = 0.05;
    /// Torso centre height
    pub const HEIGHT: f32 = -3.5;
    /// Head offset above the torso centre
    pub const HEAD_OFFSET: f32 = 0.9;

    /// Operator circling `(x, z)` with the given phase
    pub const fn new(anchor_x: f32, anchor_z: f32, phase: f32) -> Self {
        Self {
            anchor_x,
            anchor_z,
            phase,
        }
    }

    /// Torso centre at time `t`
    pub fn position(&self, time: f32) -> Vec3 {
        let (s, c) = (time * Self::WALK_RATE + self.phase).sin_cos();
        Vec3::new(
            self.anchor_x + Self::WALK_RADIUS * s,
            Self::HEIGHT,
            self.anchor_z + Self::WALK_RADIUS * c,
        )
    }

    fn draw(&self, time: f32, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        let p = self.position(time);
        stack.with_pushed(|stack| {
            stack.translate(p.x, p.y, p.z);
            renderer.set_material(&BODY);
            draw_cube(stack, renderer, 0.4, 1.2, 0.3)?;

            renderer.set_material(&HEAD);
            stack.translate(0.0, Self::HEAD_OFFSET, 0.0);
            draw_sphere(stack, renderer, 0.2, 8, 8)?;

            renderer.set_material(&LIMB);
            for ([x, y], [sx, sy, sz]) in LIMBS {
                stack.with_pushed(|stack| {
                    stack.translate(x, y, 0.0);
                    draw_cube(stack, renderer, sx, sy, sz)
                })?;
            }
            Ok(())
        })
    }
}

/// Four operators at the room corners
#[derive(Debug, Clone, Copy, Default)]
pub struct PeopleNode;

impl PeopleNode {
    /// Operators in draw order
    pub const OPERATORS: [Operator; 4] = [
        Operator::new(-5.0, 5.0, 0.0),
        Operator::new(5.0, 5.0, 1.0),
        Operator::new(-5.0, -5.0, 2.0),
        Operator::new(5.0, -5.0, 3.0),
    ];
}

impl SceneNode for PeopleNode {
    fn name(&self) -> &'static str {
        "people"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        for operator in &Self::OPERATORS {
            operator.draw(ctx.time, stack, renderer)?;
        }
        Ok(())
    }
}

/// Control stations, each drawn with its own operator
#[derive(Debug, Clone, Copy, Default)]
pub struct MachinesNode;

impl MachinesNode {
    /// Station positions on the floor as `(x, z)`
    pub const STATIONS: [[f32; 2]; 4] = [[-3.0, 7.0], [3.0, 7.0], [-3.0, -7.0], [3.0, -7.0]];
    /// Operator phase per station
    pub const PHASES: [f32; 4] = [0.5, 1.5, 2.5, 3.5];

    /// Cabinet surface
    pub const MATERIAL: Material = Material::from_rgb([0.2, 0.2, 0.5], [0.5, 0.5, 0.7], 30.0);
    /// Cabinet centre height
    pub const HEIGHT: f32 = -4.0;
    /// Cabinet extents
    pub const SIZE: [f32; 3] = [1.0, 1.0, 0.5];

    /// Status panel base height
    pub const PANEL_HEIGHT: f32 = -3.5;
    /// Status panel offset towards +Z
    pub const PANEL_OFFSET: f32 = 0.3;
    /// Status panel tilt about X
    pub const PANEL_TILT_DEGREES: f32 = -30.0;
    /// Status panel flat colour
    pub const PANEL_COLOR: Color = [0.0, 1.0, 0.5, 1.0];

    /// Status panel shape
    pub fn panel() -> Quad {
        Quad::upright(0.8, 0.6)
    }

    /// Operator assigned to station `index`
    pub fn operator(index: usize) -> Option<Operator> {
        let [x, z] = *Self::STATIONS.get(index)?;
        let phase = *Self::PHASES.get(index)?;
        Some(Operator::new(x, z, phase))
    }

    fn draw_machine(x: f32, z: f32, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.set_material(&Self::MATERIAL);
        stack.with_pushed(|stack| {
            stack.translate(x, Self::HEIGHT, z);
            let [sx, sy, sz] = Self::SIZE;
            draw_cube(stack, renderer, sx, sy, sz)
        })?;

        let panel = Self::panel();
        stack.with_pushed(|stack| {
            stack.translate(x, Self::PANEL_HEIGHT, z + Self::PANEL_OFFSET);
            stack.rotate(Self::PANEL_TILT_DEGREES, 1.0, 0.0, 0.0);
            unlit(renderer, BlendMode::Opaque, |renderer| {
                renderer.set_color(Self::PANEL_COLOR);
                draw_quad(stack, renderer, &panel)
            })
        })
    }
}

impl SceneNode for MachinesNode {
    fn name(&self) -> &'static str {
        "machines"
    }

    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()> {
        for (index, [x, z]) in Self::STATIONS.into_iter().enumerate() {
            Self::draw_machine(x, z, stack, renderer)?;
            if let Some(operator) = Self::operator(index) {
                operator.draw(ctx.time, stack, renderer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_circles_anchor() {
        let operator = Operator::new(-5.0, 5.0, 0.0);
        assert_relative_eq!(operator.position(0.0), Vec3::new(-5.0, -3.5, 6.0), epsilon = 1e-6);

        for step in 0..50 {
            let p = operator.position(step as f32 * 7.3);
            let dx = p.x - operator.anchor_x;
            let dz = p.z - operator.anchor_z;
            assert_relative_eq!((dx * dx + dz * dz).sqrt(), 1.0, epsilon = 1e-5);
            assert_eq!(p.y, -3.5);
        }
    }

    #[test]
    fn test_operators_are_desynchronised() {
        let a = PeopleNode::OPERATORS[0].position(10.0) - Vec3::new(-5.0, -3.5, 5.0);
        let b = PeopleNode::OPERATORS[1].position(10.0) - Vec3::new(5.0, -3.5, 5.0);
        assert!((a - b).norm() > 0.1);
    }

    #[test]
    fn test_station_operators() {
        assert_eq!(MachinesNode::operator(2), Some(Operator::new(-3.0, -7.0, 2.5)));
        assert_eq!(MachinesNode::operator(4), None);
    }
}
