use super::render_at;
use crate::foundation::math::{Transform, Vec3};
use crate::render::{BlendMode, Primitive};
use crate::scene::nodes::{
    CeilingLightsNode, CoreNode, FloorNode, HologramsNode, MachinesNode, Operator, ParticlesNode, PeopleNode, RingsNode,
};
use crate::scene::SceneControls;
use approx::assert_relative_eq;

#[test]
fn test_holograms_are_additive_and_unlit() {
    let (renderer, _) = render_at(200.0, &SceneControls::default());
    let quads: Vec<_> = renderer
        .calls()
        .iter()
        .filter(|call| call.primitive == Primitive::Quad)
        .collect();
    assert_eq!(quads.len(), 10);

    for (i, call) in quads[..6].iter().enumerate() {
        assert_eq!(call.blend, BlendMode::Additive);
        assert!(!call.lighting);
        assert_eq!(call.color, HologramsNode::color(i as u32));
    }
    for call in &quads[6..] {
        assert_eq!(call.blend, BlendMode::Opaque);
        assert!(!call.lighting);
        assert_eq!(call.color, MachinesNode::PANEL_COLOR);
    }

    // Everything else is blended opaquely
    assert_eq!(renderer.last_frame().blended_draws, 6);
}

#[test]
fn test_state_is_restored_after_frame() {
    let (renderer, _) = render_at(5.0, &SceneControls::default());
    assert!(renderer.lighting_enabled());
    assert_eq!(renderer.blend(), BlendMode::Opaque);
}

#[test]
fn test_lit_and_unlit_partition() {
    let (renderer, _) = render_at(5.0, &SceneControls::default());
    // Floor lights, holograms, particles, ceiling LEDs, status panels
    assert_eq!(renderer.last_frame().unlit_draws, 121 + 6 + 50 + 49 + 4);
}

#[test]
fn test_floor_is_drawn_first() {
    let (renderer, _) = render_at(0.0, &SceneControls::default());
    let floor = &renderer.calls()[0];
    assert_eq!(floor.material, Some(FloorNode::MATERIAL));
    assert!(floor.lighting);
    assert_relative_eq!(floor.origin(), Vec3::new(0.0, -5.5, 0.0), epsilon = 1e-6);
    // Unit cube scaled to the slab extents
    let corner = floor.model.transform_point(Vec3::new(0.5, 0.5, 0.5));
    assert_relative_eq!(corner, Vec3::new(15.25, -5.4, 15.25), epsilon = 1e-5);
}

#[test]
fn test_core_emission_pulses_and_clears() {
    let t = 78.5;
    let (renderer, _) = render_at(t, &SceneControls::default());
    let strips: Vec<_> = renderer
        .calls()
        .iter()
        .filter(|call| matches!(call.primitive, Primitive::QuadStrip { .. }))
        .collect();

    for core in &strips[..33] {
        let emission = core.emission.unwrap();
        assert_eq!(emission.color, CoreNode::COLOR);
        assert_relative_eq!(emission.intensity, CoreNode::pulse(t), epsilon = 1e-6);
        assert_eq!(core.origin(), Vec3::zeros());
    }
    for ring in &strips[33..33 + 192] {
        assert!(ring.emission.is_none());
    }
}

#[test]
fn test_ceiling_leds_pulse_by_cell() {
    let t = 12.0;
    let (renderer, _) = render_at(t, &SceneControls::default());
    let leds: Vec<_> = renderer.calls().iter().filter(|call| call.emission.is_some()).skip(33).collect();
    assert_eq!(leds.len(), 49);

    let first = leds[0];
    assert_relative_eq!(first.origin(), Vec3::new(-12.0, 9.75, -12.0), epsilon = 1e-5);
    assert_relative_eq!(first.emission.unwrap().intensity, CeilingLightsNode::pulse(-3, -3, t), epsilon = 1e-6);

    let last = leds[48];
    assert_relative_eq!(last.origin(), Vec3::new(12.0, 9.75, 12.0), epsilon = 1e-5);
    assert_relative_eq!(last.emission.unwrap().intensity, CeilingLightsNode::pulse(3, 3, t), epsilon = 1e-6);
}

#[test]
fn test_particles_follow_their_path() {
    let t = 250.0;
    let (renderer, _) = render_at(t, &SceneControls::default());
    let particles: Vec<_> = renderer
        .calls()
        .iter()
        .filter(|call| matches!(call.primitive, Primitive::Sphere { .. }))
        .collect();
    assert_eq!(particles.len(), 50);

    for (i, call) in particles.iter().enumerate() {
        let expected = ParticlesNode::particle(i as u32, t);
        assert_relative_eq!(call.origin(), expected.position, epsilon = 1e-4);
        assert_eq!(call.primitive, Primitive::Sphere { radius: ParticlesNode::RADIUS });
        assert_eq!(call.color, ParticlesNode::COLOR);
    }
}

#[test]
fn test_struts_ring_the_core() {
    let (renderer, _) = render_at(0.0, &SceneControls::default());
    // Struts follow the floor and its light grid
    let struts = &renderer.calls()[122..130];
    for (i, strut) in struts.iter().enumerate() {
        let angle = (i as f32 * 45.0).to_radians();
        let expected = Vec3::new(6.5 * angle.cos(), 6.5 * angle.sin(), 0.0);
        assert_relative_eq!(strut.origin(), expected, epsilon = 1e-4);
    }
}

#[test]
fn test_holograms_orbit_the_core() {
    let t = 4321.0;
    let (renderer, _) = render_at(t, &SceneControls::default());
    let panels: Vec<_> = renderer
        .calls()
        .iter()
        .filter(|call| call.primitive == Primitive::Quad)
        .take(6)
        .collect();

    for (i, call) in panels.iter().enumerate() {
        let i = i as u32;
        let yaw = Transform::rotation(HologramsNode::yaw(i, t), 0.0, 1.0, 0.0);
        let expected = yaw.transform_point(Vec3::new(0.0, HologramsNode::lift(i, t), HologramsNode::DISTANCE));
        assert_relative_eq!(call.origin(), expected, epsilon = 1e-4);
    }
}

#[test]
fn test_operator_limbs_hang_from_the_head() {
    let t = 37.0;
    let (renderer, _) = render_at(t, &SceneControls::default());
    let calls = renderer.calls();
    let torso = PeopleNode::OPERATORS[0].position(t);

    let body = calls
        .iter()
        .position(|call| matches!(call.primitive, Primitive::Cube { .. }) && (call.origin() - torso).norm() < 1e-4)
        .unwrap();
    let head = torso + Vec3::new(0.0, Operator::HEAD_OFFSET, 0.0);
    assert!(matches!(calls[body + 1].primitive, Primitive::QuadStrip { .. }));
    assert_relative_eq!(calls[body + 1].origin(), head, epsilon = 1e-5);

    let limbs: Vec<_> = calls[body + 1..]
        .iter()
        .filter(|call| matches!(call.primitive, Primitive::Cube { .. }))
        .take(4)
        .collect();
    let offsets = [
        Vec3::new(-0.35, 0.3, 0.0),
        Vec3::new(0.35, 0.3, 0.0),
        Vec3::new(-0.15, -0.9, 0.0),
        Vec3::new(0.15, -0.9, 0.0),
    ];
    for (limb, offset) in limbs.iter().zip(offsets) {
        assert_relative_eq!(limb.origin(), head + offset, epsilon = 1e-5);
    }
}

#[test]
fn test_rings_spin_about_their_axes() {
    let t = 77.7;
    let (renderer, _) = render_at(t, &SceneControls::default());
    let strips: Vec<_> = renderer
        .calls()
        .iter()
        .filter(|call| matches!(call.primitive, Primitive::QuadStrip { .. }))
        .skip(33)
        .take(192)
        .collect();

    for (ring, chunk) in RingsNode::RINGS.iter().zip(strips.chunks(RingsNode::MAJOR_STEPS as usize)) {
        let [x, y, z] = ring.axis;
        let expected = Transform::rotation(ring.angle(t), x, y, z);
        for call in chunk {
            assert_relative_eq!(call.model, expected, epsilon = 1e-5);
        }
    }
}
