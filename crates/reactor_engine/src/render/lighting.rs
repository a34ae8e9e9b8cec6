//! Lighting system
//!
//! The room is lit by a global ambient term and two positional lights: one at the
//! reactor core and a cool fill light high above and behind the camera path.

use crate::foundation::math::Vec3;
use crate::render::material::Color;

/// Positional light
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Diffuse colour
    pub diffuse: Color,
    /// Specular colour
    pub specular: Color,
}

impl PointLight {
    /// Create a point light
    pub fn new(position: Vec3, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            diffuse,
            specular,
        }
    }
}

/// Global ambient plus a list of lights
#[derive(Debug, Clone, PartialEq)]
pub struct LightingEnvironment {
    /// Global ambient colour
    pub ambient: Color,
    /// Enabled lights, in device slot order
    pub lights: Vec<PointLight>,
}

impl LightingEnvironment {
    /// Environment with only an ambient term
    pub fn new(ambient: Color) -> Self {
        Self {
            ambient,
            lights: Vec::new(),
        }
    }

    /// Add a light
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    /// The reactor room's light rig
    pub fn reactor_room() -> Self {
        Self::new([0.2, 0.2, 0.25, 1.0])
            .with_light(PointLight::new(
                Vec3::zeros(),
                [0.9, 0.9, 1.0, 1.0],
                [1.0, 1.0, 1.2, 1.0],
            ))
            .with_light(PointLight::new(
                Vec3::new(-20.0, 20.0, 40.0),
                [0.6, 0.6, 0.8, 1.0],
                [0.6, 0.6, 0.7, 1.0],
            ))
    }
}

impl Default for LightingEnvironment {
    fn default() -> Self {
        Self::reactor_room()
    }
}
