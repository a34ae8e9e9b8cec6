//! Material system for rendering
//!
//! Fixed-function style surface parameters: diffuse/specular/shininess, a separate
//! emissive term for glowing elements, and the blend mode used for translucent ones.

/// RGBA colour
pub type Color = [f32; 4];

/// RGB colour
pub type Rgb = [f32; 3];

/// Ambient reflectance is derived from diffuse by this factor
pub const AMBIENT_FACTOR: f32 = 0.12;

/// Surface material for lit geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse reflectance (RGBA)
    pub diffuse: Color,

    /// Specular reflectance (RGBA)
    pub specular: Color,

    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    /// Create a material from RGBA reflectances
    pub fn new(diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }

    /// Create an opaque material from RGB reflectances
    pub const fn from_rgb(diffuse: Rgb, specular: Rgb, shininess: f32) -> Self {
        Self {
            diffuse: [diffuse[0], diffuse[1], diffuse[2], 1.0],
            specular: [specular[0], specular[1], specular[2], 1.0],
            shininess,
        }
    }

    /// Ambient reflectance: diffuse scaled by [`AMBIENT_FACTOR`], alpha kept
    pub fn ambient(&self) -> Color {
        [
            self.diffuse[0] * AMBIENT_FACTOR,
            self.diffuse[1] * AMBIENT_FACTOR,
            self.diffuse[2] * AMBIENT_FACTOR,
            self.diffuse[3],
        ]
    }
}

/// Emissive term: a colour scaled by a time-varying intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    /// Base emissive colour
    pub color: Rgb,

    /// Scale applied to the colour
    pub intensity: f32,
}

impl Emission {
    /// Create an emission term
    pub fn new(color: Rgb, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Scaled colour with opaque alpha, as loaded into the material
    pub fn rgba(&self) -> Color {
        [
            self.color[0] * self.intensity,
            self.color[1] * self.intensity,
            self.color[2] * self.intensity,
            1.0,
        ]
    }
}

/// How fragments combine with what is already in the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// No blending
    #[default]
    Opaque,
    /// `src * alpha + dst`, for glow
    Additive,
}
