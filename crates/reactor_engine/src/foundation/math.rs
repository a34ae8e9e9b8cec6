//! Math utilities and types
//!
//! Provides the affine [`Transform`] used by the scene composer together with the
//! nalgebra aliases shared by the camera and geometry code.
//!
//! # Matrix Convention
//! Matrices are column-major, matching the layout a fixed-function device expects
//! when a model-view matrix is loaded. Composition right-multiplies: `a * b` applies
//! `b` in the local frame that `a` already established.

use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 4x4 affine transform
///
/// Wraps a column-major matrix. Every constructor in this module produces a matrix
/// whose last row is `(0, 0, 0, 1)`; composing such matrices keeps that property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The multiplicative identity
    pub fn identity() -> Self {
        Self { matrix: Mat4::identity() }
    }

    /// Translation by `(x, y, z)` in the parent's frame
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut matrix = Mat4::identity();
        matrix[(0, 3)] = x;
        matrix[(1, 3)] = y;
        matrix[(2, 3)] = z;
        Self { matrix }
    }

    /// Axis-angle rotation built with Rodrigues' formula
    ///
    /// `angle_degrees` is converted to radians internally. The axis is normalized
    /// before use; a zero-length axis cannot be normalized and yields the identity.
    ///
    /// # Example
    /// ```rust
    /// use reactor_engine::foundation::math::{Transform, Vec3};
    ///
    /// let half_turn = Transform::rotation(180.0, 0.0, 0.0, 1.0);
    /// let p = half_turn.transform_point(Vec3::new(1.0, 0.0, 0.0));
    /// assert!((p.x + 1.0).abs() < 1e-5);
    /// ```
    pub fn rotation(angle_degrees: f32, x: f32, y: f32, z: f32) -> Self {
        let len = (x * x + y * y + z * z).sqrt();
        if len <= f32::EPSILON {
            log::trace!("Rotation requested about a zero-length axis, using identity");
            return Self::identity();
        }
        let (x, y, z) = (x / len, y / len, z / len);

        let rad = utils::deg_to_rad(angle_degrees);
        let (s, c) = rad.sin_cos();
        let k = 1.0 - c;

        let matrix = Mat4::new(
            x * x * k + c,     x * y * k - z * s, x * z * k + y * s, 0.0,
            y * x * k + z * s, y * y * k + c,     y * z * k - x * s, 0.0,
            z * x * k - y * s, z * y * k + x * s, z * z * k + c,     0.0,
            0.0,               0.0,               0.0,               1.0,
        );
        Self { matrix }
    }

    /// Diagonal scale; non-uniform factors are allowed
    ///
    /// Normals of scaled geometry are not renormalized here, that is left to
    /// whoever consumes the geometry.
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::new_nonuniform_scaling(&Vec3::new(x, y, z)),
        }
    }

    /// Right-multiply `local` into `self`
    pub fn compose(&self, local: &Self) -> Self {
        Self {
            matrix: self.matrix * local.matrix,
        }
    }

    /// Map a point (w = 1) through this transform
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (self.matrix * Vec4::new(point.x, point.y, point.z, 1.0)).xyz()
    }

    /// Map a direction (w = 0) through this transform
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (self.matrix * Vec4::new(vector.x, vector.y, vector.z, 0.0)).xyz()
    }

    /// Where the local origin lands in the parent frame
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// The 16 scalars in column-major order, as a device would load them
    pub fn as_column_major(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        out.copy_from_slice(self.matrix.as_slice());
        out
    }

    /// Whether the last row is `(0, 0, 0, 1)`
    pub fn is_affine(&self) -> bool {
        let row = self.matrix.row(3);
        row[0] == 0.0 && row[1] == 0.0 && row[2] == 0.0 && row[3] == 1.0
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(&rhs)
    }
}

impl AbsDiffEq for Transform {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, epsilon)
    }
}

impl RelativeEq for Transform {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.matrix.relative_eq(&other.matrix, epsilon, max_relative)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for Mat4 with camera matrices
pub trait Mat4Ext {
    /// Right-handed perspective projection with an OpenGL clip volume
    fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // f = cot(fovy / 2), depth mapped to [-1, 1]
        let f = 1.0 / (utils::deg_to_rad(fov_y_degrees) * 0.5).tan();

        let mut result = Mat4::zeros();
        result[(0, 0)] = f / aspect;
        result[(1, 1)] = f;
        result[(2, 2)] = (far + near) / (near - far);
        result[(2, 3)] = (2.0 * far * near) / (near - far);
        result[(3, 2)] = -1.0;
        result
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let side = forward.cross(&up).normalize();
        let camera_up = side.cross(&forward);

        let rotation = Mat4::new(
            side.x, side.y, side.z, 0.0,
            camera_up.x, camera_up.y, camera_up.z, 0.0,
            -forward.x, -forward.y, -forward.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        rotation * Transform::translation(-eye.x, -eye.y, -eye.z).matrix
    }
}
