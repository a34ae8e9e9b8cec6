//! # Camera
//!
//! [`Camera`] carries the projection parameters and the current eye placement.
//! [`CameraOrbit`] derives the eye from animation time; nothing about the orbit is
//! stored between frames.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Elliptical orbit around the scene origin at a fixed height
///
/// `eye(t) = (radius_x · cos θ, height, radius_z · sin θ)` with
/// `θ = angular_rate · t` measured in degrees, so one revolution takes
/// `360 / angular_rate` units of `t` (72000 for the stock rate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    /// Semi-axis along X
    pub radius_x: f32,
    /// Semi-axis along Z
    pub radius_z: f32,
    /// Eye height above the origin
    pub height: f32,
    /// Degrees of orbit per unit of `t`
    pub angular_rate: f32,
}

impl CameraOrbit {
    /// Stock X semi-axis
    pub const RADIUS_X: f32 = 18.0;
    /// Stock Z semi-axis
    pub const RADIUS_Z: f32 = 24.0;
    /// Stock eye height
    pub const HEIGHT: f32 = 8.0;
    /// Stock angular rate
    pub const ANGULAR_RATE: f32 = 0.005;

    /// Orbit angle in degrees, reduced to `[0, 360)`
    pub fn angle_degrees(&self, time: f32) -> f32 {
        (self.angular_rate * time).rem_euclid(360.0)
    }

    /// Eye position at time `t`
    pub fn eye(&self, time: f32) -> Vec3 {
        let (s, c) = utils::deg_to_rad(self.angle_degrees(time)).sin_cos();
        Vec3::new(self.radius_x * c, self.height, self.radius_z * s)
    }

    /// Time for one full revolution
    pub fn period(&self) -> f32 {
        360.0 / self.angular_rate
    }
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            radius_x: Self::RADIUS_X,
            radius_z: Self::RADIUS_Z,
            height: Self::HEIGHT,
            angular_rate: Self::ANGULAR_RATE,
        }
    }
}

/// Perspective camera looking at a target
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation
    pub up: Vec3,

    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin with +Y up
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update the aspect ratio
    ///
    /// Only logs changes larger than 0.01 to keep resize storms quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Recompute the aspect ratio from a viewport size
    ///
    /// A viewport with a zero dimension (a minimized window) keeps the
    /// previous aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.set_aspect_ratio(width as f32 / height as f32);
    }

    /// World-to-camera matrix
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Camera-to-clip matrix
    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_degrees, self.aspect, self.near, self.far)
    }

    /// Combined `P × V`
    pub fn get_view_projection_matrix(&self) -> Mat4 {
        self.get_projection_matrix() * self.get_view_matrix()
    }
}

impl Default for Camera {
    /// 60° field of view, 3:2 aspect, clip planes at 0.1 and 200
    fn default() -> Self {
        Self::perspective(CameraOrbit::default().eye(0.0), 60.0, 1.5, 0.1, 200.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_orbit_starts_on_x_axis() {
        let orbit = CameraOrbit::default();
        assert_relative_eq!(orbit.eye(0.0), Vec3::new(18.0, 8.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_orbit_quarter_turn_reaches_z_axis() {
        let orbit = CameraOrbit::default();
        let quarter = orbit.period() / 4.0;
        assert_abs_diff_eq!(orbit.eye(quarter), Vec3::new(0.0, 8.0, 24.0), epsilon = 1e-3);
    }

    #[test]
    fn test_orbit_is_periodic() {
        let orbit = CameraOrbit::default();
        assert_relative_eq!(orbit.period(), 72000.0, epsilon = 1e-2);
        for t in [0.0, 0.05, 17.3, 180.0, 359.9] {
            assert_abs_diff_eq!(orbit.eye(t), orbit.eye(t + 72000.0), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_orbit_height_is_fixed() {
        let orbit = CameraOrbit::default();
        for step in 0..100 {
            let eye = orbit.eye(step as f32 * 913.0);
            assert_eq!(eye.y, 8.0);
            // Always on the ellipse
            let on_ellipse = (eye.x / 18.0).powi(2) + (eye.z / 24.0).powi(2);
            assert_relative_eq!(on_ellipse, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_viewport_updates_aspect() {
        let mut camera = Camera::default();
        camera.set_viewport(1920, 1080);
        assert_relative_eq!(camera.aspect, 16.0 / 9.0, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_viewport_keeps_aspect() {
        let mut camera = Camera::default();
        camera.set_viewport(1920, 1080);
        for (width, height) in [(0, 600), (640, 0), (0, 0)] {
            camera.set_viewport(width, height);
            assert_relative_eq!(camera.aspect, 16.0 / 9.0, epsilon = 1e-6);
            assert!(camera.get_projection_matrix().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_view_projection_puts_target_in_front() {
        let camera = Camera::default();
        let clip = camera.get_view_projection_matrix() * crate::foundation::math::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.xyz() / clip.w;
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-4);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }
}
