//! Camera for primary ray generation.

use whitted_core::CameraSettings;
use whitted_math::{normalize, Ray, Vec3};

/// Pinhole camera looking down -Z with the image plane at z = -near.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    near: f32,
    /// Horizontal field of view in radians
    fov_x: f32,
}

impl Camera {
    /// Create a camera. `fov_x` is in radians.
    pub fn new(eye: Vec3, near: f32, fov_x: f32) -> Self {
        Self { eye, near, fov_x }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn fov_x(&self) -> f32 {
        self.fov_x
    }

    /// World-space width of the image plane: 2 * near * tan(fov_x / 2).
    pub fn image_plane_width(&self) -> f32 {
        2.0 * self.near * (self.fov_x / 2.0).tan()
    }

    /// World-space point on the image plane for pixel (i, j).
    ///
    /// Pixel (0, 0) is the bottom-left corner. Both axes use the same
    /// world units per pixel, derived from the horizontal field of view.
    pub fn pixel_to_world(&self, i: u32, j: u32, width: u32, height: u32) -> Vec3 {
        let scale = self.image_plane_width() / width as f32;
        let x = (i64::from(i) - i64::from(width / 2)) as f32 * scale;
        let y = (i64::from(j) - i64::from(height / 2)) as f32 * scale;
        Vec3::new(x, y, -self.near)
    }

    /// Primary ray through pixel (i, j), starting on the image plane.
    pub fn primary_ray(&self, i: u32, j: u32, width: u32, height: u32) -> Ray {
        let pixel = self.pixel_to_world(i, j, width, height);
        Ray::new(pixel, normalize(pixel - self.eye))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from(&CameraSettings::default())
    }
}

impl From<&CameraSettings> for Camera {
    fn from(settings: &CameraSettings) -> Self {
        Self::new(settings.eye, settings.near, settings.fov_x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_image_plane_width() {
        // 90 degrees at near = 1 spans [-1, 1]
        let camera = Camera::new(Vec3::ZERO, 1.0, FRAC_PI_2);
        assert!((camera.image_plane_width() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let camera = Camera::new(Vec3::ZERO, 1.0, FRAC_PI_2);
        let ray = camera.primary_ray(50, 25, 100, 50);

        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, -1.0));
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_pixels() {
        let camera = Camera::new(Vec3::ZERO, 1.0, FRAC_PI_2);

        // Bottom-left: x = -50 * 2/100 = -1, y = -25 * 2/100 = -0.5
        let p = camera.pixel_to_world(0, 0, 100, 50);
        assert!((p - Vec3::new(-1.0, -0.5, -1.0)).length() < 1e-6);

        // Top-right pixel points up and to the right
        let ray = camera.primary_ray(99, 49, 100, 50);
        assert!(ray.direction().x > 0.0);
        assert!(ray.direction().y > 0.0);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_odd_dimensions_use_integer_halving() {
        let camera = Camera::new(Vec3::ZERO, 1.0, FRAC_PI_2);
        // width / 2 == 2 for width 5
        let p = camera.pixel_to_world(2, 1, 5, 3);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_from_settings() {
        let camera = Camera::from(&CameraSettings::default());
        assert_eq!(camera.near(), 1.0);
        assert!((camera.fov_x() - std::f32::consts::PI / 6.0).abs() < 1e-6);
    }
}
