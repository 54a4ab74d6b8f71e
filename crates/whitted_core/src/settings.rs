//! Render context settings.
//!
//! These are fixed for the duration of one render pass: the renderer
//! builds an immutable render context from them once, before tracing.

use serde::{Deserialize, Serialize};
use whitted_math::{Vec3, Vec4};

/// Pinhole camera configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Eye position in world space
    pub eye: Vec3,

    /// Distance from the eye to the image plane
    pub near: f32,

    /// Horizontal field of view in degrees
    pub fov_x_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            near: 1.0,
            fov_x_degrees: 30.0,
        }
    }
}

impl CameraSettings {
    /// Horizontal field of view in radians.
    pub fn fov_x(&self) -> f32 {
        self.fov_x_degrees.to_radians()
    }
}

/// Global render parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Reflection/transmission recursion bound
    pub max_depth: u32,

    /// Color returned when a ray hits nothing or exceeds `max_depth`
    pub background: Vec4,

    /// Ambient light color, scaled by each material's ambient coefficient
    pub ambient: Vec4,

    /// Tile edge length for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 300,
            max_depth: 6,
            background: Vec4::new(0.10, 0.0, 0.10, 1.0),
            ambient: Vec4::new(0.03125, 0.0, 0.0625, 1.0),
            bucket_size: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settings_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.width, 500);
        assert_eq!(settings.height, 300);
        assert_eq!(settings.max_depth, 6);
        assert_eq!(settings.background, Vec4::new(0.10, 0.0, 0.10, 1.0));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "width": 64, "max_depth": 2 }"#).unwrap();

        assert_eq!(settings.width, 64);
        assert_eq!(settings.max_depth, 2);
        assert_eq!(settings.height, 300);
        assert_eq!(settings.bucket_size, 64);
    }

    #[test]
    fn test_camera_fov_radians() {
        let camera = CameraSettings::default();
        assert!((camera.fov_x() - std::f32::consts::PI / 6.0).abs() < 1e-6);
    }
}
