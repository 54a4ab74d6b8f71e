//! Scene description types.
//!
//! A scene description is the externally authored, renderer-agnostic list
//! of objects and lights plus the camera and render settings. It is built
//! once (from JSON or in code), validated, and then handed to the renderer
//! as read-only data.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use whitted_math::{Vec3, Vec4};

use crate::settings::{CameraSettings, RenderSettings};

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Object {index}: {message}")]
    InvalidObject { index: usize, message: String },

    #[error("Light {index}: {message}")]
    InvalidLight { index: usize, message: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Phong material parameters.
///
/// Ranges are nominal only: colors are clamped once at the end of a trace,
/// and the coefficients are never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    /// Surface color (RGBA). Alpha below 1.0 makes the surface translucent.
    pub color: Vec4,

    /// Ambient coefficient, nominally [0, 1]
    pub ambient: f32,

    /// Diffuse coefficient, nominally [0, 1]
    pub diffuse: f32,

    /// Specular coefficient, nominally [0, 1]. Also weights mirror reflection.
    pub specular: f32,

    /// Specular exponent, nominally [0, 500]
    pub shininess: f32,

    /// Refractive index, nominally [0, 3]. Stored but not used for bending.
    pub refraction: f32,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.75, 0.75, 0.75, 1.0),
            ambient: 1.0,
            diffuse: 1.0,
            specular: 1.0,
            shininess: 75.0,
            refraction: 1.0,
        }
    }
}

impl MaterialDescription {
    /// Create a material with the given color and default coefficients.
    pub fn with_color(color: Vec4) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Names of the parameters lying outside their nominal ranges.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.color.to_array().iter().any(|c| !(0.0..=1.0).contains(c)) {
            names.push("color");
        }
        for (name, value) in [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ] {
            if !(0.0..=1.0).contains(&value) {
                names.push(name);
            }
        }
        if !(0.0..=500.0).contains(&self.shininess) {
            names.push("shininess");
        }
        if !(0.0..=3.0).contains(&self.refraction) {
            names.push("refraction");
        }
        names
    }
}

/// A checkerboard surface pattern.
///
/// Cells of edge `size` alternate between the material color and `color`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checker {
    /// Cell edge length in world units
    pub size: f32,

    /// Color of the alternate cells (RGB; alpha comes from the material)
    pub color: Vec4,
}

/// A sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialDescription,
}

impl Default for SphereDescription {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 1.0,
            material: MaterialDescription::default(),
        }
    }
}

/// An infinite plane through `point` with the given normal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneDescription {
    pub point: Vec3,
    /// Need not be unit length; the renderer normalizes it.
    pub normal: Vec3,
    pub material: MaterialDescription,
    pub checker: Option<Checker>,
}

impl Default for PlaneDescription {
    fn default() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            material: MaterialDescription::default(),
            checker: None,
        }
    }
}

/// A triangle given by three vertices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleDescription {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub material: MaterialDescription,
}

impl Default for TriangleDescription {
    fn default() -> Self {
        Self {
            v0: Vec3::new(-0.5, 1.0, 0.0),
            v1: Vec3::new(0.0, 1.0, 0.0),
            v2: Vec3::new(0.5, 0.0, 0.0),
            material: MaterialDescription::default(),
        }
    }
}

/// Any geometric object in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDescription {
    Sphere(SphereDescription),
    Plane(PlaneDescription),
    Triangle(TriangleDescription),
}

impl ObjectDescription {
    /// The object's material.
    pub fn material(&self) -> &MaterialDescription {
        match self {
            ObjectDescription::Sphere(s) => &s.material,
            ObjectDescription::Plane(p) => &p.material,
            ObjectDescription::Triangle(t) => &t.material,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        let invalid = |message: &str| SceneError::InvalidObject {
            index,
            message: message.to_string(),
        };

        match self {
            ObjectDescription::Sphere(s) => {
                if !(s.radius.is_finite() && s.radius > 0.0) {
                    return Err(invalid(&format!("sphere radius must be > 0, got {}", s.radius)));
                }
            }
            ObjectDescription::Plane(p) => {
                if p.normal.length_squared() == 0.0 || !p.normal.is_finite() {
                    return Err(invalid("plane normal must be a non-zero vector"));
                }
                if let Some(checker) = p.checker {
                    if !(checker.size.is_finite() && checker.size > 0.0) {
                        return Err(invalid("checker size must be > 0"));
                    }
                }
            }
            ObjectDescription::Triangle(t) => {
                if !(t.v0.is_finite() && t.v1.is_finite() && t.v2.is_finite()) {
                    return Err(invalid("triangle vertices must be finite"));
                }
            }
        }

        let out_of_range = self.material().out_of_range();
        if !out_of_range.is_empty() {
            log::warn!(
                "Object {} material outside nominal range: {}",
                index,
                out_of_range.join(", ")
            );
        }

        Ok(())
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDescription {
    pub position: Vec3,

    /// Base intensity, must be > 0
    pub intensity: f32,

    /// Attenuation coefficient applied to the constant, linear and
    /// quadratic distance terms alike
    pub falloff: f32,

    /// Emitted color
    pub color: Vec4,
}

impl Default for LightDescription {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            intensity: 1.0,
            falloff: 0.0075,
            color: Vec4::ONE,
        }
    }
}

impl LightDescription {
    /// Create a light at `position` with the given intensity and color.
    pub fn new(position: Vec3, intensity: f32, color: Vec4) -> Self {
        Self {
            position,
            intensity,
            color,
            ..Default::default()
        }
    }
}

/// A complete scene: camera, settings, lights and objects in authored order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: CameraSettings,
    pub settings: RenderSettings,
    pub lights: Vec<LightDescription>,
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Create an empty scene with default camera and settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object.
    pub fn add_object(&mut self, object: ObjectDescription) {
        self.objects.push(object);
    }

    /// Add a light.
    pub fn add_light(&mut self, light: LightDescription) {
        self.lights.push(light);
    }

    /// Check every invariant the renderer relies on.
    pub fn validate(&self) -> SceneResult<()> {
        let s = &self.settings;
        if s.width == 0 || s.height == 0 {
            return Err(SceneError::InvalidSettings(format!(
                "canvas must be non-empty, got {}x{}",
                s.width, s.height
            )));
        }
        if s.bucket_size == 0 {
            return Err(SceneError::InvalidSettings("bucket_size must be > 0".into()));
        }

        let c = &self.camera;
        if !(c.near.is_finite() && c.near > 0.0) {
            return Err(SceneError::InvalidCamera(format!("near must be > 0, got {}", c.near)));
        }
        if !(c.fov_x_degrees > 0.0 && c.fov_x_degrees < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "fov_x_degrees must lie in (0, 180), got {}",
                c.fov_x_degrees
            )));
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.intensity.is_finite() && light.intensity > 0.0) {
                return Err(SceneError::InvalidLight {
                    index,
                    message: format!("intensity must be > 0, got {}", light.intensity),
                });
            }
            if !(light.falloff.is_finite() && light.falloff > 0.0) {
                return Err(SceneError::InvalidLight {
                    index,
                    message: format!("falloff must be > 0, got {}", light.falloff),
                });
            }
            if !light.position.is_finite() {
                return Err(SceneError::InvalidLight {
                    index,
                    message: "position must be finite".into(),
                });
            }
        }

        for (index, object) in self.objects.iter().enumerate() {
            object.validate(index)?;
        }

        Ok(())
    }
}
