//! Point lights.

use whitted_core::LightDescription;
use whitted_math::{normalize, Interval, Ray, Vec3};

use crate::{Color, Intersection, Material};

/// Cosine window for the "ray reaches this light" test.
///
/// A ray counts as reaching the light when the angle between its direction
/// and the direction to the light is within roughly 2.5 degrees. This is a
/// cone, not a geometric intersection: the footprint grows with distance.
const LIGHT_CONE: Interval = Interval::new(0.999, 1.001);

/// A point illuminant.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    position: Vec3,
    intensity: f32,
    falloff: f32,
    /// Emitted color lives in `material.color`
    material: Material,
}

impl Light {
    /// Create a light with the default falloff and a white-lit material.
    pub fn new(position: Vec3, intensity: f32, color: Color) -> Self {
        Self::from(&LightDescription::new(position, intensity, color))
    }

    /// Set the attenuation coefficient.
    pub fn with_falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The light's own color, unattenuated.
    pub fn color(&self) -> Color {
        self.material.color
    }

    /// Attenuated intensity at `point`:
    /// intensity / (falloff + falloff*d + falloff*d^2).
    pub fn intensity_at(&self, point: Vec3) -> f32 {
        let d = point.distance(self.position);
        self.intensity / (self.falloff + self.falloff * d + self.falloff * d * d)
    }

    /// Attenuated color at `point`.
    pub fn color_at(&self, point: Vec3) -> Color {
        self.intensity_at(point) * self.material.color
    }

    /// Does the ray head (almost) straight at the light?
    ///
    /// On success the hit point is exactly the light position, which the
    /// shadow test relies on.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let to_light = normalize(self.position - ray.origin());
        let cos_angle = normalize(ray.direction()).dot(to_light);

        if LIGHT_CONE.contains(cos_angle) {
            Some(Intersection::new(ray.origin(), self.position))
        } else {
            None
        }
    }
}

impl From<&LightDescription> for Light {
    fn from(desc: &LightDescription) -> Self {
        Self {
            position: desc.position,
            intensity: desc.intensity,
            falloff: desc.falloff,
            material: Material {
                color: desc.color,
                ambient: 1.0,
                diffuse: 1.0,
                specular: 1.0,
                shininess: 1.0,
                refraction: 1.0,
            },
        }
    }
}
