//! Intersectable scene and the closest-hit query.

use whitted_core::SceneDescription;
use whitted_math::{Ray, Vec3};

use crate::{Light, Primitive};

/// What a ray hit.
#[derive(Debug, Clone, Copy)]
pub enum HitTarget<'a> {
    Primitive(&'a Primitive),
    Light(&'a Light),
}

/// Result of a closest-hit query.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub target: HitTarget<'a>,
    /// Point of intersection
    pub point: Vec3,
    /// Euclidean distance from the ray origin
    pub distance: f32,
}

/// An ordered collection of primitives plus the point lights.
///
/// Lights are kept apart from geometry but still take part in the
/// closest-hit query, since a ray may "reach" a light.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a scene description, preserving authored order.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let mut scene = Self::new();
        for light in &desc.lights {
            scene.add_light(Light::from(light));
        }
        for object in &desc.objects {
            scene.add(Primitive::from(object));
        }

        log::debug!(
            "Built scene with {} primitives and {} lights",
            scene.primitives.len(),
            scene.lights.len()
        );
        scene
    }

    /// Add a primitive.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of primitives and lights.
    pub fn len(&self) -> usize {
        self.primitives.len() + self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.lights.is_empty()
    }

    /// Find the hit nearest to the ray origin by Euclidean distance.
    ///
    /// Brute force over every light, then every primitive. On equal
    /// distances the first one scanned wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let lights = self
            .lights
            .iter()
            .filter_map(|light| Some((HitTarget::Light(light), light.intersect(ray)?)));
        let primitives = self
            .primitives
            .iter()
            .filter_map(|prim| Some((HitTarget::Primitive(prim), prim.intersect(ray)?)));

        let mut closest: Option<Hit<'_>> = None;
        for (target, intersection) in lights.chain(primitives) {
            let closer = match &closest {
                Some(best) => intersection.distance < best.distance,
                None => true,
            };
            if closer {
                closest = Some(Hit {
                    target,
                    point: intersection.point,
                    distance: intersection.distance,
                });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Plane, Sphere};
    use whitted_core::{demo_scene, ObjectDescription};

    fn sphere_at(z: f32, color: Color) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, Material::new(color))
    }

    fn hit_color(hit: &Hit<'_>) -> Color {
        match hit.target {
            HitTarget::Primitive(p) => p.material().color,
            HitTarget::Light(l) => l.color(),
        }
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).is_none());
    }

    #[test]
    fn test_closest_of_several() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let green = Color::new(0.0, 1.0, 0.0, 1.0);

        let mut scene = Scene::new();
        scene.add(sphere_at(-10.0, red));
        scene.add(sphere_at(-5.0, green));

        let hit = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(hit_color(&hit), green);
        assert!((hit.point - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
        assert!((hit.distance - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_keeps_first_inserted() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let blue = Color::new(0.0, 0.0, 1.0, 1.0);

        let mut scene = Scene::new();
        scene.add(sphere_at(-5.0, red));
        scene.add(sphere_at(-5.0, blue));

        let hit = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(hit_color(&hit), red);
    }

    #[test]
    fn test_light_in_front_of_geometry_wins() {
        let light_color = Color::new(1.0, 1.0, 0.0, 1.0);
        let mut scene = Scene::new();
        scene.add(Plane::new(Vec3::new(0.0, 0.0, -20.0), Vec3::Z, Material::default()));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, -10.0), 1.0, light_color));

        let hit = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert!(matches!(hit.target, HitTarget::Light(_)));
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn test_geometry_in_front_of_light_wins() {
        let mut scene = Scene::new();
        scene.add(sphere_at(-5.0, Color::ONE));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Color::ONE));

        let hit = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert!(matches!(hit.target, HitTarget::Primitive(_)));
    }

    #[test]
    fn test_from_description_preserves_order() {
        let desc = demo_scene();
        let scene = Scene::from_description(&desc);

        assert_eq!(scene.lights().len(), desc.lights.len());
        assert_eq!(scene.primitives().len(), desc.objects.len());
        assert_eq!(scene.len(), desc.lights.len() + desc.objects.len());
        assert!(matches!(desc.objects[0], ObjectDescription::Sphere(_)));
        assert!(matches!(scene.primitives()[0], Primitive::Sphere(_)));
    }
}
