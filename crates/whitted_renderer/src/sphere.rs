//! Sphere primitive for ray tracing.

use whitted_math::{Ray, Vec3};

use crate::{Intersection, Material};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    pub(crate) material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be > 0.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect by solving |o + t*d - c|^2 = r^2 for the near root.
    ///
    /// Only the smaller root is tested, so a ray starting inside the sphere
    /// reports no hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let s = ray.origin() - self.center;
        let d = ray.direction();

        let a = d.dot(d);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * s.dot(d);
        let c = s.dot(s) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        // Behind the ray origin
        if t < 0.0 {
            return None;
        }

        Some(Intersection::new(ray.origin(), ray.at(t)))
    }

    /// Outward normal at `point`, with length equal to the radius.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        point - self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Material::default())
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = unit_sphere().intersect(&ray).unwrap();

        assert!((hit.point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        assert!((hit.distance - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_through_center_lies_on_surface() {
        let sphere = Sphere::new(Vec3::new(1.0, -2.0, -7.0), 2.5, Material::default());
        let origins = [
            Vec3::new(10.0, 4.0, 3.0),
            Vec3::new(-6.0, -2.0, -7.0),
            Vec3::new(1.0, 8.0, -7.5),
        ];

        for origin in origins {
            // Unnormalized direction on purpose
            let ray = Ray::new(origin, sphere.center() - origin);
            let hit = sphere.intersect(&ray).unwrap();
            let r = hit.point.distance(sphere.center());
            assert!((r - sphere.radius()).abs() < 1e-3, "distance {} from center", r);
        }
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_miss_sideways() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_origin_inside_is_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_zero_direction_is_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, Material::default());
        assert_eq!(sphere.normal(Vec3::new(0.0, 2.0, -5.0)), Vec3::new(0.0, 2.0, 0.0));
    }
}
