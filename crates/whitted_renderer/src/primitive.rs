//! Primitive sum type and intersection results.

use whitted_core::ObjectDescription;
use whitted_math::{Ray, Vec3};

use crate::{Color, Material, Plane, Sphere, Triangle};

/// Nearest intersection of a ray with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Euclidean distance from the ray origin to `point`
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
}

impl Intersection {
    /// Record an intersection at `point` for a ray starting at `origin`.
    #[inline]
    pub fn new(origin: Vec3, point: Vec3) -> Self {
        Self {
            distance: origin.distance(point),
            point,
        }
    }
}

/// A geometric entity in the scene.
///
/// The set of shapes is closed, so this is an enum rather than a trait
/// object; the closest-hit scan stays a tight loop over plain data.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Primitive {
    /// Nearest intersection with the ray for t >= 0, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray),
            Primitive::Plane(p) => p.intersect(ray),
            Primitive::Triangle(t) => t.intersect(ray),
        }
    }

    /// Surface normal at `point`. Not necessarily unit length.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.normal(point),
            Primitive::Plane(p) => p.normal(point),
            Primitive::Triangle(t) => t.normal(point),
        }
    }

    /// Surface color at `point`.
    pub fn surface_color(&self, point: Vec3) -> Color {
        match self {
            Primitive::Plane(p) => p.surface_color(point),
            _ => self.material().color,
        }
    }

    /// The primitive's material.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::Plane(p) => &p.material,
            Primitive::Triangle(t) => &t.material,
        }
    }

    /// Reference position (sphere center, plane point, triangle centroid).
    pub fn position(&self) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.center(),
            Primitive::Plane(p) => p.point(),
            Primitive::Triangle(t) => t.centroid(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<&ObjectDescription> for Primitive {
    fn from(desc: &ObjectDescription) -> Self {
        match desc {
            ObjectDescription::Sphere(s) => {
                Sphere::new(s.center, s.radius, Material::from(&s.material)).into()
            }
            ObjectDescription::Plane(p) => {
                let mut plane = Plane::new(p.point, p.normal, Material::from(&p.material));
                if let Some(checker) = p.checker {
                    plane = plane.with_checker(checker);
                }
                plane.into()
            }
            ObjectDescription::Triangle(t) => {
                Triangle::new(t.v0, t.v1, t.v2, Material::from(&t.material)).into()
            }
        }
    }
}
