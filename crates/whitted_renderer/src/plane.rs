//! Infinite plane primitive.

use whitted_core::Checker;
use whitted_math::{normalize, Ray, Vec3};

use crate::{Color, Intersection, Material};

/// |normal . direction| at or below this counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-4;

/// An infinite plane through `point` with a unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    pub(crate) material: Material,
    checker: Option<Checker>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normalize(normal),
            material,
            checker: None,
        }
    }

    /// Paint the plane with a checkerboard.
    pub fn with_checker(mut self, checker: Checker) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect with the ray.
    ///
    /// Rays (nearly) parallel to the plane never hit it, including rays
    /// lying inside the plane.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(Intersection::new(ray.origin(), ray.at(t)))
    }

    /// The plane's unit normal, independent of `point`.
    pub fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    /// Material color, or the checker color on odd cells.
    pub fn surface_color(&self, point: Vec3) -> Color {
        let base = self.material.color;
        let Some(checker) = self.checker else {
            return base;
        };

        let (u_axis, v_axis) = tangent_frame(self.normal);
        let local = point - self.point;
        let cu = (local.dot(u_axis) / checker.size).floor() as i64;
        let cv = (local.dot(v_axis) / checker.size).floor() as i64;

        if (cu + cv).rem_euclid(2) == 0 {
            base
        } else {
            Color::new(checker.color.x, checker.color.y, checker.color.z, base.w)
        }
    }
}

/// Two unit vectors spanning the plane orthogonal to `normal`.
fn tangent_frame(normal: Vec3) -> (Vec3, Vec3) {
    let helper = if normal.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
    let u = normalize(normal.cross(helper));
    let v = normal.cross(u);
    (u, v)
}
