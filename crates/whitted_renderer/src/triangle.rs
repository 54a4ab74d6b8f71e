//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use whitted_math::{normalize, Ray, Vec3};

use crate::{Intersection, Material};

/// |e1 . q| at or below this counts as parallel to the triangle plane.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Barycentric solution of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Barycentric {
    /// Ray parameter
    pub t: f32,
    /// Weight of v1
    pub u: f32,
    /// Weight of v2
    pub v: f32,
}

impl Barycentric {
    /// Weights of (v0, v1, v2).
    pub fn weights(&self) -> [f32; 3] {
        [1.0 - self.u - self.v, self.u, self.v]
    }
}

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    pub(crate) material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Möller-Trumbore ray-triangle intersection algorithm.
    pub(crate) fn barycentric(&self, ray: &Ray) -> Option<Barycentric> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;

        let q = ray.direction().cross(e2);
        let a = e1.dot(q);

        // Ray is parallel to the triangle plane
        if a.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(q);
        if u < 0.0 {
            return None;
        }

        let r = s.cross(e1);
        let v = f * ray.direction().dot(r);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * e2.dot(r);
        if t < 0.0 {
            return None;
        }

        Some(Barycentric { t, u, v })
    }

    /// Intersect with the ray; the point is rebuilt from the barycentric
    /// weights rather than from the ray parameter.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let hit = self.barycentric(ray)?;
        let [w0, w1, w2] = hit.weights();
        let point = w0 * self.v0 + w1 * self.v1 + w2 * self.v2;
        Some(Intersection::new(ray.origin(), point))
    }

    /// Unit face normal (e1 x e2), independent of `point`.
    pub fn normal(&self, _point: Vec3) -> Vec3 {
        normalize((self.v1 - self.v0).cross(self.v2 - self.v0))
    }
}
