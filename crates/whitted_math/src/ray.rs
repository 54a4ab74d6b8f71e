use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Rays are used for raytracing - they represent a half line starting at
/// `origin` and traveling in `direction`. The direction is not required to
/// be unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// A ray starting `epsilon` along `direction` from `point`.
    ///
    /// Secondary rays are nudged off the surface they leave so the next
    /// closest-hit query does not re-select that surface at distance ~0.
    #[inline]
    pub fn offset(point: Vec3, direction: Vec3, epsilon: f32) -> Self {
        Self::new(point + direction * epsilon, direction)
    }
}
