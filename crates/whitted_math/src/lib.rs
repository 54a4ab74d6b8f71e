// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Normalize a vector, leaving zero-length vectors unchanged.
///
/// Callers throughout the tracer rely on always getting *some* vector back,
/// so a zero magnitude is a no-op rather than a NaN.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length == 0.0 {
        v
    } else {
        v / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_already_unit() {
        assert_eq!(normalize(Vec3::Y), Vec3::Y);
    }
}
