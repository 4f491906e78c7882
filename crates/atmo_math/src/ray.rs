use crate::Vec3;

/// How far a direction's length may stray from 1 and still count as unit.
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-3;

/// A ray in 3D space with an origin and a unit direction.
///
/// Rays are built once per evaluation and never mutated afterwards.
/// Callers are responsible for passing a normalized `direction`; the
/// intersectors rely on it and do not re-normalize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            (direction.length() - 1.0).abs() <= UNIT_LENGTH_TOLERANCE,
            "ray direction must be unit length, got {direction:?}"
        );
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, Vec3::Y);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, Vec3::Y);
        assert_eq!(ray.origin(), ray.origin);
        assert_eq!(ray.direction(), ray.direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_accepts_nearly_unit_direction() {
        let direction = Vec3::new(0.0, 1.0005, 0.0);
        let ray = Ray::new(Vec3::ZERO, direction);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec3::ZERO, Vec3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
