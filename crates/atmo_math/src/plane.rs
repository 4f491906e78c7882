//! Infinite plane primitive, used for flat ground.

use crate::{Ray, Vec3};

/// Cosines smaller than this are treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// The set of points `x` with `normal.dot(x) + offset == 0`.
///
/// The plane is one-sided: only rays travelling against `normal`
/// (arriving from the side the normal points to) hit it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
    pub material: u32,
}

impl Plane {
    /// Create a new plane. `normal` must be unit length.
    pub fn new(normal: Vec3, offset: f32, material: u32) -> Self {
        Self {
            normal,
            offset,
            material,
        }
    }

    /// A horizontal plane at height `y` facing up.
    pub fn horizontal(y: f32, material: u32) -> Self {
        Self::new(Vec3::Y, -y, material)
    }

    /// Intersect a ray with the plane.
    ///
    /// Returns the distance along the ray, or `None` if the ray is
    /// parallel, moving away from the front face, or the hit lies
    /// behind the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom > -PARALLEL_EPSILON {
            return None;
        }

        let t = -(self.normal.dot(ray.origin()) + self.offset) / denom;
        (t >= 0.0).then_some(t)
    }
}
