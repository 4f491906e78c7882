//! Sphere primitive and analytic ray-sphere intersection.

use crate::{Interval, Ray, Vec3};

/// A sphere with a material tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: u32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: u32) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Intersect a ray with the sphere.
    ///
    /// Returns the entry and exit distances as `[t0, t1]`, or `None` if
    /// the ray's line misses the sphere. Hits behind the origin are not
    /// rejected: a ray starting inside the sphere yields `t0 < 0 < t1`,
    /// and a sphere entirely behind the ray yields two negative values.
    pub fn intersect(&self, ray: &Ray) -> Option<Interval> {
        let rc = self.center - ray.origin();
        let radius2 = self.radius * self.radius;
        let tca = rc.dot(ray.direction());
        let d2 = rc.length_squared() - tca * tca;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        Some(Interval::new(tca - thc, tca + thc))
    }
}
