//! Pixel to ray mapping.
//!
//! Pixels are first mapped to a point on the camera's image plane at
//! `z = -1`, then turned into a world direction either by a fisheye
//! sky-dome projection or by a look-at pinhole camera.

use atmo_math::{Ray, Vec2, Vec3};

/// Half-angle of the vertical field of view, in degrees.
const HALF_FOV_DEGREES: f32 = 45.0;

/// Map pixel `(x, y)` of a `width` x `height` image to the image plane.
///
/// Row 0 is the top of the image. The result spans `[-1, 1]`
/// vertically and is stretched by the aspect ratio horizontally.
pub fn camera_point(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    let ndc = Vec2::new(
        (x as f32 + 0.5) / width as f32,
        1.0 - (y as f32 + 0.5) / height as f32,
    );
    let aspect = Vec2::new(width as f32 / height as f32, 1.0);
    let fov = HALF_FOV_DEGREES.to_radians().tan();
    (2.0 * ndc - Vec2::ONE) * aspect * fov
}

/// Fisheye projection of the whole sky onto the image plane.
///
/// The centre of the image looks straight up; the distance from the
/// centre sets the zenith angle. Points far enough from the centre
/// (image corners) are clamped to look straight down.
pub fn sky_dome_direction(p: Vec2) -> Vec3 {
    let z2 = p.length_squared();
    let phi = p.y.atan2(p.x);
    let theta = (1.0 - z2).clamp(-1.0, 1.0).acos();
    Vec3::new(
        theta.sin() * phi.cos(),
        theta.cos(),
        theta.sin() * phi.sin(),
    )
}

/// Pinhole camera looking from `eye` toward `look_at`, with +Y as up.
#[derive(Debug, Clone, Copy)]
pub struct LookAtCamera {
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl LookAtCamera {
    /// Build the camera basis. `look_at` must differ from `eye` and the
    /// view must not be vertical.
    pub fn new(eye: Vec3, look_at: Vec3) -> Self {
        let forward = (look_at - eye).normalize();
        let right = Vec3::Y.cross(forward);
        let up = forward.cross(right);
        Self {
            origin: eye,
            forward,
            right,
            up,
        }
    }

    /// Ray through image plane point `p`.
    pub fn get_ray(&self, p: Vec2) -> Ray {
        let direction = (self.forward + self.up * p.y + self.right * p.x).normalize();
        Ray::new(self.origin, direction)
    }
}
