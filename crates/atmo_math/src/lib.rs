// Re-export glam for convenience
pub use glam::*;

// Atmosphere math types
mod interval;
mod plane;
mod ray;
mod sphere;

pub use interval::Interval;
pub use plane::Plane;
pub use ray::{Ray, UNIT_LENGTH_TOLERANCE};
pub use sphere::Sphere;
