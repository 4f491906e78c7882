//! Atmosphere renderer - single-scattering sky on the CPU
//!
//! Computes the sunlight scattered toward a camera by air molecules
//! (Rayleigh) and aerosols (Mie) inside a spherical atmosphere shell.
//!
//! # Example
//!
//! ```
//! use atmo_renderer::{Atmosphere, AtmosphereConfig, Ray, Vec3};
//!
//! let atmosphere = Atmosphere::new(AtmosphereConfig::default()).unwrap();
//! let eye = Vec3::new(0.0, 6360e3 + 1.0, 0.0);
//! let sky = atmosphere.incident_light(&Ray::new(eye, Vec3::Y));
//! assert!(sky.z > sky.x);
//! ```

mod atmosphere;
mod bucket;
mod camera;
mod config;
mod output;
pub mod phase;
mod renderer;
mod scene;

pub use atmosphere::{Atmosphere, OpticalDepth, AIR};
pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{camera_point, sky_dome_direction, LookAtCamera};
pub use config::{AtmosphereConfig, ConfigError, ConfigResult, MieOutput};
pub use output::{OutputError, OutputResult};
pub use renderer::{
    color_to_rgba, linear_to_gamma, render, render_pixel, Color, ImageBuffer, RenderConfig,
};
pub use scene::{Scene, SceneFile, GROUND, MAX_DISTANCE};

/// Re-export common math types from atmo_math
pub use atmo_math::{Interval, Plane, Ray, Sphere, Vec2, Vec3};
