//! Physical constants for the atmosphere model.
//!
//! An `AtmosphereConfig` is plain data. It can be built in code, taken
//! from `Default` (reference Earth values) or read from JSON, where any
//! missing field falls back to its default. Validation happens once at
//! setup time; the integrator never re-checks per ray.

use std::fs;
use std::path::Path;

use atmo_math::{Vec3, UNIT_LENGTH_TOLERANCE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("view_samples must be greater than zero")]
    ZeroViewSamples,

    #[error("light_samples must be greater than zero")]
    ZeroLightSamples,

    #[error("mie_asymmetry must lie strictly between 0 and 1, got {0}")]
    InvalidMieAsymmetry(f32),

    #[error("sun_direction must be unit length, got length {0}")]
    NonUnitSunDirection(f32),

    #[error("radii must satisfy 0 < planet ({planet}) < atmosphere ({atmosphere})")]
    InvalidRadii { planet: f32, atmosphere: f32 },

    #[error("scale heights must be positive (rayleigh {rayleigh}, mie {mie})")]
    NonPositiveScaleHeight { rayleigh: f32, mie: f32 },

    #[error("image must have a non-zero size, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("bucket_size must be greater than zero")]
    ZeroBucketSize,

    #[error("gamma must be positive, got {0}")]
    InvalidGamma(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which coefficients weight the Mie term in the final radiance sum.
///
/// The reference model multiplies *both* terms by the Rayleigh
/// coefficients. `Mie` uses the Mie coefficients for the Mie term
/// instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MieOutput {
    #[default]
    Rayleigh,
    Mie,
}

/// Physical constants of the planet, its atmosphere and the sun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Rayleigh scattering coefficients at sea level (1/m, RGB)
    pub rayleigh_coefficients: Vec3,

    /// Mie scattering coefficients at sea level (1/m, RGB)
    pub mie_coefficients: Vec3,

    /// Rayleigh scale height (m)
    pub rayleigh_scale_height: f32,

    /// Mie scale height (m)
    pub mie_scale_height: f32,

    /// Planet radius (m)
    pub planet_radius: f32,

    /// Outer radius of the atmosphere shell (m)
    pub atmosphere_radius: f32,

    /// Unit vector pointing toward the sun
    pub sun_direction: Vec3,

    /// Scalar radiance multiplier
    pub sun_power: f32,

    /// Henyey-Greenstein asymmetry `g`, in (0, 1)
    pub mie_asymmetry: f32,

    /// Number of march steps along the view ray
    pub view_samples: u32,

    /// Number of march steps along each light ray
    pub light_samples: u32,

    pub mie_output: MieOutput,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            rayleigh_coefficients: Vec3::new(5.5e-6, 13.0e-6, 22.4e-6),
            mie_coefficients: Vec3::splat(21e-6),
            rayleigh_scale_height: 7994.0,
            mie_scale_height: 1200.0,
            planet_radius: 6360e3,
            atmosphere_radius: 6420e3,
            sun_direction: Vec3::Y,
            sun_power: 20.0,
            mie_asymmetry: 0.76,
            view_samples: 16,
            light_samples: 8,
            mie_output: MieOutput::Rayleigh,
        }
    }
}

impl AtmosphereConfig {
    /// Set the sun direction.
    pub fn with_sun_direction(mut self, sun_direction: Vec3) -> Self {
        self.sun_direction = sun_direction;
        self
    }

    /// Set the sun power.
    pub fn with_sun_power(mut self, sun_power: f32) -> Self {
        self.sun_power = sun_power;
        self
    }

    /// Set view and light march sample counts.
    pub fn with_samples(mut self, view_samples: u32, light_samples: u32) -> Self {
        self.view_samples = view_samples;
        self.light_samples = light_samples;
        self
    }

    /// Check the invariants the integrator relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.view_samples == 0 {
            return Err(ConfigError::ZeroViewSamples);
        }
        if self.light_samples == 0 {
            return Err(ConfigError::ZeroLightSamples);
        }
        if !(self.mie_asymmetry > 0.0 && self.mie_asymmetry < 1.0) {
            return Err(ConfigError::InvalidMieAsymmetry(self.mie_asymmetry));
        }
        let sun_length = self.sun_direction.length();
        if sun_length.is_nan() || (sun_length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
            return Err(ConfigError::NonUnitSunDirection(sun_length));
        }
        if !(self.planet_radius > 0.0 && self.planet_radius < self.atmosphere_radius) {
            return Err(ConfigError::InvalidRadii {
                planet: self.planet_radius,
                atmosphere: self.atmosphere_radius,
            });
        }
        if !(self.rayleigh_scale_height > 0.0 && self.mie_scale_height > 0.0) {
            return Err(ConfigError::NonPositiveScaleHeight {
                rayleigh: self.rayleigh_scale_height,
                mie: self.mie_scale_height,
            });
        }

        if self.sun_direction.y < 0.0 {
            log::warn!(
                "Sun direction {:?} is below the horizon; the sky will be mostly dark",
                self.sun_direction
            );
        }

        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded atmosphere configuration from {}", path.display());
        Ok(config)
    }
}
