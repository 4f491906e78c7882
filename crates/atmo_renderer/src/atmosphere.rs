//! Single-scattering integrator.
//!
//! The primary ray is marched through the atmosphere shell with the
//! midpoint rule. At each sample a secondary ray is marched toward the
//! sun to find how much light reaches that point, and the in-scattered
//! contribution is attenuated by the optical depth along both paths.

use std::ops::{Add, AddAssign};

use atmo_math::{Ray, Sphere, Vec3};

use crate::config::{AtmosphereConfig, ConfigResult, MieOutput};
use crate::phase::{mie_phase, rayleigh_phase};

/// Material tag of the atmosphere shell.
pub const AIR: u32 = 1;

/// Empirical correction applied to Mie extinction.
const MIE_EXTINCTION_SCALE: f32 = 1.1;

/// Density-weighted path length for Rayleigh and Mie particles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpticalDepth {
    pub rayleigh: f32,
    pub mie: f32,
}

impl OpticalDepth {
    pub fn new(rayleigh: f32, mie: f32) -> Self {
        Self { rayleigh, mie }
    }
}

impl Add for OpticalDepth {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.rayleigh + rhs.rayleigh, self.mie + rhs.mie)
    }
}

impl AddAssign for OpticalDepth {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A validated atmosphere ready for evaluation.
///
/// Holds the immutable configuration and the shell sphere. Shared by
/// reference across render threads.
#[derive(Debug, Clone)]
pub struct Atmosphere {
    config: AtmosphereConfig,
    shell: Sphere,
}

impl Atmosphere {
    /// Validate `config` and build the atmosphere shell around the origin.
    pub fn new(config: AtmosphereConfig) -> ConfigResult<Self> {
        config.validate()?;
        let shell = Sphere::new(Vec3::ZERO, config.atmosphere_radius, AIR);
        Ok(Self { config, shell })
    }

    pub fn config(&self) -> &AtmosphereConfig {
        &self.config
    }

    /// Altitude of `point` above the planet surface. Negative underground.
    #[inline]
    pub fn height(&self, point: Vec3) -> f32 {
        point.length() - self.config.planet_radius
    }

    /// Optical depth of one march segment centred at `height`.
    #[inline]
    fn segment_depth(&self, height: f32, step: f32) -> OpticalDepth {
        OpticalDepth::new(
            (-height / self.config.rayleigh_scale_height).exp() * step,
            (-height / self.config.mie_scale_height).exp() * step,
        )
    }

    /// March `ray` to the far side of the atmosphere shell and return the
    /// optical depth along it.
    ///
    /// The origin is assumed to be inside the shell. Returns `None` as
    /// soon as a sample falls below the planet surface, in which case
    /// the sun is occluded from the origin.
    pub fn sun_transmittance_depth(&self, ray: &Ray) -> Option<OpticalDepth> {
        let Some(span) = self.shell.intersect(ray) else {
            return Some(OpticalDepth::default());
        };

        let (step, samples) = span.midpoints(self.config.light_samples);
        let mut depth = OpticalDepth::default();
        for t in samples {
            let height = self.height(ray.at(t));
            if height < 0.0 {
                return None;
            }
            depth += self.segment_depth(height, step);
        }

        Some(depth)
    }

    /// Radiance scattered toward the ray origin along `ray`.
    ///
    /// The result is linear and unclamped. Rays that miss the shell
    /// return zero.
    pub fn incident_light(&self, ray: &Ray) -> Vec3 {
        let Some(span) = self.shell.intersect(ray) else {
            return Vec3::ZERO;
        };

        let config = &self.config;
        let (step, samples) = span.midpoints(config.view_samples);

        let mu = ray.direction().dot(config.sun_direction);
        let phase_r = rayleigh_phase(mu);
        let phase_m = mie_phase(mu, config.mie_asymmetry);

        let mut view_depth = OpticalDepth::default();
        let mut sum_r = Vec3::ZERO;
        let mut sum_m = Vec3::ZERO;

        for t in samples {
            let point = ray.at(t);
            let segment = self.segment_depth(self.height(point), step);
            view_depth += segment;

            let light_ray = Ray::new(point, config.sun_direction);
            // In the planet's shadow: nothing to scatter
            let Some(light_depth) = self.sun_transmittance_depth(&light_ray) else {
                continue;
            };

            let total = view_depth + light_depth;
            let tau = config.rayleigh_coefficients * total.rayleigh
                + config.mie_coefficients * MIE_EXTINCTION_SCALE * total.mie;
            let attenuation = (-tau).exp();

            sum_r += segment.rayleigh * attenuation;
            sum_m += segment.mie * attenuation;
        }

        let mie_coefficients = match config.mie_output {
            MieOutput::Rayleigh => config.rayleigh_coefficients,
            MieOutput::Mie => config.mie_coefficients,
        };

        config.sun_power
            * (sum_r * phase_r * config.rayleigh_coefficients + sum_m * phase_m * mie_coefficients)
    }
}
