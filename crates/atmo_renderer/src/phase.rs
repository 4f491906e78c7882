//! Angular scattering weights.
//!
//! `mu` is the cosine of the angle between the view direction and the
//! sun direction.

use std::f32::consts::PI;

/// Rayleigh phase function: `3/(16π) · (1 + mu²)`.
#[inline]
pub fn rayleigh_phase(mu: f32) -> f32 {
    3.0 / (16.0 * PI) * (1.0 + mu * mu)
}

/// Mie phase function (Cornette-Shanks form of Henyey-Greenstein).
///
/// `g` is the asymmetry parameter; values near 1 concentrate the lobe
/// toward the sun. For `g` in (0, 1) the denominator is at least
/// `(1 - g)³ > 0`.
#[inline]
pub fn mie_phase(mu: f32, g: f32) -> f32 {
    let gg = g * g;
    3.0 / (8.0 * PI) * ((1.0 - gg) * (1.0 + mu * mu))
        / ((2.0 + gg) * (1.0 + gg - 2.0 * g * mu).powf(1.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rayleigh_is_symmetric() {
        for mu in [0.0, 0.3, 0.7, 1.0] {
            assert_eq!(rayleigh_phase(mu), rayleigh_phase(-mu));
        }
    }

    #[test]
    fn test_rayleigh_values() {
        assert!((rayleigh_phase(0.0) - 3.0 / (16.0 * PI)).abs() < 1e-7);
        assert!((rayleigh_phase(1.0) - 3.0 / (8.0 * PI)).abs() < 1e-7);
    }

    #[test]
    fn test_rayleigh_integrates_to_one() {
        // ∫ p(mu) dω = 2π ∫_{-1}^{1} p(mu) dmu
        let n = 2000;
        let dmu = 2.0 / n as f32;
        let total: f32 = (0..n)
            .map(|i| rayleigh_phase(-1.0 + (i as f32 + 0.5) * dmu) * dmu)
            .sum();
        assert!((2.0 * PI * total - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_mie_forward_peak() {
        let g = 0.76;
        let forward = mie_phase(1.0, g);
        let side = mie_phase(0.0, g);
        let backward = mie_phase(-1.0, g);

        assert!(forward > side);
        assert!(forward > 50.0 * backward);
    }

    #[test]
    fn test_mie_finite_over_domain() {
        for g in [0.01, 0.5, 0.76, 0.99] {
            for i in 0..=20 {
                let mu = -1.0 + i as f32 * 0.1;
                let p = mie_phase(mu, g);
                assert!(p.is_finite() && p > 0.0, "mie_phase({mu}, {g}) = {p}");
            }
        }
    }
}
