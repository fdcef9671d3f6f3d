//! # Scalar distance kernels
//!
//! Closed-form building blocks of the distance chain for a flat matter + Λ cosmology:
//!
//! ```text
//! Ω_m ──▶ s ─┐
//!            ├─▶ η(a) ──▶ d_L(z) ──▶ μ(z)
//! z ───▶ a ──┘
//! ```
//!
//! The conformal time uses the fitted rational approximation of Pen (1999) instead of the
//! exact elliptic integral. Its four coefficients live in [`crate::constants`].
//!
//! None of the kernels guard against numeric singularities (z = −1, Ω_m outside (0, 1),
//! non-positive polynomial under the fractional power): they return IEEE NaN or ∞.
//! The only checked condition is Ω_m == 0 in [`parameter_s`].
use crate::constants::{
    Magnitude, MpcPerH, Redshift, ScaleFactor, DISTANCE_MODULUS_OFFSET, HUBBLE_DISTANCE,
    PADE_C1, PADE_C2, PADE_C3, PADE_C4, PADE_EXPONENT,
};
use crate::cosmo_errors::CosmoError;

/// Compute the `s` parameter of the conformal-time fit, s = ((1 − Ω_m) / Ω_m)^(1/3).
///
/// This is a real power, not a sign-preserving cube root: a negative ratio gives NaN.
///
/// Arguments
/// -----------------
/// * `omega_m`: matter density parameter.
///
/// Return
/// ----------
/// * The `s` value, or [`CosmoError::ZeroMatterDensity`] if `omega_m` is exactly zero.
pub fn parameter_s(omega_m: f64) -> Result<f64, CosmoError> {
    if omega_m == 0.0 {
        return Err(CosmoError::ZeroMatterDensity);
    }

    Ok(((1.0 - omega_m) / omega_m).powf(1.0 / 3.0))
}

/// Scale factor a = 1 / (1 + z).
#[inline]
pub fn scale_factor(redshift: Redshift) -> ScaleFactor {
    1.0 / (1.0 + redshift)
}

/// Fitted conformal time η(a) for a given `s` parameter.
///
/// ```text
/// η = 2 √(s³ + 1) · [a⁻⁴ − C1 s a⁻³ + C2 s² a⁻² + C3 s³ a⁻¹ + C4 s⁴]^(−1/8)
/// ```
///
/// Arguments
/// -----------------
/// * `a`: scale factor.
/// * `s`: output of [`parameter_s`].
///
/// Return
/// ----------
/// * η in units of the Hubble time; NaN when the bracket is negative.
pub fn conformal_time(a: ScaleFactor, s: f64) -> f64 {
    let multiplier = 2.0 * (s.powi(3) + 1.0).sqrt();
    let multiplicand = 1.0 / a.powi(4) - PADE_C1 * s / a.powi(3)
        + PADE_C2 * s.powi(2) / a.powi(2)
        + PADE_C3 * s.powi(3) / a
        + PADE_C4 * s.powi(4);

    multiplier * multiplicand.powf(PADE_EXPONENT)
}

/// Luminosity distance d_L = c/H₀ · (1 + z) · (η(0) − η(z)), in Mpc/h.
///
/// Arguments
/// -----------------
/// * `redshift`: redshift of the source.
/// * `eta_today`: conformal time at z = 0.
/// * `eta_source`: conformal time at `redshift`.
#[inline]
pub fn luminosity_distance(redshift: Redshift, eta_today: f64, eta_source: f64) -> MpcPerH {
    HUBBLE_DISTANCE * (redshift + 1.0) * (eta_today - eta_source)
}

/// Distance modulus μ = 25 − 5 log10(h) + 5 log10(d_L).
///
/// No validation here: a non-positive `d_l` gives NaN or −∞.
/// See [`crate::distance::distance_modulus_from_luminosity`] for the checked version.
#[inline]
pub fn distance_modulus(d_l: MpcPerH, h: f64) -> Magnitude {
    DISTANCE_MODULUS_OFFSET - 5.0 * h.log10() + 5.0 * d_l.log10()
}

#[cfg(test)]
mod mattig_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parameter_s() {
        for omega_m in [0.1, 0.3, 0.5, 0.9] {
            let s = parameter_s(omega_m).unwrap();
            assert!(s > 0.0);
            assert_relative_eq!(s.powi(3), (1.0 - omega_m) / omega_m, max_relative = 1e-12);
        }

        assert_relative_eq!(parameter_s(0.3).unwrap(), 1.3263524026321307, epsilon = 1e-14);
        assert_eq!(parameter_s(0.5).unwrap(), 1.0);
    }

    #[test]
    fn test_parameter_s_zero_density() {
        assert_eq!(parameter_s(0.0), Err(CosmoError::ZeroMatterDensity));
        assert_eq!(parameter_s(-0.0), Err(CosmoError::ZeroMatterDensity));
    }

    #[test]
    fn test_parameter_s_negative_ratio_is_nan() {
        assert!(parameter_s(1.5).unwrap().is_nan());
        assert!(parameter_s(-0.5).unwrap().is_nan());
        assert_eq!(parameter_s(1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(0.0), 1.0);
        assert_eq!(scale_factor(1.0), 0.5);
        assert!(scale_factor(-1.0).is_infinite());
    }

    #[test]
    fn test_conformal_time_reference() {
        let s = parameter_s(0.3).unwrap();

        assert_relative_eq!(conformal_time(1.0, s), 3.307704644369893, max_relative = 1e-12);
        assert_relative_eq!(conformal_time(0.5, s), 2.535674947150782, max_relative = 1e-12);
    }

    #[test]
    fn test_conformal_time_einstein_de_sitter_limit() {
        // s = 0: η = 2 a^(1/2)
        assert_relative_eq!(conformal_time(1.0, 0.0), 2.0, epsilon = 1e-15);
        assert_relative_eq!(conformal_time(0.25, 0.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_luminosity_distance() {
        assert_eq!(luminosity_distance(0.0, 3.3, 3.3), 0.0);
        assert_relative_eq!(luminosity_distance(1.0, 3.0, 2.5), 3000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_modulus() {
        // 10 pc = 1e-5 Mpc with h = 1 gives μ = 0
        assert_relative_eq!(distance_modulus(1e-5, 1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(distance_modulus(1.0, 1.0), 25.0, epsilon = 1e-12);
        assert!(distance_modulus(-1.0, 0.7).is_nan());
    }
}
