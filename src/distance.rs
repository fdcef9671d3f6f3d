//! # Distance operations over scalar or array redshifts
//!
//! Shape-preserving versions of the [`mattig`](crate::mattig) kernels. Every function takes
//! all of its parameters explicitly; the stored defaults of a
//! [`DistanceCalculator`](crate::calculator::DistanceCalculator) are only used by its own
//! convenience methods.
//!
//! ## Call chain
//!
//! ```text
//! distance_modulus(z, Ω_m, h)
//!   └─ luminosity_distance(z, Ω_m)
//!        ├─ conformal_time(0, Ω_m)
//!        └─ conformal_time(z, Ω_m)
//!             ├─ parameter_s(Ω_m)
//!             └─ scale_factor(z)
//! ```
//!
//! ## Errors
//!
//! - [`CosmoError::ZeroMatterDensity`] when Ω_m == 0.
//! - [`CosmoError::NonPositiveLuminosityDistance`] when any luminosity distance is ≤ 0 before
//!   the logarithm of the distance modulus. All offending elements are reported at once.
//!
//! Other singular inputs (z = −1, Ω_m outside (0, 1)) are not rejected and produce NaN or ∞.
use itertools::Itertools;

use crate::{cosmo_errors::CosmoError, mattig, series::Series};

pub use crate::mattig::parameter_s;

/// Scale factor a = 1 / (1 + z) for every redshift.
pub fn scale_factor(redshift: &Series) -> Series {
    redshift.map(mattig::scale_factor)
}

/// Fitted conformal time η(z) for every redshift.
///
/// Arguments
/// -----------------
/// * `redshift`: scalar or array redshift.
/// * `omega_m`: matter density parameter.
///
/// Return
/// ----------
/// * η with the shape of `redshift`, or [`CosmoError::ZeroMatterDensity`].
pub fn conformal_time(redshift: &Series, omega_m: f64) -> Result<Series, CosmoError> {
    let s = parameter_s(omega_m)?;
    let eta = scale_factor(redshift).map(|a| mattig::conformal_time(a, s));

    if eta.has_non_finite() {
        log::warn!("Non-finite conformal time for omega_m = {omega_m}: invalid value in power");
    }

    Ok(eta)
}

/// Luminosity distance d_L(z) in Mpc/h.
///
/// η(0) is always evaluated at z = 0 under the same `omega_m`, whatever `redshift` holds,
/// so `luminosity_distance(0, Ω_m)` is exactly zero.
///
/// Arguments
/// -----------------
/// * `redshift`: scalar or array redshift.
/// * `omega_m`: matter density parameter.
///
/// Return
/// ----------
/// * d_L with the shape of `redshift`, or [`CosmoError::ZeroMatterDensity`].
pub fn luminosity_distance(redshift: &Series, omega_m: f64) -> Result<Series, CosmoError> {
    let s = parameter_s(omega_m)?;
    let eta_today = mattig::conformal_time(mattig::scale_factor(0.0), s);
    let eta_source = conformal_time(redshift, omega_m)?;

    Ok(redshift.zip_map(&eta_source, |z, eta| {
        mattig::luminosity_distance(z, eta_today, eta)
    }))
}

/// Check that every luminosity distance is strictly positive.
///
/// NaN elements are not reported: they are neither positive nor non-positive.
///
/// Return
/// ----------
/// * `Ok(())`, or [`CosmoError::NonPositiveLuminosityDistance`] listing every
///   `(index, value)` with a value ≤ 0.
pub fn check_luminosity_distances(d_l: &Series) -> Result<(), CosmoError> {
    let offending = d_l
        .iter()
        .positions(|&d| d <= 0.0)
        .map(|idx| (idx, d_l.as_slice()[idx]))
        .collect_vec();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(CosmoError::NonPositiveLuminosityDistance(offending))
    }
}

/// Distance modulus from already computed luminosity distances.
///
/// Arguments
/// -----------------
/// * `d_l`: luminosity distances in Mpc/h.
/// * `h`: dimensionless Hubble parameter.
///
/// Return
/// ----------
/// * μ with the shape of `d_l`, or [`CosmoError::NonPositiveLuminosityDistance`].
pub fn distance_modulus_from_luminosity(d_l: &Series, h: f64) -> Result<Series, CosmoError> {
    check_luminosity_distances(d_l)?;
    Ok(d_l.map(|d| mattig::distance_modulus(d, h)))
}

/// Distance modulus μ(z) = 25 − 5 log10(h) + 5 log10(d_L(z)).
///
/// Arguments
/// -----------------
/// * `redshift`: scalar or array redshift.
/// * `omega_m`: matter density parameter.
/// * `h`: dimensionless Hubble parameter.
///
/// Return
/// ----------
/// * μ with the shape of `redshift`.
/// * [`CosmoError::ZeroMatterDensity`] if `omega_m` is zero.
/// * [`CosmoError::NonPositiveLuminosityDistance`] if any d_L ≤ 0, which includes z = 0.
pub fn distance_modulus(redshift: &Series, omega_m: f64, h: f64) -> Result<Series, CosmoError> {
    let d_l = luminosity_distance(redshift, omega_m)?;
    distance_modulus_from_luminosity(&d_l, h)
}
