//! # Constants and type definitions for cosmodist
//!
//! This module centralizes the **fit coefficients**, **unit constants**, and **common type
//! aliases** used by the distance computations.
//!
//! ## Overview
//!
//! - Coefficients of the fitted conformal-time approximation
//! - Hubble distance c/H₀ in units of Mpc/h
//! - Distance-modulus offset
//! - Conventional location of the parameter file
//!
//! The fit coefficients are empirical constants and must be kept exactly as written.

// -------------------------------------------------------------------------------------------------
// Conformal-time fit coefficients
// -------------------------------------------------------------------------------------------------

/// Coefficient of the `s · a⁻³` term
pub const PADE_C1: f64 = 0.1540;

/// Coefficient of the `s² · a⁻²` term
pub const PADE_C2: f64 = 0.4304;

/// Coefficient of the `s³ · a⁻¹` term
pub const PADE_C3: f64 = 0.19097;

/// Coefficient of the `s⁴` term
pub const PADE_C4: f64 = 0.066941;

/// Exponent applied to the polynomial part of the conformal-time fit
pub const PADE_EXPONENT: f64 = -1.0 / 8.0;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Hubble distance c / (100 km/s/Mpc), in Mpc/h
pub const HUBBLE_DISTANCE: MpcPerH = 3_000.0;

/// Offset of the distance modulus for distances in Mpc (log10 of 1 Mpc / 10 pc, times 5)
pub const DISTANCE_MODULUS_OFFSET: Magnitude = 25.0;

// -------------------------------------------------------------------------------------------------
// Configuration
// -------------------------------------------------------------------------------------------------

/// Conventional location of the cosmological parameter file, relative to the working directory
pub const DEFAULT_PARAMETERS_PATH: &str = "data_input/sn_parameters.yaml";

/// Configuration key holding the dimensionless Hubble parameter
pub const KEY_HUBBLE: &str = "h";

/// Configuration key holding the matter density parameter
pub const KEY_OMEGA_M: &str = "omega_m";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Observational redshift (dimensionless)
pub type Redshift = f64;
/// Scale factor, normalized to 1 today
pub type ScaleFactor = f64;
/// Distance expressed in Mpc/h
pub type MpcPerH = f64;
/// Astronomical magnitude
pub type Magnitude = f64;
