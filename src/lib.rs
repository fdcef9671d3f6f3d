//! # cosmodist
//!
//! Closed-form cosmological distances for a flat matter + Λ universe, parameterized by the
//! matter density Ω_m and the dimensionless Hubble parameter h.
//!
//! - [`distance`] – conformal time, luminosity distance and distance modulus over scalar or
//!   array redshifts, with explicit parameters.
//! - [`calculator`] – [`DistanceCalculator`](calculator::DistanceCalculator), holding the
//!   parameters and a default redshift.
//! - [`parameters`] – [`CosmoParams`](parameters::CosmoParams) and its key-value loader.
//!
//! ```rust
//! use cosmodist::{calculator::DistanceCalculator, parameters::CosmoParams};
//!
//! let calculator = DistanceCalculator::new(CosmoParams::new(0.7, 0.3), vec![0.5, 1.0]);
//! let mu = calculator.distance_modulus().unwrap();
//! assert_eq!(mu.len(), 2);
//! ```
pub mod calculator;
pub mod constants;
pub mod cosmo_errors;
pub mod distance;
pub mod mattig;
pub mod parameters;
pub mod series;
