//! # Distance calculator: stored parameters and default redshift
//!
//! [`DistanceCalculator`](crate::calculator::DistanceCalculator) bundles an immutable
//! [`CosmoParams`](crate::parameters::CosmoParams) with a default redshift
//! [`Series`](crate::series::Series), and evaluates the distance chain on them.
//!
//! The methods here are convenience wrappers that **always** use the stored state.
//! To evaluate the chain for other inputs, either call the explicit functions in
//! [`crate::distance`] or re-target the calculator with
//! [`with_redshift`](crate::calculator::DistanceCalculator::with_redshift).
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use cosmodist::calculator::DistanceCalculator;
//!
//! // Reads data_input/sn_parameters.yaml from the working directory
//! let calculator = DistanceCalculator::from_default_location(vec![0.1, 0.5, 1.0]).unwrap();
//! let mu = calculator.distance_modulus().unwrap();
//! println!("{mu:?}");
//! ```
//!
//! The calculator is never mutated after construction, so a shared reference can be used
//! from several threads.
use camino::Utf8Path;

use crate::{cosmo_errors::CosmoError, distance, parameters::CosmoParams, series::Series};

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceCalculator {
    params: CosmoParams,
    redshift: Series,
}

impl DistanceCalculator {
    /// Construct a calculator from explicit parameters and a default redshift.
    ///
    /// Arguments
    /// -----------------
    /// * `params`: cosmological constants (h, Ω_m).
    /// * `redshift`: default redshift, scalar or array (`f64`, `Vec<f64>`, `DVector<f64>`, …).
    pub fn new(params: CosmoParams, redshift: impl Into<Series>) -> Self {
        let redshift = redshift.into();
        log::debug!(
            "New distance calculator: h = {}, omega_m = {}, {} redshift value(s)",
            params.h,
            params.omega_m,
            redshift.len()
        );
        DistanceCalculator { params, redshift }
    }

    /// Construct a calculator whose parameters are read from `path`.
    ///
    /// See also
    /// ------------
    /// * [`CosmoParams::from_file`] – Parameter document format and errors.
    pub fn from_file(path: &Utf8Path, redshift: impl Into<Series>) -> Result<Self, CosmoError> {
        Ok(Self::new(CosmoParams::from_file(path)?, redshift))
    }

    /// Construct a calculator whose parameters are read from
    /// [`DEFAULT_PARAMETERS_PATH`](crate::constants::DEFAULT_PARAMETERS_PATH).
    pub fn from_default_location(redshift: impl Into<Series>) -> Result<Self, CosmoError> {
        Ok(Self::new(CosmoParams::from_default_location()?, redshift))
    }

    /// A new calculator with the same parameters and another default redshift.
    pub fn with_redshift(&self, redshift: impl Into<Series>) -> Self {
        Self::new(self.params, redshift)
    }

    pub fn params(&self) -> &CosmoParams {
        &self.params
    }

    pub fn redshift(&self) -> &Series {
        &self.redshift
    }

    /// `s` parameter for the stored Ω_m.
    pub fn parameter_s(&self) -> Result<f64, CosmoError> {
        distance::parameter_s(self.params.omega_m)
    }

    /// Scale factor at the stored redshift.
    pub fn scale_factor(&self) -> Series {
        distance::scale_factor(&self.redshift)
    }

    /// Conformal time at the stored redshift and Ω_m.
    pub fn conformal_time(&self) -> Result<Series, CosmoError> {
        distance::conformal_time(&self.redshift, self.params.omega_m)
    }

    /// Luminosity distance (Mpc/h) at the stored redshift and Ω_m.
    pub fn luminosity_distance(&self) -> Result<Series, CosmoError> {
        distance::luminosity_distance(&self.redshift, self.params.omega_m)
    }

    /// Distance modulus at the stored redshift, Ω_m and h.
    pub fn distance_modulus(&self) -> Result<Series, CosmoError> {
        distance::distance_modulus(&self.redshift, self.params.omega_m, self.params.h)
    }
}
