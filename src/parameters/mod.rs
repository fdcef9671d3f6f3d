//! # Cosmological parameters
//!
//! This module defines [`CosmoParams`](crate::parameters::CosmoParams), the immutable pair of
//! constants every distance computation depends on:
//!
//! - `h` – dimensionless Hubble parameter (H₀ = 100 h km/s/Mpc)
//! - `omega_m` – matter density parameter Ω_m
//!
//! ## Configuration source
//!
//! Parameters are usually read from a flat key-value document, by convention stored at
//! [`DEFAULT_PARAMETERS_PATH`](crate::constants::DEFAULT_PARAMETERS_PATH):
//!
//! ```text
//! # data_input/sn_parameters.yaml
//! h: 0.7
//! omega_m: 0.3
//! ```
//!
//! One `key: value` entry per line, or a single flow mapping `{h: 0.7, omega_m: 0.3}`.
//! Keys may be quoted (`"h"` or `'h'`). `#` comments, blank lines and `---`/`...` document
//! markers are ignored, unknown keys are ignored, and a repeated key keeps its last value.
//! Indented lines (nested mappings) are rejected.
//! Both `h` and `omega_m` are required top-level keys and must be numeric.
//!
//! ## Usage
//!
//! ```rust
//! use cosmodist::parameters::CosmoParams;
//!
//! let params: CosmoParams = "h: 0.7\nomega_m: 0.3".parse().unwrap();
//! assert_eq!(params.omega_m, 0.3);
//! ```
//!
//! The struct also derives `serde` traits so it can be embedded in a caller's own
//! configuration format.
mod parser;

use std::str::FromStr;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_PARAMETERS_PATH, KEY_HUBBLE, KEY_OMEGA_M},
    cosmo_errors::CosmoError,
};
use parser::{parse_document, parse_number, RawEntries};

/// Constants of the cosmological model, fixed for the lifetime of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmoParams {
    /// Dimensionless Hubble parameter
    pub h: f64,
    /// Matter density parameter Ω_m
    pub omega_m: f64,
}

impl CosmoParams {
    /// Build a parameter set from explicit values.
    ///
    /// Values are not validated: an `omega_m` outside (0, 1) is accepted and only
    /// reported through a `log::warn!`, the computations then follow IEEE semantics.
    pub fn new(h: f64, omega_m: f64) -> Self {
        let params = CosmoParams { h, omega_m };
        params.warn_if_unphysical();
        params
    }

    /// Read the parameters from a key-value document on disk.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: location of the parameter document.
    ///
    /// Return
    /// ----------
    /// * The parsed [`CosmoParams`], or a [`CosmoError`] if the file cannot be read,
    ///   a line is malformed, or a required key is missing or non-numeric.
    pub fn from_file(path: &Utf8Path) -> Result<Self, CosmoError> {
        let document = std::fs::read_to_string(path)?;
        let params: CosmoParams = document.parse()?;
        log::debug!(
            "Loaded cosmological parameters from {path}: h = {}, omega_m = {}",
            params.h,
            params.omega_m
        );
        Ok(params)
    }

    /// Read the parameters from [`DEFAULT_PARAMETERS_PATH`], relative to the working directory.
    pub fn from_default_location() -> Result<Self, CosmoError> {
        Self::from_file(Utf8Path::new(DEFAULT_PARAMETERS_PATH))
    }

    fn warn_if_unphysical(&self) {
        if !(self.omega_m > 0.0 && self.omega_m < 1.0) {
            log::warn!(
                "omega_m = {} is outside (0, 1); distances may be NaN or infinite",
                self.omega_m
            );
        }
    }
}

/// Look up a required key and interpret it as a number.
fn required_value(entries: &RawEntries, key: &str) -> Result<f64, CosmoError> {
    let raw = entries
        .get(key)
        .ok_or_else(|| CosmoError::MissingConfigKey(key.to_string()))?;

    parse_number(raw)
        .map(|(_, value)| value)
        .map_err(|_e| CosmoError::InvalidConfigValue {
            key: key.to_string(),
            value: raw.clone(),
        })
}

impl FromStr for CosmoParams {
    type Err = CosmoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = parse_document(s)?;

        let h = required_value(&entries, KEY_HUBBLE)?;
        let omega_m = required_value(&entries, KEY_OMEGA_M)?;

        Ok(CosmoParams::new(h, omega_m))
    }
}
