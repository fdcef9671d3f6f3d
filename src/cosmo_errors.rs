use thiserror::Error;

#[derive(Error, Debug)]
pub enum CosmoError {
    #[error("Unable to read the parameter file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the nom parsing: {0}")]
    NomParsingError(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid value for configuration key {key}: {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("omega_m cannot be zero")]
    ZeroMatterDensity,

    #[error(
        "All luminosity distances must be positive for valid log computation, got (index, value): {0:?}"
    )]
    NonPositiveLuminosityDistance(Vec<(usize, f64)>),
}

impl PartialEq for CosmoError {
    fn eq(&self, other: &Self) -> bool {
        use CosmoError::*;
        match (self, other) {
            // I/O errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,

            (NomParsingError(a), NomParsingError(b)) => a == b,
            (MissingConfigKey(a), MissingConfigKey(b)) => a == b,
            (
                InvalidConfigValue {
                    key: k1,
                    value: v1,
                },
                InvalidConfigValue {
                    key: k2,
                    value: v2,
                },
            ) => k1 == k2 && v1 == v2,
            (NonPositiveLuminosityDistance(a), NonPositiveLuminosityDistance(b)) => a == b,

            (ZeroMatterDensity, ZeroMatterDensity) => true,

            _ => false,
        }
    }
}
