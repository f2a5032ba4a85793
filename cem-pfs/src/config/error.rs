//! Configuration errors.

use thiserror::Error;

/// Config load or validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Association radius is zero, negative or NaN
    #[error("invalid radius for {field}: {value} (must be > 0)")]
    InvalidRadius {
        /// Config field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Capacity must allow at least one feature
    #[error("capacity.max_features must be at least 1")]
    InvalidMaxFeatures,

    /// Ground-truth range cut-off is zero, negative or NaN
    #[error("invalid ground_truth.max_range: {0} (must be > 0)")]
    InvalidMaxRange(f64),

    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}
