//! Error types for cem-pfs

use crate::config::ConfigError;
use crate::io::RecordingError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// cem-pfs error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid or unreadable recording
    #[error("Recording error: {0}")]
    Recording(#[from] RecordingError),
}
