//! Error types for Chithra

use thiserror::Error;

/// Core Chithra errors
///
/// The tick path never fails; these cover the surfaces around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChithraError {
    // Landmark errors
    #[error("Wrong landmark count: expected {expected}, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("Non-finite coordinate in landmark {0}")]
    NonFiniteLandmark(usize),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    // Collaborator errors
    #[error("Hand tracker failed to start: {0}")]
    TrackerStart(String),

    #[error("Companion request failed: {0}")]
    Companion(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type for Chithra operations
pub type ChithraResult<T> = Result<T, ChithraError>;
