use thiserror::Error;

/// Error type for boundary validation, configuration and storage failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid amount: {0} (amounts must be greater than zero)")]
    InvalidAmount(f64),
    #[error("Unknown category `{0}` (expected Food, Entertainment or Transportation)")]
    UnknownCategory(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}
