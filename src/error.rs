//! Error types for the price_pulse crate

use thiserror::Error;

/// Custom error types for the price_pulse crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A model could not be fitted to a series. Callers treat this as
    /// "model unavailable for this series", not as a pipeline failure.
    #[error("Model fit error: {0}")]
    FitError(String),

    /// Error from the storage backend
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error loading or parsing configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::ConfigError(err.to_string())
    }
}
