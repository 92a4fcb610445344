//! Top-level estimation errors.

use super::error_code::{self, EstimatorErrorCode};
use super::{CatalogError, ConfigError, ValidationErrors};

/// Errors returned by the estimation engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid option: {key}")]
    InvalidOption { key: String },
}

impl EstimatorErrorCode for EstimationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::InvalidOption { .. } => error_code::INVALID_OPTION,
        }
    }
}

/// Result alias used across the estimator crates.
pub type EstimationResult<T> = Result<T, EstimationError>;
