//! Feature catalog errors.

use super::error_code::{self, EstimatorErrorCode};

/// Errors raised while loading a feature library snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("feature library parse error: {message}")]
    ParseError { message: String },

    #[error("feature source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

impl EstimatorErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
