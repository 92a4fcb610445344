//! Requirement validation errors.

use std::fmt;

use super::error_code::{self, EstimatorErrorCode};

/// A single violated requirement field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("{field}: at least {min} entries are required")]
    TooFew { field: String, min: usize },

    #[error("{field}: at most {max} entries are allowed")]
    TooMany { field: String, max: usize },

    #[error("{field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("{field}: is required")]
    Missing { field: String },
}

impl ValidationError {
    /// Path of the offending field, e.g. `features[2].key`.
    pub fn field(&self) -> &str {
        match self {
            Self::TooShort { field, .. }
            | Self::TooFew { field, .. }
            | Self::TooMany { field, .. }
            | Self::InvalidValue { field, .. }
            | Self::Missing { field } => field,
        }
    }
}

/// Every violation found in one requirements record.
/// Surfaced to the caller as a single validation failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if any violation is reported against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s)", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl EstimatorErrorCode for ValidationErrors {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
