//! Error handling for the estimator.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod estimation_error;
pub mod validation_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::EstimatorErrorCode;
pub use estimation_error::{EstimationError, EstimationResult};
pub use validation_error::{ValidationError, ValidationErrors};
