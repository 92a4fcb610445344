//! # estimator-core
//!
//! Foundation crate for the project estimator.
//! Defines requirement and estimate types, config, errors, traits, tracing and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::EstimatorConfig;
pub use errors::{EstimationError, EstimationResult};
pub use models::{
    BuildType, ComputedEstimate, Estimate, FeatureLibraryEntry, OptionKey, QuoteOption,
    QuoteOptions, RequirementsInput,
};
