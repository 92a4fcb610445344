//! # estimator-engine
//!
//! Estimation pipeline: function points → risk buffers → {team plan, cloud cost} → priced options.
//! Pure and deterministic: the same requirements and library snapshot always yield the same estimate.

pub mod buffers;
pub mod catalog;
pub mod cloud;
pub mod engine;
pub mod function_points;
pub mod options;
pub mod team;

pub use buffers::compute_breakdown;
pub use catalog::FeatureCatalog;
pub use cloud::{CloudCostEstimate, CloudCostInputs};
pub use engine::EstimationEngine;
