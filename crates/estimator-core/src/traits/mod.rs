//! Seams between the engine and its collaborators.

pub mod feature_source;

pub use feature_source::{FeatureSource, StaticFeatureSource};
