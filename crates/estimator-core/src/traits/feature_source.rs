//! FeatureSource trait: where the feature library snapshot comes from.
//!
//! The persistence layer implements this over its feature collection. The
//! engine reads it exactly once per computation and never writes back.

use crate::errors::CatalogError;
use crate::models::FeatureLibraryEntry;

/// Provider of a feature library snapshot.
pub trait FeatureSource: Send + Sync {
    /// Return every library entry. Called once per estimate.
    fn load_features(&self) -> Result<Vec<FeatureLibraryEntry>, CatalogError>;
}

/// In-memory feature library.
#[derive(Debug, Clone, Default)]
pub struct StaticFeatureSource {
    entries: Vec<FeatureLibraryEntry>,
}

impl StaticFeatureSource {
    pub fn new(entries: Vec<FeatureLibraryEntry>) -> Self {
        Self { entries }
    }
}

impl FeatureSource for StaticFeatureSource {
    fn load_features(&self) -> Result<Vec<FeatureLibraryEntry>, CatalogError> {
        Ok(self.entries.clone())
    }
}
