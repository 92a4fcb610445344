//! Feature catalog: a keyed snapshot of the feature library for one computation.

use std::collections::HashMap;

use estimator_core::errors::CatalogError;
use estimator_core::models::FeatureLibraryEntry;

/// Immutable, key-indexed view of the feature library.
///
/// Built once per computation so each requested feature costs one hash lookup.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    entries: HashMap<String, FeatureLibraryEntry>,
}

impl FeatureCatalog {
    /// Build a catalog. The first usable entry for a key wins; duplicates and
    /// entries with unusable point values are skipped with a warning.
    pub fn from_entries(entries: impl IntoIterator<Item = FeatureLibraryEntry>) -> Self {
        let entries = entries.into_iter();
        let mut map: HashMap<String, FeatureLibraryEntry> =
            HashMap::with_capacity(entries.size_hint().0);
        for entry in entries {
            if let Some(reason) = unusable(&entry) {
                tracing::warn!(key = %entry.key, reason, "skipping feature library entry");
                continue;
            }
            if map.contains_key(&entry.key) {
                tracing::warn!(key = %entry.key, "duplicate key in feature library, keeping the first");
                continue;
            }
            map.insert(entry.key.clone(), entry);
        }
        Self { entries: map }
    }

    /// Parse a JSON array of library entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<FeatureLibraryEntry> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    pub fn get(&self, key: &str) -> Option<&FeatureLibraryEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn unusable(entry: &FeatureLibraryEntry) -> Option<&'static str> {
    if !entry.base_points.is_finite() || entry.base_points < 0.0 {
        return Some("base points must be finite and non-negative");
    }
    let bad_multiplier = entry.multipliers.as_ref().is_some_and(|m| {
        [m.basic, m.standard, m.advanced]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
    });
    bad_multiplier.then_some("depth multipliers must be finite and non-negative")
}
