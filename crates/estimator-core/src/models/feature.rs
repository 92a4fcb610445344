//! Feature library entries: the reference data function points are priced from.

use serde::{Deserialize, Serialize};

use crate::config::DepthMultipliers;
use crate::constants::{DEFAULT_BASE_POINTS, DEFAULT_FEATURE_CATEGORY};
use crate::models::FeatureDepth;

/// One priced feature in the library. Keys are unique across the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLibraryEntry {
    /// e.g. "auth", "payments".
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Baseline complexity.
    #[serde(default = "default_base_points")]
    pub base_points: f64,
    /// Per-depth multipliers. Falls back to the configured depth table when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<DepthMultipliers>,
    /// e.g. "core", "integration", "ai".
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_base_points() -> f64 {
    DEFAULT_BASE_POINTS
}

fn default_category() -> String {
    DEFAULT_FEATURE_CATEGORY.to_string()
}

impl FeatureLibraryEntry {
    pub fn new(key: impl Into<String>, base_points: f64) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            description: String::new(),
            base_points,
            multipliers: None,
            category: default_category(),
        }
    }

    pub fn with_multipliers(mut self, multipliers: DepthMultipliers) -> Self {
        self.multipliers = Some(multipliers);
        self
    }

    /// Depth multiplier for this entry, using `fallback` when the entry has none.
    pub fn depth_multiplier(&self, depth: FeatureDepth, fallback: &DepthMultipliers) -> f64 {
        self.multipliers.as_ref().unwrap_or(fallback).get(depth)
    }
}
