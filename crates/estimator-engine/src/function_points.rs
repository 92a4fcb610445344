//! Function-point calculator.
//!
//! ```text
//! FP = Σ basePoints × depthMultiplier[depth] × scaleMultiplier[scaleBand] × qualityFactor
//! qualityFactor = 1 + a11y + i18n + perf   (each weight only when the flag is set)
//! ```
//!
//! Unknown feature keys contribute zero. No rounding.

use estimator_core::config::{FunctionPointConfig, QualityWeights};
use estimator_core::models::{FeatureLibraryEntry, FeatureSelection, RequirementsInput};

use crate::catalog::FeatureCatalog;

/// Project-wide quality surcharge, shared by every feature.
pub fn quality_factor(input: &RequirementsInput, weights: &QualityWeights) -> f64 {
    let weight = |enabled: bool, value: f64| if enabled { value } else { 0.0 };
    1.0 + weight(input.a11y, weights.a11y)
        + weight(input.i18n, weights.i18n)
        + weight(input.perf, weights.perf)
}

/// Function points for one matched feature.
pub fn feature_points(
    entry: &FeatureLibraryEntry,
    selection: &FeatureSelection,
    input: &RequirementsInput,
    config: &FunctionPointConfig,
) -> f64 {
    let depth = entry.depth_multiplier(selection.depth, &config.depth);
    let scale = config.scale.get(input.scale_band);
    let quality = quality_factor(input, &config.quality);
    entry.base_points * depth * scale * quality
}

/// Total function points over every requested feature.
pub fn count(input: &RequirementsInput, catalog: &FeatureCatalog, config: &FunctionPointConfig) -> f64 {
    input
        .features
        .iter()
        .map(|selection| match catalog.get(&selection.key) {
            Some(entry) => feature_points(entry, selection, input, config),
            None => {
                tracing::debug!(key = %selection.key, "feature not in library, contributes 0 FP");
                0.0
            }
        })
        .sum()
}
