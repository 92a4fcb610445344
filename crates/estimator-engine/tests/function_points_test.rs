//! Function-point counting: depth, scale and quality multipliers over the library.

use estimator_core::config::{DepthMultipliers, FunctionPointConfig};
use estimator_core::models::{FeatureDepth, FeatureLibraryEntry, FeatureSelection, RequirementsInput, ScaleBand};
use estimator_engine::function_points::{count, quality_factor};
use estimator_engine::FeatureCatalog;

fn auth_entry() -> FeatureLibraryEntry {
    FeatureLibraryEntry::new("auth", 10.0).with_multipliers(DepthMultipliers {
        basic: 0.8,
        standard: 1.0,
        advanced: 1.5,
    })
}

fn input_with(features: Vec<FeatureSelection>) -> RequirementsInput {
    RequirementsInput {
        features,
        ..Default::default()
    }
}

#[test]
fn auth_standard_small_scale_is_ten_points() {
    let catalog = FeatureCatalog::from_entries(vec![auth_entry()]);
    let input = input_with(vec![FeatureSelection::new("auth", FeatureDepth::Standard)]);
    assert_eq!(count(&input, &catalog, &FunctionPointConfig::default()), 10.0);
}

#[test]
fn empty_feature_list_is_zero() {
    let catalog = FeatureCatalog::from_entries(vec![auth_entry()]);
    assert_eq!(count(&input_with(vec![]), &catalog, &FunctionPointConfig::default()), 0.0);
}

#[test]
fn depth_and_scale_multiply() {
    let catalog = FeatureCatalog::from_entries(vec![auth_entry()]);
    let mut input = input_with(vec![FeatureSelection::new("auth", FeatureDepth::Advanced)]);
    input.scale_band = ScaleBand::Large;
    // 10 × 1.5 × 1.5
    assert_eq!(count(&input, &catalog, &FunctionPointConfig::default()), 22.5);
}

#[test]
fn entry_multipliers_win_over_config_table() {
    let custom = FeatureLibraryEntry::new("chat", 10.0).with_multipliers(DepthMultipliers {
        basic: 0.5,
        standard: 1.0,
        advanced: 2.0,
    });
    let plain = FeatureLibraryEntry::new("search", 10.0);
    let catalog = FeatureCatalog::from_entries(vec![custom, plain]);
    let input = input_with(vec![
        FeatureSelection::new("chat", FeatureDepth::Advanced),
        FeatureSelection::new("search", FeatureDepth::Advanced),
    ]);
    // chat 10 × 2.0 + search 10 × 1.5 (config table)
    assert_eq!(count(&input, &catalog, &FunctionPointConfig::default()), 35.0);
}

#[test]
fn quality_flags_apply_to_every_feature() {
    let catalog = FeatureCatalog::from_entries(vec![
        FeatureLibraryEntry::new("auth", 10.0),
        FeatureLibraryEntry::new("payments", 20.0),
    ]);
    let mut input = input_with(vec![
        FeatureSelection::new("auth", FeatureDepth::Standard),
        FeatureSelection::new("payments", FeatureDepth::Standard),
    ]);
    input.a11y = true;
    input.i18n = true;

    let config = FunctionPointConfig::default();
    assert!((quality_factor(&input, &config.quality) - 1.2).abs() < 1e-12);
    assert!((count(&input, &catalog, &config) - 36.0).abs() < 1e-9);
}

#[test]
fn unknown_keys_are_ignored() {
    let catalog = FeatureCatalog::from_entries(vec![auth_entry()]);
    let input = input_with(vec![
        FeatureSelection::new("auth", FeatureDepth::Basic),
        FeatureSelection::new("hologram", FeatureDepth::Advanced),
    ]);
    assert_eq!(count(&input, &catalog, &FunctionPointConfig::default()), 8.0);
}

#[test]
fn repeated_selection_counts_twice() {
    let catalog = FeatureCatalog::from_entries(vec![auth_entry()]);
    let input = input_with(vec![
        FeatureSelection::new("auth", FeatureDepth::Standard),
        FeatureSelection::new("auth", FeatureDepth::Basic),
    ]);
    assert_eq!(count(&input, &catalog, &FunctionPointConfig::default()), 18.0);
}
