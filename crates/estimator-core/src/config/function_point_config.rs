//! Function-point multiplier tables.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FP_TO_DEV_WEEK;
use crate::models::{FeatureDepth, ScaleBand};

/// Multiplier per feature depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthMultipliers {
    pub basic: f64,
    pub standard: f64,
    pub advanced: f64,
}

impl Default for DepthMultipliers {
    fn default() -> Self {
        Self {
            basic: 0.8,
            standard: 1.0,
            advanced: 1.5,
        }
    }
}

impl DepthMultipliers {
    pub fn get(&self, depth: FeatureDepth) -> f64 {
        match depth {
            FeatureDepth::Basic => self.basic,
            FeatureDepth::Standard => self.standard,
            FeatureDepth::Advanced => self.advanced,
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 3] {
        [
            ("basic", self.basic),
            ("standard", self.standard),
            ("advanced", self.advanced),
        ]
    }
}

/// Multiplier per scale band. Keyed by the band label in TOML.
/// A TOML table overriding it must list all three bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMultipliers {
    #[serde(rename = "10k-100k")]
    pub small: f64,
    #[serde(rename = "100k-1m")]
    pub medium: f64,
    #[serde(rename = ">1m")]
    pub large: f64,
}

impl ScaleMultipliers {
    pub fn get(&self, band: ScaleBand) -> f64 {
        match band {
            ScaleBand::Small => self.small,
            ScaleBand::Medium => self.medium,
            ScaleBand::Large => self.large,
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 3] {
        [
            (ScaleBand::Small.as_str(), self.small),
            (ScaleBand::Medium.as_str(), self.medium),
            (ScaleBand::Large.as_str(), self.large),
        ]
    }
}

/// Additive quality surcharges on top of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityWeights {
    pub a11y: f64,
    pub i18n: f64,
    pub perf: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            a11y: 0.1,
            i18n: 0.1,
            perf: 0.15,
        }
    }
}

/// Function-point calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionPointConfig {
    /// Developer-weeks per adjusted function point.
    pub fp_to_dev_week: f64,
    pub depth: DepthMultipliers,
    pub scale: ScaleMultipliers,
    pub quality: QualityWeights,
}

impl Default for FunctionPointConfig {
    fn default() -> Self {
        Self {
            fp_to_dev_week: DEFAULT_FP_TO_DEV_WEEK,
            depth: DepthMultipliers::default(),
            scale: ScaleMultipliers {
                small: 1.0,
                medium: 1.25,
                large: 1.5,
            },
            quality: QualityWeights::default(),
        }
    }
}
