//! Per-option lookup table: one declarative profile per delivery plan.

use serde::{Deserialize, Serialize};

use crate::models::OptionKey;

/// Everything that differs between options A, B and C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionProfile {
    pub label: String,
    /// Applied to every baseline headcount.
    pub team_multiplier: f64,
    /// Applied to baseline dev-weeks.
    pub weeks_multiplier: f64,
    /// Lower weekly rate for the dev cost range.
    pub rate_min: f64,
    /// Upper weekly rate for the dev cost range.
    pub rate_max: f64,
    /// Cloud infrastructure scaling (lean / balanced / enterprise).
    pub cloud_scaling: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionTable {
    #[serde(rename = "A")]
    pub a: OptionProfile,
    #[serde(rename = "B")]
    pub b: OptionProfile,
    #[serde(rename = "C")]
    pub c: OptionProfile,
}

impl Default for OptionTable {
    fn default() -> Self {
        Self {
            a: OptionProfile {
                label: "Cost-Optimized".to_string(),
                team_multiplier: 1.0,
                weeks_multiplier: 1.0,
                rate_min: 900.0,
                rate_max: 1000.0,
                cloud_scaling: 0.8,
            },
            b: OptionProfile {
                label: "Balanced".to_string(),
                team_multiplier: 1.2,
                weeks_multiplier: 0.85,
                rate_min: 1000.0,
                rate_max: 1300.0,
                cloud_scaling: 1.0,
            },
            c: OptionProfile {
                label: "Fast-Track".to_string(),
                team_multiplier: 1.6,
                weeks_multiplier: 0.7,
                rate_min: 1250.0,
                rate_max: 1500.0,
                cloud_scaling: 1.4,
            },
        }
    }
}

impl OptionTable {
    pub fn get(&self, key: OptionKey) -> &OptionProfile {
        match key {
            OptionKey::A => &self.a,
            OptionKey::B => &self.b,
            OptionKey::C => &self.c,
        }
    }
}
