//! Team planner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FP_PER_DEVELOPER, DEFAULT_FP_PER_QA, DEVOPS_INTEGRATION_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Function points per generalist developer.
    pub fp_per_developer: f64,
    /// Function points per QA engineer.
    pub fp_per_qa: f64,
    /// A DevOps engineer joins above this many integrations.
    pub devops_integration_threshold: usize,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            fp_per_developer: DEFAULT_FP_PER_DEVELOPER,
            fp_per_qa: DEFAULT_FP_PER_QA,
            devops_integration_threshold: DEVOPS_INTEGRATION_THRESHOLD,
        }
    }
}
