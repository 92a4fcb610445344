//! Monthly cloud cost breakdown in the display currency.

use serde::{Deserialize, Serialize};

/// Per-category monthly cost, each rounded independently.
///
/// `total` is rounded from the unrounded sum, so it can differ from the sum
/// of the rounded categories by a few units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudCostBreakdown {
    pub compute: u64,
    pub storage: u64,
    pub database: u64,
    pub networking: u64,
    pub monitoring: u64,
    pub additional_services: u64,
    pub total: u64,
}

impl CloudCostBreakdown {
    /// Compute + storage + database + networking.
    pub fn infrastructure(&self) -> u64 {
        self.compute + self.storage + self.database + self.networking
    }

    /// Monitoring + additional services.
    pub fn managed_services(&self) -> u64 {
        self.monitoring + self.additional_services
    }

    /// Sum of the six rounded categories.
    pub fn category_sum(&self) -> u64 {
        self.infrastructure() + self.managed_services()
    }
}
