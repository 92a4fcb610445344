//! Cloud cost estimator configuration. Amounts are monthly USD.

use serde::{Deserialize, Serialize};

use super::ScaleMultipliers;
use crate::constants::{DEFAULT_CURRENCY, DEFAULT_USD_EXCHANGE_RATE, DEFAULT_YEARLY_DISCOUNT};
use crate::models::ScaleBand;

/// Baseline infrastructure tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudTier {
    Small,
    Medium,
    Large,
    /// Table entry only; no scale band selects it.
    Enterprise,
}

impl CloudTier {
    pub fn for_scale(band: ScaleBand) -> Self {
        match band {
            ScaleBand::Small => Self::Small,
            ScaleBand::Medium => Self::Medium,
            ScaleBand::Large => Self::Large,
        }
    }
}

/// Monthly USD baseline per infrastructure category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCosts {
    pub compute: f64,
    pub storage: f64,
    pub database: f64,
    pub networking: f64,
    pub monitoring: f64,
}

impl CategoryCosts {
    pub const fn new(
        compute: f64,
        storage: f64,
        database: f64,
        networking: f64,
        monitoring: f64,
    ) -> Self {
        Self {
            compute,
            storage,
            database,
            networking,
            monitoring,
        }
    }

    /// Every category multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            compute: self.compute * factor,
            storage: self.storage * factor,
            database: self.database * factor,
            networking: self.networking * factor,
            monitoring: self.monitoring * factor,
        }
    }

    pub fn sum(&self) -> f64 {
        self.compute + self.storage + self.database + self.networking + self.monitoring
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 5] {
        [
            ("compute", self.compute),
            ("storage", self.storage),
            ("database", self.database),
            ("networking", self.networking),
            ("monitoring", self.monitoring),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseCostTable {
    pub small: CategoryCosts,
    pub medium: CategoryCosts,
    pub large: CategoryCosts,
    pub enterprise: CategoryCosts,
}

impl Default for BaseCostTable {
    fn default() -> Self {
        Self {
            small: CategoryCosts::new(50.0, 20.0, 40.0, 10.0, 15.0),
            medium: CategoryCosts::new(150.0, 50.0, 120.0, 25.0, 30.0),
            large: CategoryCosts::new(400.0, 100.0, 250.0, 50.0, 50.0),
            enterprise: CategoryCosts::new(1000.0, 300.0, 600.0, 100.0, 100.0),
        }
    }
}

impl BaseCostTable {
    pub fn get(&self, tier: CloudTier) -> &CategoryCosts {
        match tier {
            CloudTier::Small => &self.small,
            CloudTier::Medium => &self.medium,
            CloudTier::Large => &self.large,
            CloudTier::Enterprise => &self.enterprise,
        }
    }
}

/// Multipliers applied to every baseline category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudMultipliers {
    pub scale: ScaleMultipliers,
    pub ai_included: f64,
    pub high_perf: f64,
    /// Only `high` compliance triggers this.
    pub high_compliance: f64,
    pub mobile_app: f64,
    pub realtime: f64,
}

impl Default for CloudMultipliers {
    fn default() -> Self {
        Self {
            scale: ScaleMultipliers {
                small: 1.0,
                medium: 2.0,
                large: 4.0,
            },
            ai_included: 1.5,
            high_perf: 1.3,
            high_compliance: 1.4,
            mobile_app: 1.2,
            realtime: 1.3,
        }
    }
}

/// Flat monthly USD add-ons. Not multiplier-scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudAddOns {
    /// Mobile app or web application present.
    pub cdn: f64,
    pub ai_hosting: f64,
    pub ci_cd: f64,
    pub backup: f64,
    /// High compliance only.
    pub enhanced_security: f64,
}

impl Default for CloudAddOns {
    fn default() -> Self {
        Self {
            cdn: 50.0,
            ai_hosting: 200.0,
            ci_cd: 30.0,
            backup: 40.0,
            enhanced_security: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Display currency code.
    pub currency: String,
    /// USD → display currency.
    pub usd_exchange_rate: f64,
    /// Discount on a yearly commitment, in [0, 1].
    pub yearly_discount: f64,
    pub base_costs: BaseCostTable,
    pub multipliers: CloudMultipliers,
    pub add_ons: CloudAddOns,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            usd_exchange_rate: DEFAULT_USD_EXCHANGE_RATE,
            yearly_discount: DEFAULT_YEARLY_DISCOUNT,
            base_costs: BaseCostTable::default(),
            multipliers: CloudMultipliers::default(),
            add_ons: CloudAddOns::default(),
        }
    }
}
