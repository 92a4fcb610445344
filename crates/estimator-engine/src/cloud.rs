//! Cloud cost estimator.
//!
//! ```text
//! multiplier = scale[band] × (ai? 1.5) × (perf? 1.3) × (compliance=high? 1.4)
//!            × (mobile? 1.2) × (realtime? 1.3) × optionScaling
//! category   = baseCosts[tier].category × multiplier
//! additional = flat add-ons, not scaled
//! ```
//!
//! Every category and the total are converted to the display currency and
//! rounded independently.

use estimator_core::config::{CategoryCosts, CloudConfig, CloudTier};
use estimator_core::constants::REALTIME_KEYWORDS;
use estimator_core::models::{
    BuildType, CloudCostBreakdown, ComplianceLevel, RequirementsInput, ScaleBand,
};

/// The slice of a requirements record the cloud estimator reads.
#[derive(Debug, Clone, Copy)]
pub struct CloudCostInputs<'a> {
    pub scale_band: ScaleBand,
    pub includes_ai: bool,
    pub perf: bool,
    pub compliance: ComplianceLevel,
    pub build_types: &'a [BuildType],
    pub integrations: &'a [String],
}

impl<'a> CloudCostInputs<'a> {
    pub fn from_requirements(input: &'a RequirementsInput) -> Self {
        Self {
            scale_band: input.scale_band,
            includes_ai: input.includes_ai,
            perf: input.perf,
            compliance: input.compliance,
            build_types: &input.build_types,
            integrations: &input.integrations,
        }
    }

    pub fn has_mobile(&self) -> bool {
        self.build_types.iter().any(|b| b.is_mobile())
    }

    /// Any integration whose name mentions a realtime keyword, case-insensitively.
    pub fn has_realtime(&self) -> bool {
        self.integrations.iter().any(|integration| {
            let name = integration.to_lowercase();
            REALTIME_KEYWORDS.iter().any(|k| name.contains(k))
        })
    }
}

/// Monthly breakdown plus the yearly commitment figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudCostEstimate {
    pub monthly: CloudCostBreakdown,
    pub yearly: u64,
    pub savings: u64,
}

/// Product of every applicable multiplier, including the option's scaling.
pub fn cost_multiplier(inputs: &CloudCostInputs<'_>, config: &CloudConfig, option_scaling: f64) -> f64 {
    let m = &config.multipliers;
    let mut multiplier = m.scale.get(inputs.scale_band);

    if inputs.includes_ai {
        multiplier *= m.ai_included;
    }
    if inputs.perf {
        multiplier *= m.high_perf;
    }
    if inputs.compliance == ComplianceLevel::High {
        multiplier *= m.high_compliance;
    }
    if inputs.has_mobile() {
        multiplier *= m.mobile_app;
    }
    if inputs.has_realtime() {
        multiplier *= m.realtime;
    }

    multiplier * option_scaling
}

/// Flat monthly USD add-ons.
pub fn additional_services(inputs: &CloudCostInputs<'_>, config: &CloudConfig) -> f64 {
    let a = &config.add_ons;
    let mut total = a.ci_cd + a.backup;

    if inputs.has_mobile() || inputs.build_types.contains(&BuildType::WebApplication) {
        total += a.cdn;
    }
    if inputs.includes_ai {
        total += a.ai_hosting;
    }
    if inputs.compliance == ComplianceLevel::High {
        total += a.enhanced_security;
    }

    total
}

/// Monthly cost in the display currency.
pub fn monthly_cost(
    inputs: &CloudCostInputs<'_>,
    config: &CloudConfig,
    option_scaling: f64,
) -> CloudCostBreakdown {
    let tier = CloudTier::for_scale(inputs.scale_band);
    let scaled: CategoryCosts = config
        .base_costs
        .get(tier)
        .scaled(cost_multiplier(inputs, config, option_scaling));
    let additional = additional_services(inputs, config);
    let total_usd = scaled.sum() + additional;

    let rate = config.usd_exchange_rate;
    let convert = |usd: f64| (usd * rate).round().max(0.0) as u64;

    CloudCostBreakdown {
        compute: convert(scaled.compute),
        storage: convert(scaled.storage),
        database: convert(scaled.database),
        networking: convert(scaled.networking),
        monitoring: convert(scaled.monitoring),
        additional_services: convert(additional),
        total: convert(total_usd),
    }
}

/// Twelve months with the yearly commitment discount applied.
pub fn yearly_cost(monthly_total: u64, config: &CloudConfig) -> u64 {
    let yearly = monthly_total as f64 * 12.0 * (1.0 - config.yearly_discount);
    yearly.round().max(0.0) as u64
}

pub fn estimate(inputs: &CloudCostInputs<'_>, config: &CloudConfig, option_scaling: f64) -> CloudCostEstimate {
    let monthly = monthly_cost(inputs, config, option_scaling);
    let yearly = yearly_cost(monthly.total, config);
    let savings = (monthly.total * 12).saturating_sub(yearly);

    CloudCostEstimate {
        monthly,
        yearly,
        savings,
    }
}
