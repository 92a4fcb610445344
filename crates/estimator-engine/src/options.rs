//! Option builder: three priced delivery plans from one baseline.

use estimator_core::config::{EstimatorConfig, OptionProfile};
use estimator_core::models::{OptionKey, QuoteOption, QuoteOptions, RequirementsInput, TeamMember};

use crate::cloud::{self, CloudCostInputs};
use crate::team;

/// Build options A, B and C. None is recommended yet.
pub fn build(
    dev_weeks: u32,
    input: &RequirementsInput,
    total_fp: f64,
    config: &EstimatorConfig,
) -> QuoteOptions {
    let base_team = team::plan(input, total_fp, &config.team);
    let cloud_inputs = CloudCostInputs::from_requirements(input);

    let build_one = |key: OptionKey| {
        build_option(
            config.options.get(key),
            dev_weeks,
            &base_team,
            &cloud_inputs,
            config,
        )
    };

    QuoteOptions {
        a: build_one(OptionKey::A),
        b: build_one(OptionKey::B),
        c: build_one(OptionKey::C),
    }
}

fn build_option(
    profile: &OptionProfile,
    dev_weeks: u32,
    base_team: &[TeamMember],
    cloud_inputs: &CloudCostInputs<'_>,
    config: &EstimatorConfig,
) -> QuoteOption {
    let baseline = f64::from(dev_weeks);
    let weeks = (baseline * profile.weeks_multiplier).ceil().max(1.0) as u32;
    let cloud = cloud::estimate(cloud_inputs, &config.cloud, profile.cloud_scaling);

    QuoteOption {
        label: profile.label.clone(),
        team: team::scale(base_team, profile.team_multiplier),
        weeks,
        // Dev cost is priced on baseline dev-weeks, not the compressed timeline.
        cost_min: baseline * profile.rate_min,
        cost_max: baseline * profile.rate_max,
        cloud_monthly: cloud.monthly.total,
        cloud_yearly: cloud.yearly,
        cloud_breakdown: cloud.monthly,
        cloud_savings: cloud.savings,
        recommended: false,
        is_selected: false,
    }
}

/// The most expensive option whose `cost_min` fits the budget, else A.
///
/// A zero budget is an unstated budget and always recommends A, even when
/// every option is free.
pub fn pick_recommended(options: &QuoteOptions, budget: f64) -> OptionKey {
    if budget.is_nan() || budget <= 0.0 {
        return OptionKey::A;
    }
    options
        .iter()
        .filter(|(_, option)| option.cost_min <= budget)
        .map(|(key, _)| key)
        .last()
        .unwrap_or(OptionKey::A)
}
