//! Option builder: timelines, dev cost ranges, teams, cloud and recommendation.

use estimator_core::config::EstimatorConfig;
use estimator_core::models::{BuildType, OptionKey, RequirementsInput, TeamRole};
use estimator_engine::options::{build, pick_recommended};

fn web_input() -> RequirementsInput {
    RequirementsInput {
        goals: "Customer portal".to_string(),
        build_types: vec![BuildType::WebApplication],
        ..Default::default()
    }
}

#[test]
fn labels_weeks_and_costs() {
    let options = build(17, &web_input(), 71.0, &EstimatorConfig::default());

    assert_eq!(options.a.label, "Cost-Optimized");
    assert_eq!(options.b.label, "Balanced");
    assert_eq!(options.c.label, "Fast-Track");

    assert_eq!(options.a.weeks, 17);
    assert_eq!(options.b.weeks, 15);
    assert_eq!(options.c.weeks, 12);

    assert_eq!((options.a.cost_min, options.a.cost_max), (15_300.0, 17_000.0));
    assert_eq!((options.b.cost_min, options.b.cost_max), (17_000.0, 22_100.0));
    assert_eq!((options.c.cost_min, options.c.cost_max), (21_250.0, 25_500.0));
}

#[test]
fn costs_are_ordered_and_ranges_valid() {
    let options = build(9, &web_input(), 50.0, &EstimatorConfig::default());
    for (_, option) in options.iter() {
        assert!(option.cost_min <= option.cost_max);
        assert!(option.weeks >= 1);
    }
    assert!(options.a.cost_min < options.b.cost_min);
    assert!(options.b.cost_min < options.c.cost_min);
    assert!(options.a.weeks >= options.b.weeks && options.b.weeks >= options.c.weeks);
}

#[test]
fn teams_grow_with_option() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    let devs = |key: OptionKey| {
        options
            .get(key)
            .team
            .iter()
            .find(|m| m.role == TeamRole::FullstackDev)
            .map(|m| m.count)
    };
    // baseline ceil(100 / 80) = 2
    assert_eq!(devs(OptionKey::A), Some(2));
    assert_eq!(devs(OptionKey::B), Some(3));
    assert_eq!(devs(OptionKey::C), Some(4));
}

#[test]
fn cloud_costs_scale_per_option() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    assert!(options.a.cloud_monthly < options.b.cloud_monthly);
    assert!(options.b.cloud_monthly < options.c.cloud_monthly);
    for (_, option) in options.iter() {
        assert_eq!(option.cloud_monthly, option.cloud_breakdown.total);
        assert_eq!(option.cloud_savings, option.cloud_monthly * 12 - option.cloud_yearly);
    }
}

#[test]
fn nothing_recommended_or_selected_until_marked() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    assert_eq!(options.recommended_key(), None);
    assert!(options.selected().is_empty());
}

#[test]
fn budget_zero_recommends_a() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    assert_eq!(pick_recommended(&options, 0.0), OptionKey::A);
}

#[test]
fn budget_below_every_option_recommends_a() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    assert_eq!(pick_recommended(&options, 500.0), OptionKey::A);
}

#[test]
fn huge_budget_recommends_c() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    assert_eq!(pick_recommended(&options, 1e12), OptionKey::C);
    assert_eq!(pick_recommended(&options, f64::INFINITY), OptionKey::C);
}

#[test]
fn budget_exactly_at_cost_min_fits() {
    let options = build(10, &web_input(), 100.0, &EstimatorConfig::default());
    assert_eq!(pick_recommended(&options, options.b.cost_min), OptionKey::B);
    assert_eq!(pick_recommended(&options, options.c.cost_min - 1.0), OptionKey::B);
}

#[test]
fn custom_option_table() {
    let mut config = EstimatorConfig::default();
    config.options.a.rate_min = 500.0;
    config.options.a.label = "Lean".to_string();
    let options = build(4, &web_input(), 30.0, &config);
    assert_eq!(options.a.label, "Lean");
    assert_eq!(options.a.cost_min, 2_000.0);
}
