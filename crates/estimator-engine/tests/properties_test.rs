//! Property tests over the numeric invariants of the pipeline.

use estimator_core::config::{BufferConfig, CloudConfig, EstimatorConfig};
use estimator_core::models::{
    AiNovelty, BuildType, ComplianceLevel, FeatureDepth, FeatureLibraryEntry, FeatureSelection,
    RequirementsInput, ScaleBand, TeamMember, TeamRole,
};
use estimator_engine::buffers::{compute_breakdown, dev_weeks, round_buffer};
use estimator_engine::cloud::monthly_cost;
use estimator_engine::team::scale;
use estimator_engine::{CloudCostInputs, EstimationEngine, FeatureCatalog};
use proptest::prelude::*;

const LIBRARY_KEYS: [&str; 5] = ["auth", "payments", "chat", "search", "uploads"];

fn library() -> Vec<FeatureLibraryEntry> {
    LIBRARY_KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| FeatureLibraryEntry::new(*key, 5.0 + 5.0 * i as f64))
        .collect()
}

fn arb_depth() -> impl Strategy<Value = FeatureDepth> {
    prop_oneof![
        Just(FeatureDepth::Basic),
        Just(FeatureDepth::Standard),
        Just(FeatureDepth::Advanced),
    ]
}

fn arb_scale() -> impl Strategy<Value = ScaleBand> {
    prop_oneof![Just(ScaleBand::Small), Just(ScaleBand::Medium), Just(ScaleBand::Large)]
}

fn arb_compliance() -> impl Strategy<Value = ComplianceLevel> {
    prop_oneof![
        Just(ComplianceLevel::None),
        Just(ComplianceLevel::Moderate),
        Just(ComplianceLevel::High),
    ]
}

fn arb_novelty() -> impl Strategy<Value = AiNovelty> {
    prop_oneof![Just(AiNovelty::Low), Just(AiNovelty::Medium), Just(AiNovelty::High)]
}

fn arb_build_types() -> impl Strategy<Value = Vec<BuildType>> {
    proptest::sample::subsequence(BuildType::ALL.to_vec(), 1..=BuildType::ALL.len())
}

fn arb_feature() -> impl Strategy<Value = FeatureSelection> {
    (
        prop_oneof![
            proptest::sample::select(LIBRARY_KEYS.to_vec()).prop_map(String::from),
            "[a-z]{3,8}".prop_map(|s| format!("x_{s}")),
        ],
        arb_depth(),
    )
        .prop_map(|(key, depth)| FeatureSelection { key, depth })
}

prop_compose! {
    fn arb_requirements()(
        build_types in arb_build_types(),
        features in proptest::collection::vec(arb_feature(), 0..8),
        scale_band in arb_scale(),
        flags in proptest::array::uniform6(any::<bool>()),
        compliance in arb_compliance(),
        ai_novelty in arb_novelty(),
        integrations in proptest::collection::vec("[A-Za-z -]{1,12}", 0..9),
        budget in 0.0f64..200_000.0,
    ) -> RequirementsInput {
        let mut input = RequirementsInput {
            goals: "Generated project".to_string(),
            build_types,
            features,
            scale_band,
            a11y: flags[0],
            i18n: flags[1],
            perf: flags[2],
            compliance,
            integrations,
            like_existing_product: flags[3],
            detailed_docs: flags[4],
            includes_ai: flags[5],
            ai_novelty,
            ..Default::default()
        };
        input.budget.amount = budget;
        input
    }
}

proptest! {
    #[test]
    fn empty_features_yield_zero_fp(mut input in arb_requirements()) {
        input.features.clear();
        let estimate = EstimationEngine::default().estimate(&input, &library()).unwrap();
        prop_assert_eq!(estimate.computed.total_fp, 0.0);
        prop_assert_eq!(estimate.computed.adjusted_fp, 0.0);
    }

    #[test]
    fn buffer_is_rounded_product(input in arb_requirements()) {
        let b = compute_breakdown(&input, &BufferConfig::default());
        prop_assert_eq!(b.total, round_buffer(b.product()));
        prop_assert!((b.total - b.product()).abs() <= 0.005 + 1e-12);
        for factor in [b.build_type, b.clarity, b.documentation, b.integration, b.ai_base, b.ai_novelty, b.compliance] {
            prop_assert!(factor > 0.0);
        }
    }

    #[test]
    fn dev_weeks_is_ceil_of_adjusted(adjusted in 0.0f64..100_000.0) {
        let weeks = dev_weeks(adjusted, 0.1);
        prop_assert_eq!(f64::from(weeks), (adjusted * 0.1).ceil());
    }

    #[test]
    fn scaled_headcount_at_least_one(
        counts in proptest::collection::vec(0u32..20, 1..6),
        multiplier in prop_oneof![Just(1.0), Just(1.2), Just(1.6)],
    ) {
        let team: Vec<TeamMember> = counts.iter().map(|c| TeamMember::new(TeamRole::FullstackDev, *c)).collect();
        for member in scale(&team, multiplier) {
            prop_assert!(member.count >= 1);
        }
    }

    #[test]
    fn cloud_total_close_to_category_sum(
        input in arb_requirements(),
        scaling in 0.1f64..3.0,
    ) {
        let inputs = CloudCostInputs::from_requirements(&input);
        let monthly = monthly_cost(&inputs, &CloudConfig::default(), scaling);
        prop_assert!(monthly.total.abs_diff(monthly.category_sum()) <= 6);
    }

    #[test]
    fn exactly_one_recommended(input in arb_requirements()) {
        let estimate = EstimationEngine::default().estimate(&input, &library()).unwrap();
        let recommended = estimate.options.iter().filter(|(_, o)| o.recommended).count();
        prop_assert_eq!(recommended, 1);
        for (_, option) in estimate.options.iter() {
            prop_assert!(option.weeks >= 1);
            prop_assert!(option.cost_min <= option.cost_max);
            prop_assert!(!option.is_selected);
        }
    }

    #[test]
    fn estimate_is_deterministic(input in arb_requirements()) {
        let engine = EstimationEngine::new(EstimatorConfig::default()).unwrap();
        let catalog = FeatureCatalog::from_entries(library());
        let first = engine.estimate_with_catalog(&input, &catalog).unwrap();
        let second = engine.estimate_with_catalog(&input, &catalog).unwrap();
        prop_assert_eq!(first, second);
    }
}
