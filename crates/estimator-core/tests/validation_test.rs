//! Requirement validation: every violation is collected into one failure.

use chrono::{TimeZone, Utc};
use estimator_core::errors::{EstimatorErrorCode, ValidationError};
use estimator_core::models::*;
use estimator_core::validation::validate_requirements;

fn valid_input() -> RequirementsInput {
    RequirementsInput {
        goals: "Marketplace for local artisans".to_string(),
        build_types: vec![BuildType::WebApplication],
        artifacts: vec!["https://example.com/brief.pdf".to_string()],
        features: vec![FeatureSelection::new("auth", FeatureDepth::Standard)],
        budget: Budget {
            budget_type: BudgetType::Fixed,
            amount: 25_000.0,
        },
        ..Default::default()
    }
}

#[test]
fn valid_input_passes() {
    assert!(validate_requirements(&valid_input()).is_ok());
}

#[test]
fn zero_budget_and_no_features_are_valid() {
    let input = RequirementsInput {
        features: vec![],
        budget: Budget::default(),
        ..valid_input()
    };
    assert!(validate_requirements(&input).is_ok());
}

#[test]
fn short_goals_rejected() {
    let input = RequirementsInput {
        goals: "app".to_string(),
        ..valid_input()
    };
    let errors = validate_requirements(&input).unwrap_err();
    assert_eq!(
        errors.errors,
        vec![ValidationError::TooShort {
            field: "goals".to_string(),
            min: 5
        }]
    );
}

#[test]
fn missing_build_types_rejected() {
    let input = RequirementsInput {
        build_types: vec![],
        ..valid_input()
    };
    let errors = validate_requirements(&input).unwrap_err();
    assert!(errors.has_field("buildTypes"));
}

#[test]
fn too_many_and_malformed_artifacts_rejected() {
    let mut artifacts: Vec<String> = (0..5).map(|i| format!("https://example.com/{i}")).collect();
    artifacts.push("not a url".to_string());
    let input = RequirementsInput {
        artifacts,
        ..valid_input()
    };
    let errors = validate_requirements(&input).unwrap_err();
    assert!(errors.has_field("artifacts"));
    assert!(errors.has_field("artifacts[5]"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn artifact_urls_are_parsed_not_prefix_matched() {
    let input = RequirementsInput {
        artifacts: vec![
            "ftp://files.example.com/spec.pdf".to_string(),
            "https://example.com:99999/x".to_string(),
            "https://exa[mple.com".to_string(),
        ],
        ..valid_input()
    };
    let errors = validate_requirements(&input).unwrap_err();
    assert!(!errors.has_field("artifacts[0]"));
    assert!(errors.has_field("artifacts[1]"));
    assert!(errors.has_field("artifacts[2]"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn blank_feature_key_rejected() {
    let input = RequirementsInput {
        features: vec![
            FeatureSelection::new("auth", FeatureDepth::Basic),
            FeatureSelection::new("  ", FeatureDepth::Basic),
        ],
        ..valid_input()
    };
    let errors = validate_requirements(&input).unwrap_err();
    assert!(errors.has_field("features[1].key"));
}

#[test]
fn negative_and_nan_budget_rejected() {
    for amount in [-1.0, f64::NAN] {
        let mut input = valid_input();
        input.budget.amount = amount;
        let errors = validate_requirements(&input).unwrap_err();
        assert!(errors.has_field("budget.amount"), "amount {amount} accepted");
    }
}

#[test]
fn unbounded_budget_accepted() {
    let mut input = valid_input();
    input.budget.amount = f64::INFINITY;
    assert!(validate_requirements(&input).is_ok());
}

#[test]
fn fixed_timeline_requires_deadline() {
    let mut input = valid_input();
    input.timeline.timeline_type = TimelineType::Fixed;
    let errors = validate_requirements(&input).unwrap_err();
    assert!(errors.has_field("timeline.deadline"));

    input.timeline.deadline = Some(Utc.with_ymd_and_hms(2027, 3, 1, 0, 0, 0).unwrap());
    assert!(validate_requirements(&input).is_ok());
}

#[test]
fn all_violations_reported_together() {
    let input = RequirementsInput {
        goals: String::new(),
        build_types: vec![],
        budget: Budget {
            budget_type: BudgetType::Fixed,
            amount: -5.0,
        },
        ..Default::default()
    };
    let errors = validate_requirements(&input).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.error_code(), "VALIDATION_ERROR");
    let message = errors.to_string();
    assert!(message.starts_with("3 invalid field(s): goals"));
    assert!(errors.api_string().starts_with("[VALIDATION_ERROR]"));
}
