//! Requirement validation.
//!
//! Collects every violation instead of stopping at the first one, so the
//! caller can report a single validation failure covering all fields.

use url::Url;

use crate::constants::{MAX_ARTIFACTS, MIN_GOALS_LEN};
use crate::errors::{ValidationError, ValidationErrors};
use crate::models::{RequirementsInput, TimelineType};

/// Validate a requirements record before estimation.
pub fn validate_requirements(input: &RequirementsInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if input.goals.trim().chars().count() < MIN_GOALS_LEN {
        errors.push(ValidationError::TooShort {
            field: "goals".to_string(),
            min: MIN_GOALS_LEN,
        });
    }

    if input.build_types.is_empty() {
        errors.push(ValidationError::TooFew {
            field: "buildTypes".to_string(),
            min: 1,
        });
    }

    if input.artifacts.len() > MAX_ARTIFACTS {
        errors.push(ValidationError::TooMany {
            field: "artifacts".to_string(),
            max: MAX_ARTIFACTS,
        });
    }
    for (i, artifact) in input.artifacts.iter().enumerate() {
        if let Err(e) = Url::parse(artifact) {
            errors.push(ValidationError::InvalidValue {
                field: format!("artifacts[{i}]"),
                message: format!("must be a valid URL: {e}"),
            });
        }
    }

    for (i, feature) in input.features.iter().enumerate() {
        if feature.key.trim().is_empty() {
            errors.push(ValidationError::Missing {
                field: format!("features[{i}].key"),
            });
        }
    }

    let amount = input.budget.amount;
    if amount.is_nan() || amount < 0.0 {
        errors.push(ValidationError::InvalidValue {
            field: "budget.amount".to_string(),
            message: "must be a non-negative number".to_string(),
        });
    }

    if input.timeline.timeline_type == TimelineType::Fixed && input.timeline.deadline.is_none() {
        errors.push(ValidationError::Missing {
            field: "timeline.deadline".to_string(),
        });
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BuildType;

    fn with_artifacts(artifacts: &[&str]) -> RequirementsInput {
        RequirementsInput {
            goals: "Partner portal".to_string(),
            build_types: vec![BuildType::WebApplication],
            artifacts: artifacts.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_absolute_urls_of_any_scheme_accepted() {
        let input = with_artifacts(&[
            "https://example.com/spec.pdf",
            "http://figma.com?file=1",
            "ftp://files.example.com/spec.pdf",
        ]);
        assert!(validate_requirements(&input).is_ok());
    }

    #[test]
    fn test_malformed_urls_rejected() {
        let input = with_artifacts(&[
            "example.com",
            "https://example.com:99999/x",
            "https://exa[mple.com",
            "https://exa mple.com",
        ]);
        let errors = validate_requirements(&input).unwrap_err();
        assert_eq!(errors.len(), 4);
        for i in 0..4 {
            assert!(errors.has_field(&format!("artifacts[{i}]")));
        }
    }
}
