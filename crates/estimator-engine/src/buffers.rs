//! Buffer calculator: seven independent multiplicative risk factors.
//!
//! ```text
//! buffer = buildType × clarity × documentation × integration × aiBase × aiNovelty × compliance
//! ```
//!
//! The product is rounded to 2 decimals before it scales function points.

use estimator_core::config::BufferConfig;
use estimator_core::constants::BUFFER_DECIMALS;
use estimator_core::models::{BufferBreakdown, RequirementsInput};

/// `1 + (buildTypes − 1) × step`. No build types is treated as one.
pub fn build_type_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    let extra = input.build_types.len().saturating_sub(1) as f64;
    1.0 + extra * config.build_type_step
}

/// Lower when the project resembles an existing product.
pub fn clarity_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    if input.like_existing_product {
        config.clarity_known
    } else {
        config.clarity_unknown
    }
}

/// Raised, not lowered, when detailed docs are provided.
pub fn documentation_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    if input.detailed_docs {
        config.detailed_docs
    } else {
        1.0
    }
}

/// Tiered step function over the integration count.
pub fn integration_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    config.integration_multiplier(input.integrations.len())
}

pub fn ai_base_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    if input.includes_ai {
        config.ai_base
    } else {
        1.0
    }
}

/// Applied whether or not AI is included.
pub fn ai_novelty_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    config.ai_novelty.get(input.ai_novelty)
}

pub fn compliance_factor(input: &RequirementsInput, config: &BufferConfig) -> f64 {
    config.compliance.get(input.compliance)
}

/// Round to [`BUFFER_DECIMALS`] places from the exact stored value.
///
/// A product stored just below a tie (1.045 is 1.04499...) rounds down.
pub fn round_buffer(value: f64) -> f64 {
    format!("{value:.prec$}", prec = BUFFER_DECIMALS)
        .parse()
        .unwrap_or(value)
}

/// Every factor plus the rounded total.
pub fn compute_breakdown(input: &RequirementsInput, config: &BufferConfig) -> BufferBreakdown {
    let mut breakdown = BufferBreakdown {
        build_type: build_type_factor(input, config),
        clarity: clarity_factor(input, config),
        documentation: documentation_factor(input, config),
        integration: integration_factor(input, config),
        ai_base: ai_base_factor(input, config),
        ai_novelty: ai_novelty_factor(input, config),
        compliance: compliance_factor(input, config),
        total: 0.0,
    };
    breakdown.total = round_buffer(breakdown.product());

    tracing::debug!(
        build_type = breakdown.build_type,
        clarity = breakdown.clarity,
        documentation = breakdown.documentation,
        integration = breakdown.integration,
        ai_base = breakdown.ai_base,
        ai_novelty = breakdown.ai_novelty,
        compliance = breakdown.compliance,
        total = breakdown.total,
        "buffer computed"
    );

    breakdown
}

/// `ceil(adjustedFP × fpToDevWeek)`.
pub fn dev_weeks(adjusted_fp: f64, fp_to_dev_week: f64) -> u32 {
    (adjusted_fp * fp_to_dev_week).ceil().max(0.0) as u32
}
