//! Top-level estimator configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BufferConfig, CloudConfig, FunctionPointConfig, OptionTable, TeamConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::models::OptionKey;

/// Top-level configuration aggregating every multiplier table the engine reads.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ESTIMATOR_*`)
/// 3. Project config (`estimator.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EstimatorConfig {
    pub function_points: FunctionPointConfig,
    pub buffers: BufferConfig,
    pub team: TeamConfig,
    pub options: OptionTable,
    pub cloud: CloudConfig,
}

/// Caller-supplied overrides. Highest priority.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub fp_to_dev_week: Option<f64>,
    pub usd_exchange_rate: Option<f64>,
    pub currency: Option<String>,
}

impl EstimatorConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            config = Self::from_toml_file(&project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        tracing::debug!(
            currency = %config.cloud.currency,
            usd_exchange_rate = config.cloud.usd_exchange_rate,
            fp_to_dev_week = config.function_points.fp_to_dev_week,
            "estimator config resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string. Missing tables keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EstimatorConfig) -> Result<(), ConfigError> {
        let fp = &config.function_points;
        positive("function_points.fp_to_dev_week", fp.fp_to_dev_week)?;
        for (name, value) in fp.depth.values() {
            non_negative(&format!("function_points.depth.{name}"), value)?;
        }
        for (name, value) in fp.scale.values() {
            non_negative(&format!("function_points.scale.{name}"), value)?;
        }
        non_negative("function_points.quality.a11y", fp.quality.a11y)?;
        non_negative("function_points.quality.i18n", fp.quality.i18n)?;
        non_negative("function_points.quality.perf", fp.quality.perf)?;

        let b = &config.buffers;
        non_negative("buffers.build_type_step", b.build_type_step)?;
        non_negative("buffers.clarity_known", b.clarity_known)?;
        non_negative("buffers.clarity_unknown", b.clarity_unknown)?;
        non_negative("buffers.detailed_docs", b.detailed_docs)?;
        non_negative("buffers.integration_overflow", b.integration_overflow)?;
        non_negative("buffers.ai_base", b.ai_base)?;
        for (i, tier) in b.integration_tiers.iter().enumerate() {
            non_negative(&format!("buffers.integration_tiers[{i}].multiplier"), tier.multiplier)?;
            if i > 0 && tier.max <= b.integration_tiers[i - 1].max {
                return Err(ConfigError::ValidationFailed {
                    field: format!("buffers.integration_tiers[{i}].max"),
                    message: "tiers must be in strictly ascending order".to_string(),
                });
            }
        }
        let n = &b.ai_novelty;
        for (name, value) in [("low", n.low), ("medium", n.medium), ("high", n.high)] {
            non_negative(&format!("buffers.ai_novelty.{name}"), value)?;
        }
        let c = &b.compliance;
        for (name, value) in [("none", c.none), ("moderate", c.moderate), ("high", c.high)] {
            non_negative(&format!("buffers.compliance.{name}"), value)?;
        }

        positive("team.fp_per_developer", config.team.fp_per_developer)?;
        positive("team.fp_per_qa", config.team.fp_per_qa)?;

        for key in OptionKey::ALL {
            let profile = config.options.get(key);
            non_negative(&format!("options.{key}.team_multiplier"), profile.team_multiplier)?;
            non_negative(&format!("options.{key}.weeks_multiplier"), profile.weeks_multiplier)?;
            non_negative(&format!("options.{key}.rate_min"), profile.rate_min)?;
            non_negative(&format!("options.{key}.cloud_scaling"), profile.cloud_scaling)?;
            if profile.rate_max.is_nan() || profile.rate_max < profile.rate_min {
                return Err(ConfigError::ValidationFailed {
                    field: format!("options.{key}.rate_max"),
                    message: "must be greater than or equal to rate_min".to_string(),
                });
            }
        }

        let cloud = &config.cloud;
        positive("cloud.usd_exchange_rate", cloud.usd_exchange_rate)?;
        if !(0.0..=1.0).contains(&cloud.yearly_discount) {
            return Err(ConfigError::ValidationFailed {
                field: "cloud.yearly_discount".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if cloud.currency.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "cloud.currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let tiers = [
            ("small", &cloud.base_costs.small),
            ("medium", &cloud.base_costs.medium),
            ("large", &cloud.base_costs.large),
            ("enterprise", &cloud.base_costs.enterprise),
        ];
        for (tier, costs) in tiers {
            for (category, value) in costs.values() {
                non_negative(&format!("cloud.base_costs.{tier}.{category}"), value)?;
            }
        }
        let m = &cloud.multipliers;
        for (name, value) in m.scale.values() {
            non_negative(&format!("cloud.multipliers.scale.{name}"), value)?;
        }
        non_negative("cloud.multipliers.ai_included", m.ai_included)?;
        non_negative("cloud.multipliers.high_perf", m.high_perf)?;
        non_negative("cloud.multipliers.high_compliance", m.high_compliance)?;
        non_negative("cloud.multipliers.mobile_app", m.mobile_app)?;
        non_negative("cloud.multipliers.realtime", m.realtime)?;
        let a = &cloud.add_ons;
        non_negative("cloud.add_ons.cdn", a.cdn)?;
        non_negative("cloud.add_ons.ai_hosting", a.ai_hosting)?;
        non_negative("cloud.add_ons.ci_cd", a.ci_cd)?;
        non_negative("cloud.add_ons.backup", a.backup)?;
        non_negative("cloud.add_ons.enhanced_security", a.enhanced_security)?;

        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut EstimatorConfig) {
        if let Ok(val) = std::env::var("ESTIMATOR_FP_TO_DEV_WEEK") {
            if let Ok(v) = val.parse::<f64>() {
                config.function_points.fp_to_dev_week = v;
            }
        }
        if let Ok(val) = std::env::var("ESTIMATOR_CLOUD_USD_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.cloud.usd_exchange_rate = v;
            }
        }
        if let Ok(val) = std::env::var("ESTIMATOR_CLOUD_CURRENCY") {
            config.cloud.currency = val;
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut EstimatorConfig, o: &ConfigOverrides) {
        if let Some(v) = o.fp_to_dev_week {
            config.function_points.fp_to_dev_week = v;
        }
        if let Some(v) = o.usd_exchange_rate {
            config.cloud.usd_exchange_rate = v;
        }
        if let Some(ref v) = o.currency {
            config.cloud.currency = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be a finite, non-negative number".to_string(),
        })
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be greater than 0".to_string(),
        })
    }
}
