//! Configuration system for the estimator.
//! TOML-based, 3-layer resolution: overrides > env > project file > defaults.

pub mod buffer_config;
pub mod cloud_config;
pub mod estimator_config;
pub mod function_point_config;
pub mod option_config;
pub mod team_config;

pub use buffer_config::{
    BufferConfig, ComplianceMultipliers, IntegrationTier, NoveltyMultipliers,
};
pub use cloud_config::{
    BaseCostTable, CategoryCosts, CloudAddOns, CloudConfig, CloudMultipliers, CloudTier,
};
pub use estimator_config::{ConfigOverrides, EstimatorConfig};
pub use function_point_config::{
    DepthMultipliers, FunctionPointConfig, QualityWeights, ScaleMultipliers,
};
pub use option_config::{OptionProfile, OptionTable};
pub use team_config::TeamConfig;
