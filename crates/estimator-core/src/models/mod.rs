//! Data model: requirement inputs, feature library entries, and estimate outputs.

pub mod cloud;
pub mod estimate;
pub mod feature;
pub mod option;
pub mod requirements;

pub use cloud::CloudCostBreakdown;
pub use estimate::{BufferBreakdown, ComputedEstimate, Estimate};
pub use feature::FeatureLibraryEntry;
pub use option::{OptionKey, QuoteOption, QuoteOptions, TeamMember, TeamRole};
pub use requirements::{
    AiNovelty, Budget, BudgetType, BuildType, ComplianceLevel, FeatureDepth, FeatureSelection,
    Priority, RequirementsInput, ScaleBand, TechPrefs, Timeline, TimelineType,
};
