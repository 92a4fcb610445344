//! The requirements record a client submits for estimation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MOBILE_KEYWORDS;

/// What the client wants built. Serialized with the exact labels the intake form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "Mobile App (iOS)")]
    MobileIos,
    #[serde(rename = "Mobile App (Android)")]
    MobileAndroid,
    #[serde(rename = "Mobile App (Cross-platform)")]
    MobileCrossPlatform,
    #[serde(rename = "Website")]
    Website,
    #[serde(rename = "Admin Panel")]
    AdminPanel,
    #[serde(rename = "APIs")]
    Apis,
    #[serde(rename = "AI/ML Features")]
    AiMlFeatures,
    #[serde(rename = "Chatbot")]
    Chatbot,
    #[serde(rename = "Cloud/DevOps")]
    CloudDevOps,
    #[serde(rename = "UI/UX Design Only")]
    UiUxDesignOnly,
}

impl BuildType {
    pub const ALL: [BuildType; 11] = [
        Self::WebApplication,
        Self::MobileIos,
        Self::MobileAndroid,
        Self::MobileCrossPlatform,
        Self::Website,
        Self::AdminPanel,
        Self::Apis,
        Self::AiMlFeatures,
        Self::Chatbot,
        Self::CloudDevOps,
        Self::UiUxDesignOnly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WebApplication => "Web Application",
            Self::MobileIos => "Mobile App (iOS)",
            Self::MobileAndroid => "Mobile App (Android)",
            Self::MobileCrossPlatform => "Mobile App (Cross-platform)",
            Self::Website => "Website",
            Self::AdminPanel => "Admin Panel",
            Self::Apis => "APIs",
            Self::AiMlFeatures => "AI/ML Features",
            Self::Chatbot => "Chatbot",
            Self::CloudDevOps => "Cloud/DevOps",
            Self::UiUxDesignOnly => "UI/UX Design Only",
        }
    }

    /// A build type is mobile when its label names a mobile platform.
    pub fn is_mobile(self) -> bool {
        let label = self.label();
        MOBILE_KEYWORDS.iter().any(|k| label.contains(k))
    }
}

/// Feature implementation thoroughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureDepth {
    Basic,
    #[default]
    Standard,
    Advanced,
}

/// Traffic / user-volume tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleBand {
    #[default]
    #[serde(rename = "10k-100k")]
    Small,
    #[serde(rename = "100k-1m")]
    Medium,
    #[serde(rename = ">1m")]
    Large,
}

impl ScaleBand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "10k-100k",
            Self::Medium => "100k-1m",
            Self::Large => ">1m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceLevel {
    #[default]
    None,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiNovelty {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    Fixed,
    Flexible,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineType {
    Fixed,
    #[default]
    Flexible,
    QualityFirst,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    #[serde(rename = "type")]
    pub timeline_type: TimelineType,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Cost,
    #[default]
    Balanced,
    Speed,
    Quality,
}

/// Stack preferences. Carried through for the proposal, not priced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechPrefs {
    pub frontend: String,
    pub backend: String,
    pub db: String,
    pub cloud: String,
}

/// One selected feature and how deep it should go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    pub key: String,
    #[serde(default)]
    pub depth: FeatureDepth,
}

impl FeatureSelection {
    pub fn new(key: impl Into<String>, depth: FeatureDepth) -> Self {
        Self {
            key: key.into(),
            depth,
        }
    }
}

/// The engine's sole input besides the feature library.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequirementsInput {
    pub goals: String,
    pub build_types: Vec<BuildType>,
    pub artifacts: Vec<String>,
    pub features: Vec<FeatureSelection>,
    pub scale_band: ScaleBand,
    pub a11y: bool,
    pub i18n: bool,
    pub perf: bool,
    pub compliance: ComplianceLevel,
    pub tech_prefs: TechPrefs,
    pub budget: Budget,
    pub timeline: Timeline,
    pub priority: Priority,
    pub support_months: u32,
    pub integrations: Vec<String>,
    pub like_existing_product: bool,
    pub detailed_docs: bool,
    #[serde(rename = "includesAI")]
    pub includes_ai: bool,
    pub ai_novelty: AiNovelty,
}

impl RequirementsInput {
    /// True if any selected build type targets a mobile platform.
    pub fn has_mobile(&self) -> bool {
        self.build_types.iter().any(|b| b.is_mobile())
    }
}
