//! Buffer calculator configuration.

use serde::{Deserialize, Serialize};

use crate::models::{AiNovelty, ComplianceLevel};

/// Integration counts up to `max` (inclusive) get `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationTier {
    pub max: usize,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoveltyMultipliers {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for NoveltyMultipliers {
    fn default() -> Self {
        Self {
            low: 1.1,
            medium: 1.25,
            high: 1.4,
        }
    }
}

impl NoveltyMultipliers {
    pub fn get(&self, novelty: AiNovelty) -> f64 {
        match novelty {
            AiNovelty::Low => self.low,
            AiNovelty::Medium => self.medium,
            AiNovelty::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceMultipliers {
    pub none: f64,
    pub moderate: f64,
    pub high: f64,
}

impl Default for ComplianceMultipliers {
    fn default() -> Self {
        Self {
            none: 1.0,
            moderate: 1.1,
            high: 1.25,
        }
    }
}

impl ComplianceMultipliers {
    pub fn get(&self, level: ComplianceLevel) -> f64 {
        match level {
            ComplianceLevel::None => self.none,
            ComplianceLevel::Moderate => self.moderate,
            ComplianceLevel::High => self.high,
        }
    }
}

/// Risk buffer factors. Each field is one independent dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Added per build type beyond the first.
    pub build_type_step: f64,
    /// Clarity factor when the project resembles an existing product.
    pub clarity_known: f64,
    /// Clarity factor otherwise.
    pub clarity_unknown: f64,
    /// Documentation factor when detailed docs are provided.
    pub detailed_docs: f64,
    /// Ascending integration tiers; the first tier whose `max` covers the count wins.
    pub integration_tiers: Vec<IntegrationTier>,
    /// Integration factor beyond the last tier.
    pub integration_overflow: f64,
    /// AI base factor when AI is included.
    pub ai_base: f64,
    pub ai_novelty: NoveltyMultipliers,
    pub compliance: ComplianceMultipliers,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            build_type_step: 0.15,
            clarity_known: 0.95,
            clarity_unknown: 1.05,
            detailed_docs: 1.1,
            integration_tiers: vec![
                IntegrationTier { max: 1, multiplier: 1.0 },
                IntegrationTier { max: 3, multiplier: 1.1 },
                IntegrationTier { max: 6, multiplier: 1.2 },
            ],
            integration_overflow: 1.3,
            ai_base: 1.15,
            ai_novelty: NoveltyMultipliers::default(),
            compliance: ComplianceMultipliers::default(),
        }
    }
}

impl BufferConfig {
    /// Integration factor for `count` integrations.
    pub fn integration_multiplier(&self, count: usize) -> f64 {
        self.integration_tiers
            .iter()
            .find(|tier| count <= tier.max)
            .map(|tier| tier.multiplier)
            .unwrap_or(self.integration_overflow)
    }
}
