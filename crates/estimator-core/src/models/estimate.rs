//! Engine output: the computed estimate and its three options.

use serde::{Deserialize, Serialize};

use super::QuoteOptions;

/// Each buffer factor individually, for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferBreakdown {
    pub build_type: f64,
    pub clarity: f64,
    pub documentation: f64,
    pub integration: f64,
    pub ai_base: f64,
    pub ai_novelty: f64,
    pub compliance: f64,
    /// Product of all factors, rounded to 2 decimals.
    pub total: f64,
}

impl BufferBreakdown {
    /// Unrounded product of the seven factors.
    pub fn product(&self) -> f64 {
        self.build_type
            * self.clarity
            * self.documentation
            * self.integration
            * self.ai_base
            * self.ai_novelty
            * self.compliance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedEstimate {
    /// Raw function points.
    #[serde(rename = "totalFP")]
    pub total_fp: f64,
    /// `total_fp × buffers.total`.
    #[serde(rename = "adjustedFP")]
    pub adjusted_fp: f64,
    pub dev_weeks: u32,
    pub buffers: BufferBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub computed: ComputedEstimate,
    pub options: QuoteOptions,
}
