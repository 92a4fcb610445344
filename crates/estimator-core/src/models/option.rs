//! Quote options A/B/C: team, timeline, dev cost and cloud cost per delivery plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CloudCostBreakdown;
use crate::errors::EstimationError;

/// Delivery plan identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionKey {
    /// Cost-optimized.
    A,
    /// Balanced.
    B,
    /// Fast-track.
    C,
}

impl OptionKey {
    /// All keys, cheapest first.
    pub const ALL: [OptionKey; 3] = [Self::A, Self::B, Self::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(EstimationError::InvalidOption {
                key: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamRole {
    #[serde(rename = "Fullstack Dev")]
    FullstackDev,
    #[serde(rename = "AI Engineer")]
    AiEngineer,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Mobile Dev")]
    MobileDev,
    #[serde(rename = "QA Engineer")]
    QaEngineer,
}

impl TeamRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullstackDev => "Fullstack Dev",
            Self::AiEngineer => "AI Engineer",
            Self::DevOpsEngineer => "DevOps Engineer",
            Self::MobileDev => "Mobile Dev",
            Self::QaEngineer => "QA Engineer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub role: TeamRole,
    pub count: u32,
}

impl TeamMember {
    pub fn new(role: TeamRole, count: u32) -> Self {
        Self { role, count }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOption {
    pub label: String,
    pub team: Vec<TeamMember>,
    pub weeks: u32,
    pub cost_min: f64,
    pub cost_max: f64,
    pub cloud_monthly: u64,
    pub cloud_yearly: u64,
    pub cloud_breakdown: CloudCostBreakdown,
    pub cloud_savings: u64,
    pub recommended: bool,
    pub is_selected: bool,
}

impl QuoteOption {
    /// Total headcount across all team entries.
    pub fn headcount(&self) -> u32 {
        self.team.iter().map(|m| m.count).sum()
    }
}

/// The three options of one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteOptions {
    #[serde(rename = "A")]
    pub a: QuoteOption,
    #[serde(rename = "B")]
    pub b: QuoteOption,
    #[serde(rename = "C")]
    pub c: QuoteOption,
}

impl QuoteOptions {
    pub fn get(&self, key: OptionKey) -> &QuoteOption {
        match key {
            OptionKey::A => &self.a,
            OptionKey::B => &self.b,
            OptionKey::C => &self.c,
        }
    }

    pub fn get_mut(&mut self, key: OptionKey) -> &mut QuoteOption {
        match key {
            OptionKey::A => &mut self.a,
            OptionKey::B => &mut self.b,
            OptionKey::C => &mut self.c,
        }
    }

    /// Options in A, B, C order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &QuoteOption)> {
        OptionKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Key of the recommended option, if one has been marked.
    pub fn recommended_key(&self) -> Option<OptionKey> {
        self.iter().find(|(_, o)| o.recommended).map(|(k, _)| k)
    }

    /// Mark `key` as recommended and clear the flag everywhere else.
    pub fn set_recommended(&mut self, key: OptionKey) {
        for k in OptionKey::ALL {
            self.get_mut(k).recommended = k == key;
        }
    }

    /// Record that the client picked `key` for a detailed quote.
    ///
    /// One-way: selection is never cleared, and selecting again is a no-op.
    pub fn select(&mut self, key: OptionKey) -> &QuoteOption {
        let option = self.get_mut(key);
        option.is_selected = true;
        option
    }

    /// [`select`](Self::select) by the key as received from a client.
    pub fn select_str(&mut self, key: &str) -> Result<&QuoteOption, EstimationError> {
        let key: OptionKey = key.parse()?;
        Ok(self.select(key))
    }

    /// Keys of every option the client has selected.
    pub fn selected(&self) -> Vec<OptionKey> {
        self.iter()
            .filter(|(_, o)| o.is_selected)
            .map(|(k, _)| k)
            .collect()
    }
}
