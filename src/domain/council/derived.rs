//! Outputs derived on demand from a [`CouncilOutput`](super::CouncilOutput).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse time bucket attached to a risk or opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "short-term")]
    ShortTerm,
    #[serde(rename = "medium-term")]
    MediumTerm,
    #[serde(rename = "long-term")]
    LongTerm,
}

impl Horizon {
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::ShortTerm => "short-term",
            Horizon::MediumTerm => "medium-term",
            Horizon::LongTerm => "long-term",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single risk or opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskOpportunity {
    pub label: String,
    pub description: String,
    pub horizon: Horizon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RisksAndOpportunitiesOutput {
    pub risks: Vec<RiskOpportunity>,
    pub opportunities: Vec<RiskOpportunity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub text: String,
    pub dimensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_offs: Option<String>,
}

/// Concrete changes that would improve the recommended option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementOutput {
    pub intro: String,
    pub suggestions: Vec<ImprovementSuggestion>,
}

/// Plain-language restatement for non-technical stakeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleExplanationOutput {
    pub explanation: String,
    pub role_based_summary: String,
}

/// Upper bound on coach suggestions kept from one reply.
pub const MAX_COACH_SUGGESTIONS: usize = 3;

/// What a draft scenario is missing, as suggested by the coach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachOutput {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl CoachOutput {
    /// Drops anything beyond [`MAX_COACH_SUGGESTIONS`].
    pub fn into_suggestions(mut self) -> Vec<String> {
        self.suggestions.truncate(MAX_COACH_SUGGESTIONS);
        self.suggestions
    }
}
