//! CSR assessment across the three fixed dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse performance rating for one CSR dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CsrRating {
    High,
    Medium,
    Low,
}

impl CsrRating {
    pub fn label(&self) -> &'static str {
        match self {
            CsrRating::High => "High",
            CsrRating::Medium => "Medium",
            CsrRating::Low => "Low",
        }
    }
}

impl fmt::Display for CsrRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rating plus supporting points for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrMetric {
    pub rating: CsrRating,
    pub key_points: Vec<String>,
}

/// The three CSR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsrDimension {
    Environmental,
    Social,
    GovernanceEconomic,
}

impl CsrDimension {
    pub const ALL: [CsrDimension; 3] = [
        CsrDimension::Environmental,
        CsrDimension::Social,
        CsrDimension::GovernanceEconomic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CsrDimension::Environmental => "Environmental",
            CsrDimension::Social => "Social",
            CsrDimension::GovernanceEconomic => "Governance/Economic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrAssessment {
    pub environmental: CsrMetric,
    pub social: CsrMetric,
    pub governance_economic: CsrMetric,
}

impl CsrAssessment {
    pub fn metric(&self, dimension: CsrDimension) -> &CsrMetric {
        match dimension {
            CsrDimension::Environmental => &self.environmental,
            CsrDimension::Social => &self.social,
            CsrDimension::GovernanceEconomic => &self.governance_economic,
        }
    }

    /// Iterates dimensions in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (CsrDimension, &CsrMetric)> {
        CsrDimension::ALL.into_iter().map(move |d| (d, self.metric(d)))
    }
}
