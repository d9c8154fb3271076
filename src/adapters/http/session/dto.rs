//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::council::{
    CouncilOutput, ImprovementOutput, RisksAndOpportunitiesOutput, SimpleExplanationOutput,
};
use crate::domain::scenario::ScenarioType;
use crate::domain::session::{CouncilSession, ToolFlags};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to replace the draft scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScenarioRequest {
    pub scenario: String,
    /// Display label or short name; `Other` when omitted.
    #[serde(default)]
    pub scenario_type: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full session snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub scenario: String,
    pub scenario_type: ScenarioType,
    pub council: Option<Arc<CouncilOutput>>,
    pub risks: Option<RisksAndOpportunitiesOutput>,
    pub improvements: Option<ImprovementOutput>,
    pub explanation: Option<SimpleExplanationOutput>,
    pub report: Option<String>,
    pub coach_suggestions: Vec<String>,
    pub loading: ToolFlags,
    pub finishing: bool,
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CouncilSession> for SessionResponse {
    fn from(session: CouncilSession) -> Self {
        Self {
            id: session.id().to_string(),
            scenario: session.scenario().to_string(),
            scenario_type: session.scenario_type(),
            council: session.council().cloned(),
            risks: session.risks().cloned(),
            improvements: session.improvements().cloned(),
            explanation: session.explanation().cloned(),
            report: session.report().map(str::to_string),
            coach_suggestions: session.coach_suggestions().to_vec(),
            loading: session.loading(),
            finishing: session.is_finishing(),
            error: session.error().map(str::to_string),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
