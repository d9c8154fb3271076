//! HTTP handlers for the council catalogues.

use axum::Json;

use super::dto::{PresetResponse, ScenarioTypeResponse};
use crate::domain::council::{PersonaDefinition, PERSONA_DEFINITIONS};
use crate::domain::scenario::{ScenarioType, PRESET_SCENARIOS};

/// GET /api/council/personas
pub async fn list_personas() -> Json<&'static [PersonaDefinition]> {
    Json(&PERSONA_DEFINITIONS)
}

/// GET /api/council/presets
pub async fn list_presets() -> Json<Vec<PresetResponse>> {
    Json(
        PRESET_SCENARIOS
            .iter()
            .enumerate()
            .map(|(index, preset)| PresetResponse::new(index, preset))
            .collect(),
    )
}

/// GET /api/council/scenario-types
pub async fn list_scenario_types() -> Json<Vec<ScenarioTypeResponse>> {
    Json(ScenarioType::ALL.into_iter().map(Into::into).collect())
}
