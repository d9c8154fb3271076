//! HTTP DTOs for the council catalogues.

use serde::Serialize;

use crate::domain::scenario::{PresetScenario, ScenarioType};

/// A preset with the index used to apply it.
#[derive(Debug, Clone, Serialize)]
pub struct PresetResponse {
    pub index: usize,
    pub title: &'static str,
    pub scenario_type: ScenarioType,
    pub scenario: &'static str,
    pub featured: bool,
}

impl PresetResponse {
    pub fn new(index: usize, preset: &PresetScenario) -> Self {
        Self {
            index,
            title: preset.title,
            scenario_type: preset.scenario_type,
            scenario: preset.scenario,
            featured: preset.featured,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioTypeResponse {
    pub value: ScenarioType,
    pub label: &'static str,
}

impl From<ScenarioType> for ScenarioTypeResponse {
    fn from(value: ScenarioType) -> Self {
        Self {
            value,
            label: value.label(),
        }
    }
}
