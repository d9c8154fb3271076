//! Scenario module - what the council is asked to assess.

mod presets;
mod scenario_type;

pub use presets::{preset, PresetScenario, PRESET_SCENARIOS};
pub use scenario_type::ScenarioType;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{sanitize_input, ValidationError};

/// A sanitized, non-empty scenario ready to be sent to the council.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    text: String,
    scenario_type: ScenarioType,
}

impl Scenario {
    /// Sanitizes `text` and rejects it when nothing is left.
    pub fn new(
        text: &str,
        scenario_type: ScenarioType,
        max_length: usize,
    ) -> Result<Self, ValidationError> {
        let text = sanitize_input(text, max_length);
        if text.is_empty() {
            return Err(ValidationError::empty_field("scenario"));
        }
        Ok(Self {
            text,
            scenario_type,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scenario_type(&self) -> ScenarioType {
        self.scenario_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_is_sanitized() {
        let s = Scenario::new("  <i>Green</i> roofs ", ScenarioType::Buildings, 100).unwrap();
        assert_eq!(s.text(), "Green roofs");
        assert_eq!(s.scenario_type(), ScenarioType::Buildings);
    }

    #[test]
    fn blank_scenario_is_rejected() {
        let err = Scenario::new("   <br/>  ", ScenarioType::Other, 100).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("scenario"));
    }
}
