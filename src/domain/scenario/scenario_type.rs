//! Scenario category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Category a sustainability scenario belongs to.
///
/// Serialized by its display label, which is also what the prompt sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioType {
    #[serde(rename = "Energy & Renewables")]
    Energy,
    #[serde(rename = "Water & Drought")]
    Water,
    #[serde(rename = "Cities & Transport")]
    Cities,
    #[serde(rename = "Buildings & Cooling")]
    Buildings,
    #[serde(rename = "Waste & Materials")]
    Waste,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl ScenarioType {
    /// All categories in display order.
    pub const ALL: [ScenarioType; 6] = [
        ScenarioType::Energy,
        ScenarioType::Water,
        ScenarioType::Cities,
        ScenarioType::Buildings,
        ScenarioType::Waste,
        ScenarioType::Other,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioType::Energy => "Energy & Renewables",
            ScenarioType::Water => "Water & Drought",
            ScenarioType::Cities => "Cities & Transport",
            ScenarioType::Buildings => "Buildings & Cooling",
            ScenarioType::Waste => "Waste & Materials",
            ScenarioType::Other => "Other",
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioType {
    type Err = ValidationError;

    /// Accepts either the display label or the short name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ScenarioType::ALL
            .into_iter()
            .find(|t| {
                t.label().eq_ignore_ascii_case(needle)
                    || format!("{:?}", t).eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                ValidationError::invalid_format("scenario_type", format!("unknown type '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_other() {
        assert_eq!(ScenarioType::default(), ScenarioType::Other);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&ScenarioType::Water).unwrap();
        assert_eq!(json, "\"Water & Drought\"");
    }

    #[test]
    fn deserializes_from_label() {
        let t: ScenarioType = serde_json::from_str("\"Cities & Transport\"").unwrap();
        assert_eq!(t, ScenarioType::Cities);
    }

    #[test]
    fn parses_label_or_short_name() {
        assert_eq!("energy".parse::<ScenarioType>().unwrap(), ScenarioType::Energy);
        assert_eq!(
            "Buildings & Cooling".parse::<ScenarioType>().unwrap(),
            ScenarioType::Buildings
        );
        assert!("Oceans".parse::<ScenarioType>().is_err());
    }
}
