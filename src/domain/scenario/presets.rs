//! Built-in example scenarios.

use serde::Serialize;

use super::ScenarioType;

/// A ready-made scenario a user can load instead of typing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetScenario {
    pub title: &'static str,
    pub scenario_type: ScenarioType,
    pub scenario: &'static str,
    pub featured: bool,
}

/// The preset catalogue, in display order.
pub const PRESET_SCENARIOS: [PresetScenario; 3] = [
    PresetScenario {
        title: "Cool City District Retrofit",
        scenario_type: ScenarioType::Cities,
        scenario: "Proposed redevelopment of a 50-acre industrial site into a car-free \
                   residential district with 40% green cover, local energy production, and \
                   rainwater harvesting in a high-density urban core. Budget is moderate but \
                   timeline is aggressive (5 years).",
        featured: true,
    },
    PresetScenario {
        title: "Net Zero Campus Energy",
        scenario_type: ScenarioType::Energy,
        scenario: "Transitioning a university campus to 100% renewable energy by 2030 through \
                   rooftop solar, ground-source heat pumps, and a centralized battery storage \
                   system. Needs to maintain service for 20,000 students.",
        featured: false,
    },
    PresetScenario {
        title: "Coastal Defense Strategy",
        scenario_type: ScenarioType::Water,
        scenario: "A municipality debating between building a sea wall (engineered) or \
                   restoring 200 hectares of mangroves and dunes (nature-based) to protect \
                   against rising sea levels and storm surges. Costs and maintenance differ \
                   significantly.",
        featured: false,
    },
];

/// Looks up a preset by its position in the catalogue.
pub fn preset(index: usize) -> Option<&'static PresetScenario> {
    PRESET_SCENARIOS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_preset_is_featured() {
        assert_eq!(PRESET_SCENARIOS.iter().filter(|p| p.featured).count(), 1);
        assert!(PRESET_SCENARIOS[0].featured);
    }

    #[test]
    fn lookup_by_index() {
        assert_eq!(preset(1).unwrap().scenario_type, ScenarioType::Energy);
        assert!(preset(3).is_none());
    }

    #[test]
    fn line_continuations_keep_single_spaces() {
        for p in &PRESET_SCENARIOS {
            assert!(!p.scenario.contains("  "), "double space in {}", p.title);
        }
    }
}
