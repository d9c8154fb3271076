//! Council personas.

use serde::{Deserialize, Serialize};

/// One persona's contribution to a debate, as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub title: String,
    pub primary_concerns: Vec<String>,
    pub statement: String,
}

/// A fixed seat on the council.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub care: &'static str,
}

/// The seven seats every debate is expected to fill.
pub const PERSONA_DEFINITIONS: [PersonaDefinition; 7] = [
    PersonaDefinition {
        id: "climate_scientist",
        title: "Climate Scientist",
        care: "Long-term climate impact and physical risks.",
    },
    PersonaDefinition {
        id: "carbon_analyst",
        title: "Carbon Footprint Analyst",
        care: "Direct and indirect greenhouse gas emissions metrics.",
    },
    PersonaDefinition {
        id: "biodiversity_ecologist",
        title: "Biodiversity Ecologist",
        care: "Ecosystem health, habitat preservation, and local flora/fauna.",
    },
    PersonaDefinition {
        id: "community_rep",
        title: "Community Representative",
        care: "Local jobs, health, equity, and public acceptance.",
    },
    PersonaDefinition {
        id: "urban_planner",
        title: "Urban Planner",
        care: "Infrastructure resilience, land use efficiency, and zoning.",
    },
    PersonaDefinition {
        id: "csr_lead",
        title: "Business Strategy / CSR Lead",
        care: "ESG brand value, stakeholder reporting, and market alignment.",
    },
    PersonaDefinition {
        id: "finance_officer",
        title: "Public Finance / Budget Officer",
        care: "Capital efficiency, ROI, and long-term economic viability.",
    },
];

/// Number of seats on the council.
pub const COUNCIL_SIZE: usize = PERSONA_DEFINITIONS.len();

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn council_has_seven_distinct_seats() {
        let ids: HashSet<_> = PERSONA_DEFINITIONS.iter().map(|p| p.id).collect();
        assert_eq!(COUNCIL_SIZE, 7);
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn persona_deserializes_from_model_shape() {
        let json = r#"{
            "id": "community_rep",
            "title": "Community Representative",
            "primary_concerns": ["jobs", "equity"],
            "statement": "Local hiring must be guaranteed."
        }"#;
        let persona: Persona = serde_json::from_str(json).unwrap();
        assert_eq!(persona.primary_concerns, vec!["jobs", "equity"]);
    }
}
