//! Council module - the data contracts exchanged with the generative model.
//!
//! A debate yields a [`CouncilOutput`]; every other tool derives its own
//! output from that one immutable value.

mod assessment;
mod derived;
mod output;
mod persona;

pub use assessment::{CsrAssessment, CsrDimension, CsrMetric, CsrRating};
pub use derived::{
    CoachOutput, Horizon, ImprovementOutput, ImprovementSuggestion, RiskOpportunity,
    RisksAndOpportunitiesOutput, SimpleExplanationOutput, MAX_COACH_SUGGESTIONS,
};
pub use output::{
    CouncilOutput, CsrImplications, OptionSummary, OptionsAndRecommendation, RecommendedOption,
};
pub use persona::{Persona, PersonaDefinition, COUNCIL_SIZE, PERSONA_DEFINITIONS};

#[cfg(test)]
pub(crate) mod fixtures {
    //! Canned model replies shared by tests across the crate.

    use super::{CouncilOutput, RisksAndOpportunitiesOutput};

    pub const COUNCIL_JSON: &str = r#"{
        "scenario_summary": "Choose between a sea wall and mangrove restoration for coastal defense.",
        "assumptions": ["Sea level rises 0.5m by 2100", "Budget is fixed for ten years"],
        "personas": [
            {"id": "climate_scientist", "title": "Climate Scientist", "primary_concerns": ["resilience"], "statement": "Plan for worst-case surge."},
            {"id": "carbon_analyst", "title": "Carbon Footprint Analyst", "primary_concerns": ["emissions"], "statement": "Concrete is carbon heavy."},
            {"id": "biodiversity_ecologist", "title": "Biodiversity Ecologist", "primary_concerns": ["habitat"], "statement": "Mangroves restore nurseries."},
            {"id": "community_rep", "title": "Community Representative", "primary_concerns": ["jobs"], "statement": "Restoration creates local work."},
            {"id": "urban_planner", "title": "Urban Planner", "primary_concerns": ["land use"], "statement": "Walls free up land behind them."},
            {"id": "csr_lead", "title": "Business Strategy / CSR Lead", "primary_concerns": ["reporting"], "statement": "Nature-based wins on ESG."},
            {"id": "finance_officer", "title": "Public Finance / Budget Officer", "primary_concerns": ["cost"], "statement": "Maintenance costs favour mangroves."}
        ],
        "csr_assessment": {
            "environmental": {"rating": "High", "key_points": ["Carbon sequestration", "Habitat gain"]},
            "social": {"rating": "Medium", "key_points": ["Local jobs"]},
            "governance_economic": {"rating": "Low", "key_points": ["Uncertain upfront cost"]}
        },
        "options_and_recommendation": {
            "option_summaries": [
                {"option_name": "Sea wall", "description": "Engineered concrete barrier.",
                 "csr_implications": {"environmental": "High embodied carbon", "social": "Blocks beach access", "governance_economic": "Predictable cost"}},
                {"option_name": "Nature-based defense", "description": "Restore 200 ha of mangroves and dunes.",
                 "csr_implications": {"environmental": "Sequesters carbon", "social": "Creates jobs", "governance_economic": "Lower maintenance"}}
            ],
            "recommended_option": {"name": "Nature-based defense", "reasoning": "Balances resilience with co-benefits."}
        }
    }"#;

    pub const RISKS_JSON: &str = r#"{
        "risks": [
            {"label": "Establishment failure", "description": "Saplings may not survive early storms.", "horizon": "short-term"},
            {"label": "Funding gap", "description": "Grants may not cover monitoring.", "horizon": "medium-term"}
        ],
        "opportunities": [
            {"label": "Blue carbon credits", "description": "Mangroves can generate credits.", "horizon": "long-term"}
        ]
    }"#;

    pub fn council() -> CouncilOutput {
        serde_json::from_str(COUNCIL_JSON).expect("fixture parses")
    }

    pub fn risks() -> RisksAndOpportunitiesOutput {
        serde_json::from_str(RISKS_JSON).expect("fixture parses")
    }
}
