//! The structured result of one council debate.

use serde::{Deserialize, Serialize};

use super::{CsrAssessment, Persona};

/// Per-dimension implications of one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrImplications {
    pub environmental: String,
    pub social: String,
    pub governance_economic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSummary {
    pub option_name: String,
    pub description: String,
    pub csr_implications: CsrImplications,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedOption {
    pub name: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsAndRecommendation {
    pub option_summaries: Vec<OptionSummary>,
    pub recommended_option: RecommendedOption,
}

/// Multi-persona assessment of a scenario.
///
/// Produced once per debate and never modified afterwards; every
/// downstream tool reads it through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilOutput {
    pub scenario_summary: String,
    pub assumptions: Vec<String>,
    pub personas: Vec<Persona>,
    pub csr_assessment: CsrAssessment,
    pub options_and_recommendation: OptionsAndRecommendation,
}

impl CouncilOutput {
    pub fn recommended(&self) -> &RecommendedOption {
        &self.options_and_recommendation.recommended_option
    }

    pub fn options(&self) -> &[OptionSummary] {
        &self.options_and_recommendation.option_summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::council::fixtures;

    #[test]
    fn parses_full_model_reply() {
        let council: CouncilOutput = serde_json::from_str(fixtures::COUNCIL_JSON).unwrap();
        assert_eq!(council.personas.len(), 7);
        assert_eq!(council.recommended().name, "Nature-based defense");
        assert_eq!(council.options().len(), 2);
    }

    #[test]
    fn missing_section_fails_to_parse() {
        let result = serde_json::from_str::<CouncilOutput>(r#"{"scenario_summary": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_object_fails_to_parse() {
        assert!(serde_json::from_str::<CouncilOutput>("{}").is_err());
    }
}
