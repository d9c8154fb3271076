//! Six-slide presentation outline.

use crate::domain::council::{CouncilOutput, RisksAndOpportunitiesOutput};

const TITLE_PREVIEW_CHARS: usize = 30;

pub fn slide_outline(council: &CouncilOutput, risks: Option<&RisksAndOpportunitiesOutput>) -> String {
    let preview: String = council.scenario_summary.chars().take(TITLE_PREVIEW_CHARS).collect();

    let perspectives = council
        .personas
        .iter()
        .take(3)
        .map(|p| p.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let assessment = &council.csr_assessment;

    let options = council
        .options()
        .iter()
        .map(|o| o.option_name.as_str())
        .collect::<Vec<_>>()
        .join(" vs ");

    let top_risks = match risks {
        Some(r) if !r.risks.is_empty() => r
            .risks
            .iter()
            .take(2)
            .map(|r| r.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "N/A".to_string(),
    };

    [
        "SLIDE OUTLINE".to_string(),
        format!("Slide 1: {}... | Scenario & key assumptions", preview),
        format!("Slide 2: Stakeholder Perspectives | {}", perspectives),
        format!(
            "Slide 3: CSR Assessment | E:{} S:{} G/E:{}",
            assessment.environmental.rating,
            assessment.social.rating,
            assessment.governance_economic.rating
        ),
        format!("Slide 4: Options Analysis | {}", options),
        format!("Slide 5: Recommendation | Why {}", council.recommended().name),
        format!("Slide 6: Risks & Next Steps | {}", top_risks),
    ]
    .join("\n")
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::council::fixtures;

    #[test]
    fn renders_six_slides() {
        let outline = slide_outline(&fixtures::council(), Some(&fixtures::risks()));
        let expected = "\
SLIDE OUTLINE
Slide 1: Choose between a sea wall and ... | Scenario & key assumptions
Slide 2: Stakeholder Perspectives | Climate Scientist, Carbon Footprint Analyst, Biodiversity Ecologist
Slide 3: CSR Assessment | E:High S:Medium G/E:Low
Slide 4: Options Analysis | Sea wall vs Nature-based defense
Slide 5: Recommendation | Why Nature-based defense
Slide 6: Risks & Next Steps | Establishment failure, Funding gap";
        assert_eq!(outline, expected);
    }

    #[test]
    fn missing_risks_fall_back_to_na() {
        let outline = slide_outline(&fixtures::council(), None);
        assert!(outline.ends_with("Slide 6: Risks & Next Steps | N/A"));
    }
}
