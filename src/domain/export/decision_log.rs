//! Plain-text decision log.

use crate::domain::council::{CouncilOutput, RiskOpportunity, RisksAndOpportunitiesOutput};

/// Renders the decision log for a debate and, when available, its risks.
///
/// Pure: identical inputs always give byte-identical text.
pub fn decision_log(council: &CouncilOutput, risks: Option<&RisksAndOpportunitiesOutput>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("SUSTAINABILITY COUNCIL DECISION LOG".to_string());
    lines.push(format!("SCENARIO: {}", council.scenario_summary));
    lines.push("ASSUMPTIONS:".to_string());
    lines.push(bullets(council.assumptions.iter().map(String::as_str)));
    lines.push(String::new());

    lines.push("CSR ASSESSMENT:".to_string());
    for (dimension, metric) in council.csr_assessment.iter() {
        lines.push(format!(
            "• {}: {} - {}",
            dimension.label(),
            metric.rating,
            metric.key_points.join(", ")
        ));
    }
    lines.push(String::new());

    lines.push("OPTIONS:".to_string());
    lines.push(
        council
            .options()
            .iter()
            .map(|o| format!("{}: {}", o.option_name, o.description))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    lines.push(String::new());

    let recommended = council.recommended();
    lines.push(format!("RECOMMENDED: {}", recommended.name));
    lines.push(format!("REASONING: {}", recommended.reasoning));
    lines.push(String::new());

    lines.push("TOP RISKS:".to_string());
    lines.push(entries_or_na(risks.map(|r| r.risks.as_slice())));
    lines.push(String::new());

    lines.push("TOP OPPORTUNITIES:".to_string());
    lines.push(entries_or_na(risks.map(|r| r.opportunities.as_slice())));

    lines.join("\n").trim().to_string()
}

fn bullets<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|item| format!("• {}", item)).collect::<Vec<_>>().join("\n")
}

fn entries_or_na(entries: Option<&[RiskOpportunity]>) -> String {
    match entries {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(|e| format!("• {} [{}]: {}", e.label, e.horizon, e.description))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::council::fixtures;

    const EXPECTED_WITH_RISKS: &str = "\
SUSTAINABILITY COUNCIL DECISION LOG
SCENARIO: Choose between a sea wall and mangrove restoration for coastal defense.
ASSUMPTIONS:
• Sea level rises 0.5m by 2100
• Budget is fixed for ten years

CSR ASSESSMENT:
• Environmental: High - Carbon sequestration, Habitat gain
• Social: Medium - Local jobs
• Governance/Economic: Low - Uncertain upfront cost

OPTIONS:
Sea wall: Engineered concrete barrier.
Nature-based defense: Restore 200 ha of mangroves and dunes.

RECOMMENDED: Nature-based defense
REASONING: Balances resilience with co-benefits.

TOP RISKS:
• Establishment failure [short-term]: Saplings may not survive early storms.
• Funding gap [medium-term]: Grants may not cover monitoring.

TOP OPPORTUNITIES:
• Blue carbon credits [long-term]: Mangroves can generate credits.";

    #[test]
    fn renders_full_log() {
        let council = fixtures::council();
        let risks = fixtures::risks();
        assert_eq!(decision_log(&council, Some(&risks)), EXPECTED_WITH_RISKS);
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let council = fixtures::council();
        let risks = fixtures::risks();
        let first = decision_log(&council, Some(&risks));
        for _ in 0..5 {
            assert_eq!(decision_log(&council, Some(&risks)).as_bytes(), first.as_bytes());
        }
    }

    #[test]
    fn missing_risks_render_as_na() {
        let log = decision_log(&fixtures::council(), None);
        assert!(log.contains("TOP RISKS:\nN/A\n"));
        assert!(log.ends_with("TOP OPPORTUNITIES:\nN/A"));
    }

    #[test]
    fn empty_risk_lists_render_as_na() {
        let empty = RisksAndOpportunitiesOutput {
            risks: vec![],
            opportunities: vec![],
        };
        let log = decision_log(&fixtures::council(), Some(&empty));
        assert!(log.contains("TOP RISKS:\nN/A\n"));
        assert!(log.ends_with("TOP OPPORTUNITIES:\nN/A"));
    }
}
