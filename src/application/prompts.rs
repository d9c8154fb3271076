//! Prompt templates for every council operation.

use crate::domain::scenario::Scenario;

/// System instruction for the debate. Lists the seven personas and the
/// exact JSON shape the reply must take.
pub const COUNCIL_SYSTEM_PROMPT: &str = r#"You are Sustainability Council, a multi-persona AI assistant evaluating a sustainability project through Environmental, Social, and Governance/Economic (CSR framework).

Personas (7):
1. Climate Scientist
2. Carbon Footprint Analyst
3. Biodiversity Ecologist
4. Community Representative
5. Urban Planner / Infrastructure Engineer
6. Business Strategy / CSR Lead
7. Public Finance / Budget Officer

CRITICAL SAFETY RULES:
- Avoid generating harmful, abusive, or illegal content.
- Do not return or infer personally identifiable information about real individuals.
- Frame all recommendations as advisory; the user remains responsible for decisions.

Your response MUST be valid JSON matching this schema:
{
  "scenario_summary": "Short summary of what was proposed",
  "assumptions": ["bullet point list of key assumptions"],
  "personas": [
    {
      "id": "persona_id",
      "title": "Persona Title",
      "primary_concerns": ["emissions", "resilience", "..."],
      "statement": "Summary of this persona's perspective"
    }
  ],
  "csr_assessment": {
    "environmental": { "rating": "High" | "Medium" | "Low", "key_points": ["..."] },
    "social": { "rating": "High" | "Medium" | "Low", "key_points": ["..."] },
    "governance_economic": { "rating": "High" | "Medium" | "Low", "key_points": ["..."] }
  },
  "options_and_recommendation": {
    "option_summaries": [
      {
        "option_name": "Option Name",
        "description": "Brief description",
        "csr_implications": {
          "environmental": "Implications text",
          "social": "Implications text",
          "governance_economic": "Implications text"
        }
      }
    ],
    "recommended_option": {
      "name": "Option Name",
      "reasoning": "Explain why this option is most balanced and sustainable."
    }
  }
}"#;

pub const RISKS_SYSTEM_PROMPT: &str =
    "You are a risk management expert. Avoid harmful content. No PII. Advisory only.";

pub const IMPROVE_SYSTEM_PROMPT: &str =
    "You are a sustainability consultant. Output clean JSON only. Advisory only.";

pub const EXPLAIN_SYSTEM_PROMPT: &str = "Conversational tone, no jargon. Output JSON only.";

pub const REPORT_SYSTEM_PROMPT: &str = "Return plain text ONLY. No markdown. No JSON.";

pub const COACH_SYSTEM_PROMPT: &str = "Output JSON: { suggestions: [string] }";

pub const CHAT_SYSTEM_PROMPT: &str = "You are the Council Assistant. Help users phrase scenarios, \
explain CSR concepts, and summarize findings. Be succinct.";

pub fn debate(scenario: &Scenario) -> String {
    format!(
        "Scenario Type: {}\nScenario: {}",
        scenario.scenario_type().label(),
        scenario.text()
    )
}

pub fn risks(council_json: &str) -> String {
    format!(
        "From this Sustainability Council JSON, extract:
- TOP 3 RISKS with label, 1-2 sentence description, horizon (short-term/medium-term/long-term)
- TOP 3 OPPORTUNITIES with label, 1-2 sentence description, horizon
Output valid JSON only: {{risks: [{{label, description, horizon}}], opportunities: [{{label, description, horizon}}]}}
Council JSON: {}",
        council_json
    )
}

pub fn improve(council_json: &str) -> String {
    format!(
        "Analyze this Sustainability Council JSON output and propose 3-7 concrete, actionable changes that would improve the Environmental, Social, and Governance/Economic performance of the recommended option.
For each recommendation, specify which CSR dimension(s) it primarily improves and note any potential trade-offs.
Output JSON: {{ intro: string, suggestions: [{{text: string, dimensions: string[], trade_offs: string}}] }}
Council JSON: {}",
        council_json
    )
}

pub fn explain(council_json: &str) -> String {
    format!(
        "Convert this Sustainability Council JSON into 3-4 short paragraphs of plain-language explanation for non-technical stakeholders. Cover the scenario, key CSR findings, options, and recommendation. Add one extra paragraph tailored for a specific role (mayor, campus officer, ESG manager) explaining what this means for them. Output plain text JSON format only.
Output JSON: {{ explanation: string, role_based_summary: string }}
Council JSON: {}",
        council_json
    )
}

pub fn report(council_json: &str) -> String {
    format!(
        "Create a one-page CSR report from this Sustainability Council JSON.
Output PLAIN TEXT ONLY (no JSON, no markdown) with these EXACT sections and headings in order:

Sustainability Council Report: [6-10 word scenario title]

1. Scenario overview
[3-5 sentences]

2. Key perspectives from the council
[3-6 lines: 'Climate Scientist: ...']

3. CSR assessment (Environmental, Social, Governance/Economic)
[1 paragraph]

4. Options considered
[2-3 sentences per option]

5. Recommended option and next steps
[3-5 sentences]

Keep concise, professional tone for governance/stakeholder use.
Council JSON: {}",
        council_json
    )
}

pub fn coach(scenario_text: &str) -> String {
    format!(
        "Review this scenario: \"{}\". Suggest what might be missing to make it a better CSR proposal (max 3 items).",
        scenario_text
    )
}

/// `context_json` is the serialized council, or the JSON string `"None"`.
pub fn chat(query: &str, context_json: &str) -> String {
    format!("User Query: {}\nContext: {}", query, context_json)
}
