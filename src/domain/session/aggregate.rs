//! CouncilSession aggregate - one user's working state.
//!
//! Every model call is split into a `begin_*` step that flips a loading
//! flag and hands out a ticket, and a `complete_*`/`fail_*` step that
//! consumes the ticket. The session lock only needs to be held for those
//! two steps, never across the call itself.
//!
//! Tickets carry a stamp. A new debate invalidates tickets for tools that
//! read the previous debate; a reset invalidates everything. Results that
//! arrive on an invalidated ticket are dropped.

use serde::Serialize;
use std::sync::Arc;

use super::{SessionError, Tool, ToolFlags};
use crate::domain::council::{
    CouncilOutput, ImprovementOutput, RisksAndOpportunitiesOutput, SimpleExplanationOutput,
};
use crate::domain::foundation::{sanitize_input, SessionId, Timestamp};
use crate::domain::scenario::{preset, Scenario, ScenarioType};

/// Shown when a debate or coach request has no scenario text.
pub const EMPTY_SCENARIO_MESSAGE: &str = "Please describe your scenario first.";

/// Permission to run a debate, issued by [`CouncilSession::begin_debate`].
#[derive(Debug, Clone)]
pub struct DebateTicket {
    epoch: u64,
    scenario: Scenario,
}

impl DebateTicket {
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }
}

/// What a tool reads.
#[derive(Debug, Clone)]
pub enum ToolInput {
    Council(Arc<CouncilOutput>),
    Scenario(Scenario),
}

/// Permission to run one tool, issued by [`CouncilSession::begin_tool`].
#[derive(Debug, Clone)]
pub struct ToolTicket {
    tool: Tool,
    stamp: u64,
    input: ToolInput,
}

impl ToolTicket {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn input(&self) -> &ToolInput {
        &self.input
    }
}

/// A finished tool result, ready to be stored on the session.
#[derive(Debug, Clone)]
pub enum ToolResult {
    Risks(RisksAndOpportunitiesOutput),
    Improvements(ImprovementOutput),
    Explanation(SimpleExplanationOutput),
    Report(String),
    Coach(Vec<String>),
}

impl ToolResult {
    pub fn tool(&self) -> Tool {
        match self {
            ToolResult::Risks(_) => Tool::Risks,
            ToolResult::Improvements(_) => Tool::Improve,
            ToolResult::Explanation(_) => Tool::Explain,
            ToolResult::Report(_) => Tool::Report,
            ToolResult::Coach(_) => Tool::Coach,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CouncilSession {
    id: SessionId,
    scenario: String,
    scenario_type: ScenarioType,
    council: Option<Arc<CouncilOutput>>,
    risks: Option<RisksAndOpportunitiesOutput>,
    improvements: Option<ImprovementOutput>,
    explanation: Option<SimpleExplanationOutput>,
    report: Option<String>,
    coach_suggestions: Vec<String>,
    loading: ToolFlags,
    finishing: bool,
    error: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(skip)]
    max_input_length: usize,
    /// Bumped by reset; guards debate and coach tickets.
    #[serde(skip)]
    epoch: u64,
    /// Bumped by every new debate and by reset; guards council tool tickets.
    #[serde(skip)]
    generation: u64,
}

impl CouncilSession {
    pub fn new(max_input_length: usize) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            scenario: String::new(),
            scenario_type: ScenarioType::Other,
            council: None,
            risks: None,
            improvements: None,
            explanation: None,
            report: None,
            coach_suggestions: Vec::new(),
            loading: ToolFlags::default(),
            finishing: false,
            error: None,
            created_at: now,
            updated_at: now,
            max_input_length,
            epoch: 0,
            generation: 0,
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }
    pub fn scenario(&self) -> &str {
        &self.scenario
    }
    pub fn scenario_type(&self) -> ScenarioType {
        self.scenario_type
    }
    pub fn council(&self) -> Option<&Arc<CouncilOutput>> {
        self.council.as_ref()
    }
    pub fn risks(&self) -> Option<&RisksAndOpportunitiesOutput> {
        self.risks.as_ref()
    }
    pub fn improvements(&self) -> Option<&ImprovementOutput> {
        self.improvements.as_ref()
    }
    pub fn explanation(&self) -> Option<&SimpleExplanationOutput> {
        self.explanation.as_ref()
    }
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }
    pub fn coach_suggestions(&self) -> &[String] {
        &self.coach_suggestions
    }
    pub fn loading(&self) -> ToolFlags {
        self.loading
    }
    pub fn is_finishing(&self) -> bool {
        self.finishing
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ─── Scenario input ─────────────────────────────────────────────────────────

    /// Replaces the draft scenario. Text is sanitized, not validated.
    pub fn set_scenario(&mut self, text: &str, scenario_type: ScenarioType) {
        self.scenario = sanitize_input(text, self.max_input_length);
        self.scenario_type = scenario_type;
        self.touch();
    }

    /// Loads a preset scenario into the draft.
    pub fn apply_preset(&mut self, index: usize) -> Result<(), SessionError> {
        let preset = preset(index).ok_or(SessionError::PresetNotFound(index))?;
        self.set_scenario(preset.scenario, preset.scenario_type);
        Ok(())
    }

    // ─── Debate ─────────────────────────────────────────────────────────────────

    /// Starts a debate, clearing every result of the previous one.
    pub fn begin_debate(&mut self) -> Result<DebateTicket, SessionError> {
        if self.loading.debate {
            return Err(SessionError::Busy(Tool::Debate));
        }
        let scenario = match self.validated_scenario() {
            Ok(scenario) => scenario,
            Err(err) => {
                self.error = Some(err.message());
                return Err(err);
            }
        };

        self.generation += 1;
        self.error = None;
        self.council = None;
        self.risks = None;
        self.improvements = None;
        self.explanation = None;
        self.report = None;
        for tool in [Tool::Risks, Tool::Improve, Tool::Explain, Tool::Report] {
            self.loading.set(tool, false);
        }
        self.loading.debate = true;
        self.touch();

        Ok(DebateTicket {
            epoch: self.epoch,
            scenario,
        })
    }

    /// Stores the debate result and starts the dependent risks extraction.
    ///
    /// Returns `None` when the session was reset while the debate ran.
    pub fn complete_debate(
        &mut self,
        ticket: DebateTicket,
        council: CouncilOutput,
    ) -> Option<ToolTicket> {
        if ticket.epoch != self.epoch {
            return None;
        }
        let council = Arc::new(council);
        self.loading.debate = false;
        self.council = Some(Arc::clone(&council));
        self.loading.risks = true;
        self.touch();

        Some(ToolTicket {
            tool: Tool::Risks,
            stamp: self.generation,
            input: ToolInput::Council(council),
        })
    }

    /// Records a failed debate. Returns false if the ticket was stale.
    pub fn fail_debate(&mut self, ticket: DebateTicket, err: &SessionError) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.loading.debate = false;
        self.error = Some(err.message());
        self.touch();
        true
    }

    // ─── Tools ──────────────────────────────────────────────────────────────────

    /// Starts a tool. Council tools need a finished debate; coach needs text.
    pub fn begin_tool(&mut self, tool: Tool) -> Result<ToolTicket, SessionError> {
        if tool == Tool::Debate {
            return Err(SessionError::validation(
                "tool",
                "Debates are started with begin_debate",
            ));
        }
        if self.loading.is_loading(tool) {
            return Err(SessionError::Busy(tool));
        }

        let (input, stamp) = if tool.needs_council() {
            let council = self.council.clone().ok_or(SessionError::Unavailable(tool))?;
            (ToolInput::Council(council), self.generation)
        } else {
            (ToolInput::Scenario(self.validated_scenario()?), self.epoch)
        };

        self.loading.set(tool, true);
        self.touch();
        Ok(ToolTicket { tool, stamp, input })
    }

    /// Stores a tool result. Returns false if it was dropped as stale.
    pub fn complete_tool(&mut self, ticket: ToolTicket, result: ToolResult) -> bool {
        if result.tool() != ticket.tool || !self.settle(&ticket) {
            return false;
        }
        match result {
            ToolResult::Risks(risks) => self.risks = Some(risks),
            ToolResult::Improvements(plan) => self.improvements = Some(plan),
            ToolResult::Explanation(explanation) => self.explanation = Some(explanation),
            ToolResult::Report(report) => self.report = Some(report),
            ToolResult::Coach(suggestions) => self.coach_suggestions = suggestions,
        }
        true
    }

    /// Records a failed tool call. Returns false if the ticket was stale.
    pub fn fail_tool(&mut self, ticket: ToolTicket, err: &SessionError) -> bool {
        if !self.settle(&ticket) {
            return false;
        }
        self.error = Some(err.message());
        true
    }

    // ─── Lifecycle ──────────────────────────────────────────────────────────────

    /// Shows the completion overlay. No other state changes.
    pub fn finish(&mut self) {
        self.finishing = true;
        self.touch();
    }

    /// Hides the completion overlay and returns to the results.
    pub fn dismiss_finish(&mut self) {
        self.finishing = false;
        self.touch();
    }

    /// Returns to a blank session; in-flight results will be discarded.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.generation += 1;
        self.scenario.clear();
        self.scenario_type = ScenarioType::Other;
        self.council = None;
        self.risks = None;
        self.improvements = None;
        self.explanation = None;
        self.report = None;
        self.coach_suggestions.clear();
        self.loading = ToolFlags::default();
        self.finishing = false;
        self.error = None;
        self.touch();
    }

    fn validated_scenario(&self) -> Result<Scenario, SessionError> {
        Scenario::new(&self.scenario, self.scenario_type, self.max_input_length)
            .map_err(|_| SessionError::validation("scenario", EMPTY_SCENARIO_MESSAGE))
    }

    fn settle(&mut self, ticket: &ToolTicket) -> bool {
        let current = if ticket.tool.needs_council() {
            ticket.stamp == self.generation
        } else {
            ticket.stamp == self.epoch
        };
        if current {
            self.loading.set(ticket.tool, false);
            self.touch();
        }
        current
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
