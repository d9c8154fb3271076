//! Council actions and their loading flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every action that calls the model on behalf of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Debate,
    Risks,
    Improve,
    Explain,
    Report,
    Coach,
}

impl Tool {
    /// True when the action reads a finished debate rather than raw scenario text.
    pub fn needs_council(&self) -> bool {
        matches!(self, Tool::Risks | Tool::Improve | Tool::Explain | Tool::Report)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Debate => "debate",
            Tool::Risks => "risks",
            Tool::Improve => "improve",
            Tool::Explain => "explain",
            Tool::Report => "report",
            Tool::Coach => "coach",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One independent loading flag per action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFlags {
    pub debate: bool,
    pub risks: bool,
    pub improve: bool,
    pub explain: bool,
    pub report: bool,
    pub coach: bool,
}

impl ToolFlags {
    pub fn is_loading(&self, tool: Tool) -> bool {
        match tool {
            Tool::Debate => self.debate,
            Tool::Risks => self.risks,
            Tool::Improve => self.improve,
            Tool::Explain => self.explain,
            Tool::Report => self.report,
            Tool::Coach => self.coach,
        }
    }

    pub fn set(&mut self, tool: Tool, loading: bool) {
        let flag = match tool {
            Tool::Debate => &mut self.debate,
            Tool::Risks => &mut self.risks,
            Tool::Improve => &mut self.improve,
            Tool::Explain => &mut self.explain,
            Tool::Report => &mut self.report,
            Tool::Coach => &mut self.coach,
        };
        *flag = loading;
    }

    pub fn any(&self) -> bool {
        self.debate || self.risks || self.improve || self.explain || self.report || self.coach
    }
}
