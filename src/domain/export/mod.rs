//! Export module - deterministic text renderings of fetched results.
//!
//! Nothing here touches the network; callers copy the text wherever they
//! like.

mod decision_log;
mod slide_outline;

pub use decision_log::decision_log;
pub use slide_outline::slide_outline;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::council::{CouncilOutput, RisksAndOpportunitiesOutput};
use crate::domain::foundation::ValidationError;

/// Which export a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    DecisionLog,
    Slides,
}

impl ExportFormat {
    /// Renders the export for a finished debate.
    pub fn render(
        self,
        council: &CouncilOutput,
        risks: Option<&RisksAndOpportunitiesOutput>,
    ) -> String {
        match self {
            ExportFormat::DecisionLog => decision_log(council, risks),
            ExportFormat::Slides => slide_outline(council, risks),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decision-log" => Ok(ExportFormat::DecisionLog),
            "slides" => Ok(ExportFormat::Slides),
            other => Err(ValidationError::invalid_format(
                "format",
                format!("expected 'decision-log' or 'slides', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::council::fixtures;

    #[test]
    fn format_parses_from_path_segment() {
        let format: ExportFormat = serde_json::from_str("\"decision-log\"").unwrap();
        assert_eq!(format, ExportFormat::DecisionLog);
        assert_eq!("slides".parse::<ExportFormat>().unwrap(), ExportFormat::Slides);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn render_dispatches_by_format() {
        let council = fixtures::council();
        let log = ExportFormat::DecisionLog.render(&council, None);
        let slides = ExportFormat::Slides.render(&council, None);

        assert!(log.starts_with("SUSTAINABILITY COUNCIL DECISION LOG"));
        assert!(slides.starts_with("SLIDE OUTLINE"));
    }
}
