//! RunToolHandler - runs one follow-up tool against a session.

use std::sync::Arc;

use super::tool_runner::{load_session, run_detached, run_ticket};
use crate::application::council_client::CouncilClient;
use crate::domain::foundation::SessionId;
use crate::domain::session::{CouncilSession, SessionError, Tool};
use crate::ports::SessionRepository;

/// Command to run risks, improve, explain, report or coach.
#[derive(Debug, Clone)]
pub struct RunToolCommand {
    pub session_id: SessionId,
    pub tool: Tool,
}

pub struct RunToolHandler {
    repository: Arc<dyn SessionRepository>,
    client: CouncilClient,
}

impl RunToolHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, client: CouncilClient) -> Self {
        Self { repository, client }
    }

    pub async fn handle(&self, cmd: RunToolCommand) -> Result<CouncilSession, SessionError> {
        let session = load_session(&self.repository, cmd.session_id).await?;
        let client = self.client.clone();

        run_detached(async move {
            let ticket = session.lock().await.begin_tool(cmd.tool)?;

            tracing::info!(session_id = %cmd.session_id, tool = %cmd.tool, "Tool started");
            run_ticket(&client, &session, ticket).await?;

            let snapshot = session.lock().await.clone();
            Ok(snapshot)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::application::council_client::{CouncilClientConfig, REPORT_FALLBACK};
    use crate::domain::council::fixtures;
    use crate::domain::scenario::ScenarioType;
    use crate::domain::session::ToolResult;
    use std::time::Duration;

    struct Harness {
        handler: Arc<RunToolHandler>,
        provider: MockAIProvider,
        id: SessionId,
    }

    async fn harness(provider: MockAIProvider, with_council: bool) -> Harness {
        let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        let mut session = CouncilSession::new(4000);
        session.set_scenario("Sea wall or mangroves", ScenarioType::Water);
        if with_council {
            let ticket = session.begin_debate().unwrap();
            let risks = session.complete_debate(ticket, fixtures::council()).unwrap();
            session.complete_tool(risks, ToolResult::Risks(fixtures::risks()));
        }
        let id = session.id();
        repository.insert(session).await.unwrap();

        let client = CouncilClient::new(Arc::new(provider.clone()), CouncilClientConfig::default());
        Harness {
            handler: Arc::new(RunToolHandler::new(repository, client)),
            provider,
            id,
        }
    }

    fn cmd(h: &Harness, tool: Tool) -> RunToolCommand {
        RunToolCommand {
            session_id: h.id,
            tool,
        }
    }

    #[tokio::test]
    async fn tools_without_council_are_unavailable() {
        let h = harness(MockAIProvider::new(), false).await;

        for tool in [Tool::Risks, Tool::Improve, Tool::Explain, Tool::Report] {
            let err = h.handler.handle(cmd(&h, tool)).await.unwrap_err();
            assert_eq!(err, SessionError::Unavailable(tool));
        }
        assert_eq!(h.provider.call_count(), 0);
    }

    #[tokio::test]
    async fn improve_stores_plan() {
        let provider = MockAIProvider::new().with_response(
            r#"{"intro": "Do more", "suggestions": [{"text": "Add solar", "dimensions": ["Environmental"], "trade_offs": "Cost"}]}"#,
        );
        let h = harness(provider, true).await;

        let session = h.handler.handle(cmd(&h, Tool::Improve)).await.unwrap();

        let plan = session.improvements().unwrap();
        assert_eq!(plan.suggestions[0].trade_offs.as_deref(), Some("Cost"));
        assert!(!session.loading().improve);
    }

    #[tokio::test]
    async fn empty_report_uses_fallback() {
        let h = harness(MockAIProvider::new().with_response(""), true).await;

        let session = h.handler.handle(cmd(&h, Tool::Report)).await.unwrap();
        assert_eq!(session.report(), Some(REPORT_FALLBACK));
    }

    #[tokio::test]
    async fn coach_runs_without_council() {
        let provider = MockAIProvider::new().with_response(r#"{"suggestions": ["Add a budget"]}"#);
        let h = harness(provider, false).await;

        let session = h.handler.handle(cmd(&h, Tool::Coach)).await.unwrap();
        assert_eq!(session.coach_suggestions(), ["Add a budget".to_string()]);
    }

    #[tokio::test]
    async fn failed_tool_reports_and_records_error() {
        let h = harness(MockAIProvider::new().with_response("nope"), true).await;

        let err = h.handler.handle(cmd(&h, Tool::Explain)).await.unwrap_err();
        assert_eq!(err, SessionError::InvalidResponse);
    }

    #[tokio::test]
    async fn different_tools_run_concurrently() {
        let provider = MockAIProvider::new()
            .with_operation_response("improve", r#"{"intro": "i", "suggestions": []}"#)
            .with_operation_response("report", "Report")
            .with_delay(Duration::from_millis(50));
        let h = harness(provider, true).await;

        let (improve, report) = tokio::join!(
            h.handler.handle(cmd(&h, Tool::Improve)),
            h.handler.handle(cmd(&h, Tool::Report)),
        );

        assert!(improve.is_ok());
        let session = report.unwrap();
        assert_eq!(session.report(), Some("Report"));
    }

    #[tokio::test]
    async fn same_tool_twice_is_busy() {
        let provider = MockAIProvider::new()
            .with_operation_response("report", "Report")
            .with_delay(Duration::from_millis(200));
        let h = harness(provider, true).await;

        let first = {
            let handler = Arc::clone(&h.handler);
            let cmd = cmd(&h, Tool::Report);
            tokio::spawn(async move { handler.handle(cmd).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        let err = h.handler.handle(cmd(&h, Tool::Report)).await.unwrap_err();
        assert_eq!(err, SessionError::Busy(Tool::Report));
        assert!(first.await.unwrap().is_ok());
        assert_eq!(h.provider.call_count(), 1);
    }

    #[tokio::test]
    async fn dropped_request_still_clears_tool_flag() {
        let provider = MockAIProvider::new()
            .with_response("Plain report")
            .with_delay(Duration::from_millis(150));
        let h = harness(provider, true).await;

        let timed_out =
            tokio::time::timeout(Duration::from_millis(50), h.handler.handle(cmd(&h, Tool::Report))).await;
        assert!(timed_out.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(h.provider.call_count(), 1);
        let session = h.handler.handle(cmd(&h, Tool::Report)).await.unwrap();
        assert!(!session.loading().report);
        assert_eq!(session.report(), Some("Mock response"));
    }
}
