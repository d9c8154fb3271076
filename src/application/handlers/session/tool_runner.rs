//! Shared plumbing for handlers that call the council.

use std::future::Future;
use std::sync::Arc;

use crate::application::council_client::CouncilClient;
use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, Tool, ToolInput, ToolResult, ToolTicket};
use crate::ports::{SessionRepository, SharedSession};

/// Looks up a session handle or fails with `NotFound`.
pub(crate) async fn load_session(
    repository: &Arc<dyn SessionRepository>,
    id: SessionId,
) -> Result<SharedSession, SessionError> {
    repository
        .find_by_id(&id)
        .await?
        .ok_or(SessionError::not_found(id))
}

/// Runs ticketed work on its own task and waits for it.
///
/// The work keeps running to completion if the caller is dropped, so every
/// loading flag it sets is settled even when the request times out.
pub(crate) async fn run_detached<F, T>(work: F) -> Result<T, SessionError>
where
    F: Future<Output = Result<T, SessionError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work).await.map_err(|e| {
        tracing::error!(error = %e, "Council task aborted");
        SessionError::Infrastructure(e.to_string())
    })?
}

/// Runs one ticketed tool call and settles the ticket on the session.
///
/// The session lock is taken only after the call returns.
pub(crate) async fn run_ticket(
    client: &CouncilClient,
    session: &SharedSession,
    ticket: ToolTicket,
) -> Result<(), SessionError> {
    let tool = ticket.tool();
    let outcome = match (tool, ticket.input()) {
        (Tool::Risks, ToolInput::Council(council)) => {
            Some(client.extract_risks(council).await.map(ToolResult::Risks))
        }
        (Tool::Improve, ToolInput::Council(council)) => Some(
            client
                .propose_improvements(council)
                .await
                .map(ToolResult::Improvements),
        ),
        (Tool::Explain, ToolInput::Council(council)) => Some(
            client
                .simplify_explanation(council)
                .await
                .map(ToolResult::Explanation),
        ),
        (Tool::Report, ToolInput::Council(council)) => {
            Some(client.generate_report(council).await.map(ToolResult::Report))
        }
        (Tool::Coach, ToolInput::Scenario(scenario)) => {
            Some(client.coach_scenario(scenario).await.map(ToolResult::Coach))
        }
        _ => None,
    };
    let result = match outcome {
        Some(result) => result.map_err(SessionError::from),
        None => Err(SessionError::Unavailable(tool)),
    };

    match result {
        Ok(result) => {
            if !session.lock().await.complete_tool(ticket, result) {
                tracing::debug!(%tool, "Dropped stale tool result");
            }
            Ok(())
        }
        Err(err) => {
            if !session.lock().await.fail_tool(ticket, &err) {
                tracing::debug!(%tool, "Dropped stale tool failure");
            }
            Err(err)
        }
    }
}
