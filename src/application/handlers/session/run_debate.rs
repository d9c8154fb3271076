//! RunDebateHandler - convenes the council, then extracts risks.

use std::sync::Arc;

use super::tool_runner::{load_session, run_detached, run_ticket};
use crate::application::council_client::CouncilClient;
use crate::domain::foundation::SessionId;
use crate::domain::session::{CouncilSession, SessionError};
use crate::ports::{SessionRepository, SharedSession};

pub struct RunDebateHandler {
    repository: Arc<dyn SessionRepository>,
    client: CouncilClient,
}

impl RunDebateHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, client: CouncilClient) -> Self {
        Self { repository, client }
    }

    /// Runs the debate and, on success, the risks extraction.
    ///
    /// A failed risks call is recorded on the session but does not fail the
    /// debate; the returned snapshot carries the council either way.
    pub async fn handle(&self, session_id: SessionId) -> Result<CouncilSession, SessionError> {
        let session = load_session(&self.repository, session_id).await?;
        run_detached(debate_then_risks(self.client.clone(), session, session_id)).await
    }
}

async fn debate_then_risks(
    client: CouncilClient,
    session: SharedSession,
    session_id: SessionId,
) -> Result<CouncilSession, SessionError> {
    let ticket = session.lock().await.begin_debate()?;

    tracing::info!(%session_id, scenario_type = %ticket.scenario().scenario_type(), "Debate started");

    let council = match client.run_debate(ticket.scenario()).await {
        Ok(council) => council,
        Err(err) => {
            let err = SessionError::from(err);
            session.lock().await.fail_debate(ticket, &err);
            return Err(err);
        }
    };

    let risks_ticket = session.lock().await.complete_debate(ticket, council);
    match risks_ticket {
        Some(ticket) => {
            if let Err(err) = run_ticket(&client, &session, ticket).await {
                tracing::warn!(%session_id, error = %err, "Risk extraction failed after debate");
            }
        }
        None => tracing::debug!(%session_id, "Session reset during debate"),
    }

    let snapshot = session.lock().await.clone();
    Ok(snapshot)
}
