//! Handlers for editing the draft scenario.

use std::sync::Arc;

use super::tool_runner::{load_session, run_detached, run_ticket};
use crate::application::council_client::CouncilClient;
use crate::domain::foundation::SessionId;
use crate::domain::scenario::ScenarioType;
use crate::domain::session::{CouncilSession, SessionError, Tool};
use crate::ports::SessionRepository;

/// Command to replace the draft scenario.
#[derive(Debug, Clone)]
pub struct UpdateScenarioCommand {
    pub session_id: SessionId,
    pub text: String,
    pub scenario_type: ScenarioType,
}

pub struct UpdateScenarioHandler {
    repository: Arc<dyn SessionRepository>,
}

impl UpdateScenarioHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateScenarioCommand) -> Result<CouncilSession, SessionError> {
        let session = load_session(&self.repository, cmd.session_id).await?;
        let mut session = session.lock().await;
        session.set_scenario(&cmd.text, cmd.scenario_type);
        Ok(session.clone())
    }
}

/// Command to load a preset into the draft.
#[derive(Debug, Clone)]
pub struct ApplyPresetCommand {
    pub session_id: SessionId,
    pub index: usize,
}

/// Loads a preset, then asks the coach what it is missing.
///
/// A coach failure is recorded on the session but does not fail the call.
pub struct ApplyPresetHandler {
    repository: Arc<dyn SessionRepository>,
    client: CouncilClient,
}

impl ApplyPresetHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, client: CouncilClient) -> Self {
        Self { repository, client }
    }

    pub async fn handle(&self, cmd: ApplyPresetCommand) -> Result<CouncilSession, SessionError> {
        let session = load_session(&self.repository, cmd.session_id).await?;
        let client = self.client.clone();

        run_detached(async move {
            let coach_ticket = {
                let mut session = session.lock().await;
                session.apply_preset(cmd.index)?;
                session.begin_tool(Tool::Coach)
            };

            match coach_ticket {
                Ok(ticket) => {
                    if let Err(err) = run_ticket(&client, &session, ticket).await {
                        tracing::warn!(session_id = %cmd.session_id, error = %err, "Coach failed after preset");
                    }
                }
                Err(err) => tracing::debug!(session_id = %cmd.session_id, error = %err, "Coach skipped"),
            }

            let snapshot = session.lock().await.clone();
            Ok(snapshot)
        })
        .await
    }
}
