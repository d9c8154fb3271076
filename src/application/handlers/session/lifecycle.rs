//! Finish, dismiss and reset.

use std::sync::Arc;

use super::tool_runner::load_session;
use crate::domain::foundation::SessionId;
use crate::domain::session::{CouncilSession, SessionError};
use crate::ports::SessionRepository;

/// Session lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Show the completion overlay.
    Finish,
    /// Hide the completion overlay.
    Dismiss,
    /// Start over with a blank session.
    Reset,
}

pub struct SessionLifecycleHandler {
    repository: Arc<dyn SessionRepository>,
}

impl SessionLifecycleHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        session_id: SessionId,
        action: LifecycleAction,
    ) -> Result<CouncilSession, SessionError> {
        let session = load_session(&self.repository, session_id).await?;
        let mut session = session.lock().await;
        match action {
            LifecycleAction::Finish => session.finish(),
            LifecycleAction::Dismiss => session.dismiss_finish(),
            LifecycleAction::Reset => {
                session.reset();
                tracing::info!(%session_id, "Session reset");
            }
        }
        Ok(session.clone())
    }
}
