//! ExportSessionHandler - renders the decision log or slide outline.

use std::sync::Arc;

use super::tool_runner::load_session;
use crate::domain::export::ExportFormat;
use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, Tool};
use crate::ports::SessionRepository;

pub struct ExportSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ExportSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Requires a finished debate. Risks are optional.
    pub async fn handle(
        &self,
        session_id: SessionId,
        format: ExportFormat,
    ) -> Result<String, SessionError> {
        let session = load_session(&self.repository, session_id).await?;
        let session = session.lock().await;
        let council = session
            .council()
            .ok_or(SessionError::Unavailable(Tool::Debate))?;
        Ok(format.render(council, session.risks()))
    }
}
