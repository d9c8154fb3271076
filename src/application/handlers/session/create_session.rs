//! CreateSessionHandler - Command handler for opening a blank session.

use std::sync::Arc;

use crate::domain::session::{CouncilSession, SessionError};
use crate::ports::SessionRepository;

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    max_input_length: usize,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, max_input_length: usize) -> Self {
        Self {
            repository,
            max_input_length,
        }
    }

    /// Returns a snapshot of the new session.
    pub async fn handle(&self) -> Result<CouncilSession, SessionError> {
        let session = CouncilSession::new(self.max_input_length);
        let snapshot = session.clone();
        self.repository.insert(session).await?;

        tracing::info!(session_id = %snapshot.id(), "Session created");
        Ok(snapshot)
    }
}
