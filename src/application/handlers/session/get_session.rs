//! Session queries and deletion.

use std::sync::Arc;

use super::tool_runner::load_session;
use crate::domain::foundation::SessionId;
use crate::domain::session::{CouncilSession, SessionError};
use crate::ports::SessionRepository;

/// Handler for reading a session snapshot.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<CouncilSession, SessionError> {
        let session = load_session(&self.repository, session_id).await?;
        let snapshot = session.lock().await.clone();
        Ok(snapshot)
    }
}

/// Handler for discarding a session.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<(), SessionError> {
        if !self.repository.delete(&session_id).await? {
            return Err(SessionError::not_found(session_id));
        }
        tracing::info!(%session_id, "Session deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;

    #[tokio::test]
    async fn get_returns_snapshot() {
        let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        let session = CouncilSession::new(4000);
        let id = session.id();
        repository.insert(session).await.unwrap();

        let snapshot = GetSessionHandler::new(repository).handle(id).await.unwrap();
        assert_eq!(snapshot.id(), id);
    }

    #[tokio::test]
    async fn get_unknown_session_fails() {
        let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        let id = SessionId::new();

        let err = GetSessionHandler::new(repository).handle(id).await.unwrap_err();
        assert_eq!(err, SessionError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
        let session = CouncilSession::new(4000);
        let id = session.id();
        repository.insert(session).await.unwrap();
        let handler = DeleteSessionHandler::new(repository);

        handler.handle(id).await.unwrap();
        assert_eq!(handler.handle(id).await.unwrap_err(), SessionError::NotFound(id));
    }
}
