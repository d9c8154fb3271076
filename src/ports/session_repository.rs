//! Session repository port.
//!
//! Sessions live only as long as the process. The repository hands out a
//! shared, lockable handle so that handlers can mutate one session without
//! blocking others.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::CouncilSession;

/// A session guarded by its own lock.
///
/// Hold the lock only to read or update state, never across a provider call.
pub type SharedSession = Arc<Mutex<CouncilSession>>;

/// Repository port for CouncilSession storage.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session and return its shared handle.
    async fn insert(&self, session: CouncilSession) -> Result<SharedSession, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SharedSession>, DomainError>;

    /// Remove a session. Returns false if it did not exist.
    async fn delete(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
