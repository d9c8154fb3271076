//! In-Memory Session Repository Adapter
//!
//! Sessions are process-local; restarting the server forgets them. Sessions
//! that have not changed for the idle timeout are evicted, and the number of
//! live sessions is capped.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::CouncilSession;
use crate::ports::{SessionRepository, SharedSession};

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(3600);
const DEFAULT_MAX_SESSIONS: usize = 1000;

type SessionMap = HashMap<SessionId, SharedSession>;

#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<SessionMap>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_limits(DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS)
    }
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
            max_sessions,
        }
    }

    /// Drops every idle session and returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        evict_idle(&mut sessions, self.idle_timeout)
    }
}

/// Sessions locked by a request in flight are never evicted.
fn evict_idle(sessions: &mut SessionMap, idle_timeout: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, shared| match shared.try_lock() {
        Ok(session) => !session.updated_at().is_older_than(idle_timeout),
        Err(_) => true,
    });
    let evicted = before - sessions.len();
    if evicted > 0 {
        tracing::debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
    }
    evicted
}

/// Drops the least recently changed unlocked session.
fn evict_oldest(sessions: &mut SessionMap) -> bool {
    let oldest = sessions
        .iter()
        .filter_map(|(id, shared)| shared.try_lock().ok().map(|s| (*id, s.updated_at())))
        .min_by_key(|(_, updated_at)| *updated_at)
        .map(|(id, _)| id);

    match oldest {
        Some(id) => {
            sessions.remove(&id);
            tracing::debug!(session_id = %id, "Evicted oldest session at capacity");
            true
        }
        None => false,
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: CouncilSession) -> Result<SharedSession, DomainError> {
        let mut sessions = self.sessions.write().await;
        evict_idle(&mut sessions, self.idle_timeout);
        if sessions.len() >= self.max_sessions && !evict_oldest(&mut sessions) {
            return Err(DomainError::new(
                ErrorCode::SessionLimitReached,
                format!("{} sessions are in use", sessions.len()),
            ));
        }

        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SharedSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.read().await.len())
    }
}
