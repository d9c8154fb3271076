//! ChatHandler - the council assistant side panel.

use std::sync::Arc;

use super::session::load_session;
use crate::application::council_client::CouncilClient;
use crate::domain::foundation::{sanitize_input, SessionId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// A question for the assistant, optionally about one session's debate.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub query: String,
    pub session_id: Option<SessionId>,
}

pub struct ChatHandler {
    repository: Arc<dyn SessionRepository>,
    client: CouncilClient,
    max_input_length: usize,
}

impl ChatHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        client: CouncilClient,
        max_input_length: usize,
    ) -> Self {
        Self {
            repository,
            client,
            max_input_length,
        }
    }

    /// Answers the query. The session's council, if any, is sent as context.
    pub async fn handle(&self, cmd: ChatCommand) -> Result<String, SessionError> {
        let query = sanitize_input(&cmd.query, self.max_input_length);
        if query.is_empty() {
            return Err(SessionError::validation("query", "Please enter a question."));
        }

        let context = match cmd.session_id {
            Some(id) => {
                let session = load_session(&self.repository, id).await?;
                let council = session.lock().await.council().cloned();
                council
            }
            None => None,
        };

        let reply = self.client.chat(&query, context.as_deref()).await?;
        Ok(reply)
    }
}
