//! HTTP handlers for the assistant.

use std::sync::Arc;

use axum::extract::{Json, State};

use crate::adapters::http::error::{parse_path, ApiError};
use crate::application::{ChatCommand, ChatHandler, CouncilClient};
use crate::ports::SessionRepository;

use super::dto::{ChatRequest, ChatResponse};

#[derive(Clone)]
pub struct AssistantAppState {
    pub repository: Arc<dyn SessionRepository>,
    pub client: CouncilClient,
    pub max_input_length: usize,
}

impl AssistantAppState {
    fn chat_handler(&self) -> ChatHandler {
        ChatHandler::new(
            self.repository.clone(),
            self.client.clone(),
            self.max_input_length,
        )
    }
}

/// POST /api/assistant/chat
pub async fn chat(
    State(state): State<AssistantAppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session_id = req
        .session_id
        .as_deref()
        .map(|id| parse_path(id, "session id"))
        .transpose()?;
    let cmd = ChatCommand {
        query: req.query,
        session_id,
    };
    let reply = state.chat_handler().handle(cmd).await?;
    Ok(Json(ChatResponse { reply }))
}
