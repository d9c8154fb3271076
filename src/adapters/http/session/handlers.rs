//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::error::{parse_path, ApiError};
use crate::application::handlers::session::{
    ApplyPresetCommand, ApplyPresetHandler, CreateSessionHandler, DeleteSessionHandler,
    ExportSessionHandler, GetSessionHandler, LifecycleAction, RunDebateHandler, RunToolCommand,
    RunToolHandler, SessionLifecycleHandler, UpdateScenarioCommand, UpdateScenarioHandler,
};
use crate::application::CouncilClient;
use crate::domain::export::ExportFormat;
use crate::domain::foundation::SessionId;
use crate::domain::scenario::ScenarioType;
use crate::domain::session::Tool;
use crate::ports::SessionRepository;

use super::dto::{SessionResponse, UpdateScenarioRequest};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for session endpoints.
#[derive(Clone)]
pub struct SessionAppState {
    pub repository: Arc<dyn SessionRepository>,
    pub client: CouncilClient,
    pub max_input_length: usize,
}

impl SessionAppState {
    fn create_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.repository.clone(), self.max_input_length)
    }

    fn get_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.repository.clone())
    }

    fn delete_handler(&self) -> DeleteSessionHandler {
        DeleteSessionHandler::new(self.repository.clone())
    }

    fn update_scenario_handler(&self) -> UpdateScenarioHandler {
        UpdateScenarioHandler::new(self.repository.clone())
    }

    fn apply_preset_handler(&self) -> ApplyPresetHandler {
        ApplyPresetHandler::new(self.repository.clone(), self.client.clone())
    }

    fn debate_handler(&self) -> RunDebateHandler {
        RunDebateHandler::new(self.repository.clone(), self.client.clone())
    }

    fn tool_handler(&self) -> RunToolHandler {
        RunToolHandler::new(self.repository.clone(), self.client.clone())
    }

    fn lifecycle_handler(&self) -> SessionLifecycleHandler {
        SessionLifecycleHandler::new(self.repository.clone())
    }

    fn export_handler(&self) -> ExportSessionHandler {
        ExportSessionHandler::new(self.repository.clone())
    }
}

type SessionResult = Result<Json<SessionResponse>, ApiError>;

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions
pub async fn create_session(
    State(state): State<SessionAppState>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session = state.create_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// GET /api/sessions/:id
pub async fn get_session(
    State(state): State<SessionAppState>,
    Path(id): Path<String>,
) -> SessionResult {
    let id = parse_path::<SessionId>(&id, "session id")?;
    let session = state.get_handler().handle(id).await?;
    Ok(Json(session.into()))
}

/// DELETE /api/sessions/:id
pub async fn delete_session(
    State(state): State<SessionAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path::<SessionId>(&id, "session id")?;
    state.delete_handler().handle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/sessions/:id/scenario
pub async fn update_scenario(
    State(state): State<SessionAppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateScenarioRequest>,
) -> SessionResult {
    let session_id = parse_path::<SessionId>(&id, "session id")?;
    let scenario_type = match req.scenario_type.as_deref() {
        Some(raw) => raw.parse::<ScenarioType>()?,
        None => ScenarioType::default(),
    };
    let cmd = UpdateScenarioCommand {
        session_id,
        text: req.scenario,
        scenario_type,
    };
    let session = state.update_scenario_handler().handle(cmd).await?;
    Ok(Json(session.into()))
}

/// POST /api/sessions/:id/preset/:index
pub async fn apply_preset(
    State(state): State<SessionAppState>,
    Path((id, index)): Path<(String, String)>,
) -> SessionResult {
    let cmd = ApplyPresetCommand {
        session_id: parse_path(&id, "session id")?,
        index: parse_path(&index, "preset index")?,
    };
    let session = state.apply_preset_handler().handle(cmd).await?;
    Ok(Json(session.into()))
}

/// POST /api/sessions/:id/debate
pub async fn run_debate(
    State(state): State<SessionAppState>,
    Path(id): Path<String>,
) -> SessionResult {
    let id = parse_path::<SessionId>(&id, "session id")?;
    let session = state.debate_handler().handle(id).await?;
    Ok(Json(session.into()))
}

async fn run_tool(state: SessionAppState, id: String, tool: Tool) -> SessionResult {
    let cmd = RunToolCommand {
        session_id: parse_path(&id, "session id")?,
        tool,
    };
    let session = state.tool_handler().handle(cmd).await?;
    Ok(Json(session.into()))
}

/// POST /api/sessions/:id/risks
pub async fn run_risks(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    run_tool(state, id, Tool::Risks).await
}

/// POST /api/sessions/:id/improve
pub async fn run_improve(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    run_tool(state, id, Tool::Improve).await
}

/// POST /api/sessions/:id/explain
pub async fn run_explain(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    run_tool(state, id, Tool::Explain).await
}

/// POST /api/sessions/:id/report
pub async fn run_report(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    run_tool(state, id, Tool::Report).await
}

/// POST /api/sessions/:id/coach
pub async fn run_coach(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    run_tool(state, id, Tool::Coach).await
}

async fn lifecycle(state: SessionAppState, id: String, action: LifecycleAction) -> SessionResult {
    let id = parse_path::<SessionId>(&id, "session id")?;
    let session = state.lifecycle_handler().handle(id, action).await?;
    Ok(Json(session.into()))
}

/// POST /api/sessions/:id/finish
pub async fn finish_session(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    lifecycle(state, id, LifecycleAction::Finish).await
}

/// POST /api/sessions/:id/dismiss
pub async fn dismiss_finish(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    lifecycle(state, id, LifecycleAction::Dismiss).await
}

/// POST /api/sessions/:id/reset
pub async fn reset_session(State(state): State<SessionAppState>, Path(id): Path<String>) -> SessionResult {
    lifecycle(state, id, LifecycleAction::Reset).await
}

/// GET /api/sessions/:id/export/:format
pub async fn export_session(
    State(state): State<SessionAppState>,
    Path((id, format)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_path::<SessionId>(&id, "session id")?;
    let format = format.parse::<ExportFormat>()?;
    let text = state.export_handler().handle(id, format).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
