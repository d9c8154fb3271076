//! HTTP handlers for the demonstration login.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;

use crate::adapters::http::error::ApiError;
use crate::application::LoginHandler;
use crate::domain::identity::User;

use super::dto::{CurrentUserResponse, DetailsRequest, StepResponse, VerifyRequest};

#[derive(Clone)]
pub struct IdentityAppState {
    pub login: Arc<LoginHandler>,
}

/// POST /api/identity/details
pub async fn submit_details(
    State(state): State<IdentityAppState>,
    Json(req): Json<DetailsRequest>,
) -> Result<Json<StepResponse>, ApiError> {
    let step = state.login.submit_details(&req.name, &req.email).await?;
    Ok(Json(StepResponse { step }))
}

/// POST /api/identity/verify
pub async fn verify(
    State(state): State<IdentityAppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.login.verify(&req.code).await?;
    Ok(Json(user))
}

/// POST /api/identity/back
pub async fn back(State(state): State<IdentityAppState>) -> Json<StepResponse> {
    Json(StepResponse {
        step: state.login.back().await,
    })
}

/// GET /api/identity
pub async fn current_user(
    State(state): State<IdentityAppState>,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let user = state.login.current_user().await?;
    Ok(Json(CurrentUserResponse { user }))
}

/// DELETE /api/identity
pub async fn logout(State(state): State<IdentityAppState>) -> Result<StatusCode, ApiError> {
    state.login.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}
