//! HTTP routes for the demonstration login.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{back, current_user, logout, submit_details, verify, IdentityAppState};

pub fn identity_routes(state: IdentityAppState) -> Router {
    Router::new()
        .route("/api/identity", get(current_user).delete(logout))
        .route("/api/identity/details", post(submit_details))
        .route("/api/identity/verify", post(verify))
        .route("/api/identity/back", post(back))
        .with_state(state)
}
