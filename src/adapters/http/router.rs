//! Assembles every endpoint group into one router.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::assistant::{assistant_routes, AssistantAppState};
use super::council::council_routes;
use super::identity::{identity_routes, IdentityAppState};
use super::preferences::{preferences_routes, PreferencesAppState};
use super::session::{session_routes, SessionAppState};
use crate::application::{CouncilClient, LoginHandler, Preferences};
use crate::config::ServerConfig;
use crate::ports::{ProviderInfo, SessionRepository};

/// Everything the HTTP surface needs from the composition root.
#[derive(Clone)]
pub struct HttpServices {
    pub sessions: Arc<dyn SessionRepository>,
    pub client: CouncilClient,
    pub preferences: Preferences,
    pub max_input_length: usize,
}

/// Builds the full router with tracing, CORS and request timeout layers.
pub fn build_router(services: HttpServices, server: &ServerConfig) -> Router {
    let login = Arc::new(LoginHandler::new(
        services.preferences.clone(),
        services.max_input_length,
    ));
    let provider = services.client.provider_info();

    Router::new()
        .route("/health", get(health).with_state(provider))
        .merge(council_routes())
        .merge(session_routes(SessionAppState {
            repository: services.sessions.clone(),
            client: services.client.clone(),
            max_input_length: services.max_input_length,
        }))
        .merge(assistant_routes(AssistantAppState {
            repository: services.sessions,
            client: services.client,
            max_input_length: services.max_input_length,
        }))
        .merge(identity_routes(IdentityAppState { login }))
        .merge(preferences_routes(PreferencesAppState {
            preferences: services.preferences,
        }))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health(State(provider): State<ProviderInfo>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "provider": provider.name,
    }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
