//! HTTP routes for session endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    apply_preset, create_session, delete_session, dismiss_finish, export_session,
    finish_session, get_session, reset_session, run_coach, run_debate, run_explain, run_improve,
    run_report, run_risks, update_scenario, SessionAppState,
};

/// Creates the session router with all routes.
pub fn session_routes(state: SessionAppState) -> Router {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/scenario", put(update_scenario))
        .route("/api/sessions/:id/preset/:index", post(apply_preset))
        // Council calls
        .route("/api/sessions/:id/debate", post(run_debate))
        .route("/api/sessions/:id/risks", post(run_risks))
        .route("/api/sessions/:id/improve", post(run_improve))
        .route("/api/sessions/:id/explain", post(run_explain))
        .route("/api/sessions/:id/report", post(run_report))
        .route("/api/sessions/:id/coach", post(run_coach))
        // Lifecycle
        .route("/api/sessions/:id/finish", post(finish_session))
        .route("/api/sessions/:id/dismiss", post(dismiss_finish))
        .route("/api/sessions/:id/reset", post(reset_session))
        .route("/api/sessions/:id/export/:format", get(export_session))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::application::{CouncilClient, CouncilClientConfig};
    use crate::domain::council::fixtures;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(provider: &MockAIProvider) -> Router {
        session_routes(SessionAppState {
            repository: Arc::new(InMemorySessionRepository::new()),
            client: CouncilClient::new(Arc::new(provider.clone()), CouncilClientConfig::default()),
            max_input_length: 4000,
        })
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn create(router: &Router) -> String {
        let (status, body) = send(router, "POST", "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let json: Value = serde_json::from_str(&body).unwrap();
        json["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn invalid_session_id_is_bad_request() {
        let router = router(&MockAIProvider::new());
        let (status, body) = send(&router, "GET", "/api/sessions/not-a-uuid", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("INVALID_FORMAT"));
    }

    #[tokio::test]
    async fn risks_before_debate_is_conflict() {
        let provider = MockAIProvider::new();
        let router = router(&provider);
        let id = create(&router).await;

        let (status, body) = send(&router, "POST", &format!("/api/sessions/{}/risks", id), None).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.contains("TOOL_UNAVAILABLE"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn debate_flow_and_export() {
        let provider = MockAIProvider::new()
            .with_operation_response("debate", fixtures::COUNCIL_JSON)
            .with_operation_response("risks", fixtures::RISKS_JSON);
        let router = router(&provider);
        let id = create(&router).await;

        let (status, _) = send(
            &router,
            "PUT",
            &format!("/api/sessions/{}/scenario", id),
            Some(serde_json::json!({"scenario": "Sea wall or mangroves?", "scenario_type": "Water"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&router, "POST", &format!("/api/sessions/{}/debate", id), None).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["scenario_type"], "Water & Drought");
        assert_eq!(json["risks"]["risks"][0]["horizon"], "short-term");

        let (status, text) = send(
            &router,
            "GET",
            &format!("/api/sessions/{}/export/decision-log", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(text.starts_with("SUSTAINABILITY COUNCIL DECISION LOG"));

        let (status, _) = send(&router, "GET", &format!("/api/sessions/{}/export/pdf", id), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_scenario_debate_is_bad_request() {
        let router = router(&MockAIProvider::new());
        let id = create(&router).await;

        let (status, body) = send(&router, "POST", &format!("/api/sessions/{}/debate", id), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Please describe your scenario first."));
    }

    #[tokio::test]
    async fn unknown_preset_is_not_found() {
        let router = router(&MockAIProvider::new());
        let id = create(&router).await;

        let (status, _) = send(&router, "POST", &format!("/api/sessions/{}/preset/9", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&router, "POST", &format!("/api/sessions/{}/preset/1", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Energy & Renewables"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let router = router(&MockAIProvider::new());
        let id = create(&router).await;

        let (status, _) = send(&router, "DELETE", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&router, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("SESSION_NOT_FOUND"));
    }
}
