//! HTTP routes for the assistant.

use axum::routing::post;
use axum::Router;

use super::handlers::{chat, AssistantAppState};

pub fn assistant_routes(state: AssistantAppState) -> Router {
    Router::new()
        .route("/api/assistant/chat", post(chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::application::{CouncilClient, CouncilClientConfig};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(provider: &MockAIProvider) -> Router {
        assistant_routes(AssistantAppState {
            repository: Arc::new(InMemorySessionRepository::new()),
            client: CouncilClient::new(Arc::new(provider.clone()), CouncilClientConfig::default()),
            max_input_length: 4000,
        })
    }

    async fn post_chat(router: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::post("/api/assistant/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn chat_returns_reply() {
        let provider = MockAIProvider::new().with_response("CSR means corporate social responsibility.");
        let (status, body) = post_chat(router(&provider), serde_json::json!({"query": "What is CSR?"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "CSR means corporate social responsibility.");
    }

    #[tokio::test]
    async fn blank_query_is_bad_request() {
        let provider = MockAIProvider::new();
        let (status, body) = post_chat(router(&provider), serde_json::json!({"query": "   "})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn provider_failure_is_bad_gateway() {
        let provider = MockAIProvider::new().with_error(crate::adapters::ai::MockError::AuthenticationFailed);
        let (status, body) = post_chat(router(&provider), serde_json::json!({"query": "Hi"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "The council could not be reached. Please try again.");
    }
}
