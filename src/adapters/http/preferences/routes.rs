//! HTTP routes for remembered preferences.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_theme, set_theme, toggle_theme, PreferencesAppState};

pub fn preferences_routes(state: PreferencesAppState) -> Router {
    Router::new()
        .route("/api/preferences/theme", get(get_theme).put(set_theme))
        .route("/api/preferences/theme/toggle", post(toggle_theme))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPreferenceStore;
    use crate::application::Preferences;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn theme_of(router: &Router, request: Request<Body>) -> String {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["theme"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn toggle_and_set_theme() {
        let router = preferences_routes(PreferencesAppState {
            preferences: Preferences::new(Arc::new(InMemoryPreferenceStore::new())),
        });

        let get = || Request::get("/api/preferences/theme").body(Body::empty()).unwrap();
        assert_eq!(theme_of(&router, get()).await, "dark");

        let toggle = Request::post("/api/preferences/theme/toggle").body(Body::empty()).unwrap();
        assert_eq!(theme_of(&router, toggle).await, "light");
        assert_eq!(theme_of(&router, get()).await, "light");

        let put = Request::put("/api/preferences/theme")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"theme":"dark"}"#))
            .unwrap();
        assert_eq!(theme_of(&router, put).await, "dark");
    }
}
