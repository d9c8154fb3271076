//! HTTP routes for the council catalogues.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_personas, list_presets, list_scenario_types};

/// Creates the catalogue router. Needs no state.
pub fn council_routes() -> Router {
    Router::new()
        .route("/api/council/personas", get(list_personas))
        .route("/api/council/presets", get(list_presets))
        .route("/api/council/scenario-types", get(list_scenario_types))
}
