//! HTTP handlers for the theme preference.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ApiError;
use crate::application::Preferences;
use crate::domain::preferences::Theme;

#[derive(Clone)]
pub struct PreferencesAppState {
    pub preferences: Preferences,
}

/// Request and response body for theme endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// GET /api/preferences/theme
pub async fn get_theme(State(state): State<PreferencesAppState>) -> Result<Json<ThemeBody>, ApiError> {
    let theme = state.preferences.theme().await?;
    Ok(Json(ThemeBody { theme }))
}

/// PUT /api/preferences/theme
pub async fn set_theme(
    State(state): State<PreferencesAppState>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, ApiError> {
    state.preferences.set_theme(body.theme).await?;
    Ok(Json(body))
}

/// POST /api/preferences/theme/toggle
pub async fn toggle_theme(
    State(state): State<PreferencesAppState>,
) -> Result<Json<ThemeBody>, ApiError> {
    let theme = state.preferences.toggle_theme().await?;
    Ok(Json(ThemeBody { theme }))
}
