//! HTTP adapter for remembered preferences.

mod handlers;
mod routes;

pub use handlers::{PreferencesAppState, ThemeBody};
pub use routes::preferences_routes;
