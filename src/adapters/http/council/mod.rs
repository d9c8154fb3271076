//! HTTP adapter for the static council catalogues.

mod dto;
mod handlers;
mod routes;

pub use dto::{PresetResponse, ScenarioTypeResponse};
pub use routes::council_routes;
