//! HTTP adapter for the council assistant.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse};
pub use handlers::AssistantAppState;
pub use routes::assistant_routes;
