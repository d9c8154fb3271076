//! HTTP adapter for the demonstration login.

mod dto;
mod handlers;
mod routes;

pub use dto::{CurrentUserResponse, DetailsRequest, StepResponse, VerifyRequest};
pub use handlers::IdentityAppState;
pub use routes::identity_routes;
