//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter (dto, handlers, routes); [`build_router`]
//! merges them and adds the cross-cutting layers.

pub mod assistant;
pub mod council;
mod error;
pub mod identity;
pub mod preferences;
mod router;
pub mod session;

pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, HttpServices};
