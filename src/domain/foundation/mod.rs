//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, input sanitization and error types
//! that form the vocabulary of the Sustainability Council domain.

mod errors;
mod ids;
mod sanitize;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use sanitize::{sanitize_input, DEFAULT_MAX_INPUT_LENGTH};
pub use timestamp::Timestamp;
