//! Session-specific error types.

use super::Tool;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// User-facing text for any failure to reach the model.
pub const COUNCIL_UNREACHABLE_MESSAGE: &str = "The council could not be reached. Please try again.";

/// User-facing text for a reply that could not be parsed.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from expert panel.";

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// No preset at that position.
    PresetNotFound(usize),
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// The action is already running for this session.
    Busy(Tool),
    /// The action needs a finished debate first.
    Unavailable(Tool),
    /// The model endpoint failed.
    CouncilUnreachable,
    /// The model replied with something that does not parse.
    InvalidResponse,
    /// No room for another live session.
    LimitReached,
    /// Session storage failed.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::PresetNotFound(_) => ErrorCode::PresetNotFound,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Busy(_) => ErrorCode::ToolBusy,
            SessionError::Unavailable(_) => ErrorCode::ToolUnavailable,
            SessionError::CouncilUnreachable => ErrorCode::CouncilUnreachable,
            SessionError::InvalidResponse => ErrorCode::InvalidModelResponse,
            SessionError::LimitReached => ErrorCode::SessionLimitReached,
            SessionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::PresetNotFound(index) => format!("No preset scenario at {}", index),
            SessionError::ValidationFailed { message, .. } => message.clone(),
            SessionError::Busy(tool) => format!("The {} action is already running.", tool),
            SessionError::Unavailable(_) => "Run a council debate first.".to_string(),
            SessionError::CouncilUnreachable => COUNCIL_UNREACHABLE_MESSAGE.to_string(),
            SessionError::InvalidResponse => INVALID_RESPONSE_MESSAGE.to_string(),
            SessionError::LimitReached => {
                "Too many active sessions. Please try again later.".to_string()
            }
            SessionError::Infrastructure(msg) => format!("Session storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        SessionError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionLimitReached => SessionError::LimitReached,
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}
