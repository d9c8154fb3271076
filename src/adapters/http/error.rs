//! Error body and status mapping shared by every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::LoginError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::session::SessionError;
use crate::ports::PreferenceStoreError;

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_code: code.to_string(),
            message: message.into(),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Conflict(ErrorResponse),
    BadGateway(ErrorResponse),
    ServiceUnavailable(ErrorResponse),
    Internal(ErrorResponse),
}

impl ApiError {
    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorResponse::new(code, message))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(body)
            | ApiError::NotFound(body)
            | ApiError::Conflict(body)
            | ApiError::BadGateway(body)
            | ApiError::ServiceUnavailable(body)
            | ApiError::Internal(body) => body,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = %status, error = ?self, "Request failed");
        }
        (status, Json(self.into_body())).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        let body = ErrorResponse::new(error.code(), error.message());
        match error {
            SessionError::NotFound(_) | SessionError::PresetNotFound(_) => ApiError::NotFound(body),
            SessionError::ValidationFailed { .. } => ApiError::BadRequest(body),
            SessionError::Busy(_) | SessionError::Unavailable(_) => ApiError::Conflict(body),
            SessionError::CouncilUnreachable | SessionError::InvalidResponse => {
                ApiError::BadGateway(body)
            }
            SessionError::LimitReached => ApiError::ServiceUnavailable(body),
            SessionError::Infrastructure(_) => ApiError::Internal(body),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        let code = match &error {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::OutOfRange { .. } => ErrorCode::ValidationFailed,
        };
        ApiError::bad_request(code, error.to_string())
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::Identity(e) => ApiError::bad_request(e.code(), e.to_string()),
            LoginError::Storage(e) => e.into(),
        }
    }
}

impl From<PreferenceStoreError> for ApiError {
    fn from(error: PreferenceStoreError) -> Self {
        ApiError::Internal(ErrorResponse::new(ErrorCode::StorageError, error.to_string()))
    }
}

/// Parses a path segment, mapping failures to 400.
pub(crate) fn parse_path<T: std::str::FromStr>(value: &str, field: &str) -> Result<T, ApiError> {
    value.parse().map_err(|_| {
        ApiError::bad_request(ErrorCode::InvalidFormat, format!("Invalid {}: {}", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::identity::IdentityError;
    use crate::domain::session::Tool;

    #[test]
    fn session_errors_map_to_statuses() {
        let cases = [
            (SessionError::NotFound(SessionId::new()), StatusCode::NOT_FOUND),
            (SessionError::validation("scenario", "empty"), StatusCode::BAD_REQUEST),
            (SessionError::Busy(Tool::Report), StatusCode::CONFLICT),
            (SessionError::Unavailable(Tool::Risks), StatusCode::CONFLICT),
            (SessionError::CouncilUnreachable, StatusCode::BAD_GATEWAY),
            (SessionError::InvalidResponse, StatusCode::BAD_GATEWAY),
            (SessionError::LimitReached, StatusCode::SERVICE_UNAVAILABLE),
            (SessionError::Infrastructure("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn body_carries_code_and_user_message() {
        let body = ApiError::from(SessionError::CouncilUnreachable).into_body();
        assert_eq!(body.error_code, "COUNCIL_UNREACHABLE");
        assert_eq!(body.message, "The council could not be reached. Please try again.");
    }

    #[test]
    fn identity_errors_are_bad_requests() {
        let error = ApiError::from(LoginError::Identity(IdentityError::InvalidEmail));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.into_body().message, "Invalid email format.");
    }

    #[test]
    fn bad_path_segment_is_rejected() {
        let error = parse_path::<SessionId>("nope", "session id").unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }
}
