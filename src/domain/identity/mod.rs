//! Identity module - a local, non-cryptographic profile stub.
//!
//! This is a demonstration flow. It stores a display name and email so the
//! front end can greet the user; it authenticates nobody.

mod login_flow;
mod validation;

pub use login_flow::{LoginFlow, LoginStep};
pub use validation::{validate_email, validate_otp};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// The locally remembered profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub logged_in: bool,
}

impl User {
    pub fn logged_in(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            logged_in: true,
        }
    }
}

/// Synchronous form errors; none of them involve a network round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Enter a valid 6-digit code.")]
    InvalidCode,

    #[error("Enter your details first.")]
    DetailsRequired,
}

impl IdentityError {
    pub fn code(&self) -> ErrorCode {
        match self {
            IdentityError::MissingFields => ErrorCode::EmptyField,
            IdentityError::InvalidEmail | IdentityError::InvalidCode => ErrorCode::InvalidFormat,
            IdentityError::DetailsRequired => ErrorCode::ValidationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_like_browser_storage() {
        let user = User::logged_in("Jane", "jane@example.com");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"name":"Jane","email":"jane@example.com","loggedIn":true}"#);
    }

    #[test]
    fn errors_carry_user_facing_text() {
        assert_eq!(IdentityError::InvalidEmail.to_string(), "Invalid email format.");
        assert_eq!(IdentityError::InvalidCode.code(), ErrorCode::InvalidFormat);
    }
}
