//! Two-step demonstration login.
//!
//! Step one collects a name and email, step two accepts any six-digit code.
//! Nothing is issued or verified remotely; this only gates a local profile.

use serde::{Deserialize, Serialize};

use super::{validate_email, validate_otp, IdentityError, User};
use crate::domain::foundation::sanitize_input;

/// Where the form currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStep {
    Details,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFlow {
    step: LoginStep,
    name: String,
    email: String,
    max_length: usize,
}

impl LoginFlow {
    pub fn new(max_length: usize) -> Self {
        Self {
            step: LoginStep::Details,
            name: String::new(),
            email: String::new(),
            max_length,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    /// Validates step one and advances to the code step.
    pub fn submit_details(&mut self, name: &str, email: &str) -> Result<(), IdentityError> {
        if name.is_empty() || email.is_empty() {
            return Err(IdentityError::MissingFields);
        }
        if !validate_email(email) {
            return Err(IdentityError::InvalidEmail);
        }
        self.name = name.to_string();
        self.email = email.to_string();
        self.step = LoginStep::Code;
        Ok(())
    }

    /// Accepts any six-digit code and yields the logged-in user.
    pub fn verify(&self, code: &str) -> Result<User, IdentityError> {
        if self.step != LoginStep::Code {
            return Err(IdentityError::DetailsRequired);
        }
        if !validate_otp(code) {
            return Err(IdentityError::InvalidCode);
        }
        Ok(User::logged_in(
            sanitize_input(&self.name, self.max_length),
            sanitize_input(&self.email, self.max_length),
        ))
    }

    /// Returns to the details step, keeping what was entered.
    pub fn back(&mut self) {
        self.step = LoginStep::Details;
    }

    /// Clears the form after a completed login.
    pub fn clear(&mut self) {
        self.step = LoginStep::Details;
        self.name.clear();
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> LoginFlow {
        LoginFlow::new(4000)
    }

    #[test]
    fn starts_at_details() {
        assert_eq!(flow().step(), LoginStep::Details);
    }

    #[test]
    fn missing_fields_block_progress() {
        let mut f = flow();
        assert_eq!(f.submit_details("", "a@b.co"), Err(IdentityError::MissingFields));
        assert_eq!(f.submit_details("Jane", ""), Err(IdentityError::MissingFields));
        assert_eq!(f.step(), LoginStep::Details);
    }

    #[test]
    fn malformed_email_blocks_progress() {
        let mut f = flow();
        assert_eq!(f.submit_details("Jane", "jane@example"), Err(IdentityError::InvalidEmail));
        assert_eq!(f.step(), LoginStep::Details);
    }

    #[test]
    fn any_six_digit_code_logs_in() {
        let mut f = flow();
        f.submit_details("Jane <b>Doe</b>", "jane@example.com").unwrap();
        assert_eq!(f.step(), LoginStep::Code);

        let user = f.verify("482913").unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert!(user.logged_in);
    }

    #[test]
    fn bad_code_is_rejected() {
        let mut f = flow();
        f.submit_details("Jane", "jane@example.com").unwrap();
        assert_eq!(f.verify("12345"), Err(IdentityError::InvalidCode));
        assert_eq!(f.step(), LoginStep::Code);
    }

    #[test]
    fn verify_before_details_is_rejected() {
        assert_eq!(flow().verify("123456"), Err(IdentityError::DetailsRequired));
    }

    #[test]
    fn back_returns_to_details() {
        let mut f = flow();
        f.submit_details("Jane", "jane@example.com").unwrap();
        f.back();
        assert_eq!(f.step(), LoginStep::Details);
        assert_eq!(f.verify("123456"), Err(IdentityError::DetailsRequired));
    }
}
