//! LoginHandler - drives the demonstration login and remembers the user.

use tokio::sync::Mutex;

use crate::application::preferences::Preferences;
use crate::domain::identity::{IdentityError, LoginFlow, LoginStep, User};
use crate::ports::PreferenceStoreError;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("could not remember user: {0}")]
    Storage(#[from] PreferenceStoreError),
}

/// Holds the one login form this process serves.
pub struct LoginHandler {
    flow: Mutex<LoginFlow>,
    preferences: Preferences,
}

impl LoginHandler {
    pub fn new(preferences: Preferences, max_input_length: usize) -> Self {
        Self {
            flow: Mutex::new(LoginFlow::new(max_input_length)),
            preferences,
        }
    }

    /// Step one. Returns the step the form is on afterwards.
    pub async fn submit_details(&self, name: &str, email: &str) -> Result<LoginStep, LoginError> {
        let mut flow = self.flow.lock().await;
        flow.submit_details(name, email)?;
        Ok(flow.step())
    }

    /// Step two. Saves and returns the user on success.
    pub async fn verify(&self, code: &str) -> Result<User, LoginError> {
        let user = {
            let mut flow = self.flow.lock().await;
            let user = flow.verify(code)?;
            flow.clear();
            user
        };
        self.preferences.save_user(&user).await?;
        tracing::info!("User logged in");
        Ok(user)
    }

    pub async fn back(&self) -> LoginStep {
        let mut flow = self.flow.lock().await;
        flow.back();
        flow.step()
    }

    pub async fn current_user(&self) -> Result<Option<User>, LoginError> {
        Ok(self.preferences.user().await?)
    }

    pub async fn logout(&self) -> Result<(), LoginError> {
        self.preferences.clear_user().await?;
        tracing::info!("User logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPreferenceStore;
    use std::sync::Arc;

    fn handler() -> LoginHandler {
        LoginHandler::new(Preferences::new(Arc::new(InMemoryPreferenceStore::new())), 4000)
    }

    #[tokio::test]
    async fn full_login_saves_user() {
        let handler = handler();

        assert_eq!(
            handler.submit_details("Jane <b>", "jane@example.com").await.unwrap(),
            LoginStep::Code
        );
        let user = handler.verify("123456").await.unwrap();

        assert_eq!(user, User::logged_in("Jane", "jane@example.com"));
        assert_eq!(handler.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn verify_before_details_fails() {
        let err = handler().verify("123456").await.unwrap_err();
        assert!(matches!(err, LoginError::Identity(IdentityError::DetailsRequired)));
    }

    #[tokio::test]
    async fn bad_code_keeps_code_step() {
        let handler = handler();
        handler.submit_details("Jane", "jane@example.com").await.unwrap();

        let err = handler.verify("12345").await.unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid 6-digit code.");
        assert!(handler.verify("654321").await.is_ok());
    }

    #[tokio::test]
    async fn back_and_logout() {
        let handler = handler();
        handler.submit_details("Jane", "jane@example.com").await.unwrap();
        assert_eq!(handler.back().await, LoginStep::Details);

        handler.submit_details("Jane", "jane@example.com").await.unwrap();
        handler.verify("000000").await.unwrap();
        handler.logout().await.unwrap();
        assert_eq!(handler.current_user().await.unwrap(), None);
    }
}
