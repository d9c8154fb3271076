//! Typed access to remembered preferences.
//!
//! Stored values that fail to parse are treated as absent and logged.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::identity::User;
use crate::domain::preferences::{Theme, THEME_KEY, USER_KEY};
use crate::ports::{PreferenceStore, PreferenceStoreError};

#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    /// Serializes read-modify-write theme changes.
    theme_lock: Arc<Mutex<()>>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            theme_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current theme, dark unless something valid was saved.
    pub async fn theme(&self) -> Result<Theme, PreferenceStoreError> {
        let Some(raw) = self.store.get(THEME_KEY).await? else {
            return Ok(Theme::default());
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Ok(theme),
            Err(e) => {
                tracing::warn!(key = THEME_KEY, error = %e, "Ignoring stored theme");
                Ok(Theme::default())
            }
        }
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), PreferenceStoreError> {
        let _guard = self.theme_lock.lock().await;
        self.store.set(THEME_KEY, theme.as_str()).await
    }

    /// Flips the theme and returns the new value.
    pub async fn toggle_theme(&self) -> Result<Theme, PreferenceStoreError> {
        let _guard = self.theme_lock.lock().await;
        let theme = self.theme().await?.toggled();
        self.store.set(THEME_KEY, theme.as_str()).await?;
        Ok(theme)
    }

    pub async fn user(&self) -> Result<Option<User>, PreferenceStoreError> {
        let Some(raw) = self.store.get(USER_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(key = USER_KEY, error = %e, "Ignoring stored user");
                Ok(None)
            }
        }
    }

    pub async fn save_user(&self, user: &User) -> Result<(), PreferenceStoreError> {
        let json = serde_json::to_string(user)
            .map_err(|e| PreferenceStoreError::SerializationFailed(e.to_string()))?;
        self.store.set(USER_KEY, &json).await
    }

    pub async fn clear_user(&self) -> Result<(), PreferenceStoreError> {
        self.store.remove(USER_KEY).await
    }
}
