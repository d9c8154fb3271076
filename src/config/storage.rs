//! Preference storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the theme and remembered user
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,

    /// Sessions untouched for this long are evicted
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,

    /// Upper bound on live sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.preferences_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPreferencesPath);
        }
        if self.session_idle_secs == 0 || self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionLimits);
        }
        Ok(())
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: default_preferences_path(),
            session_idle_secs: default_session_idle_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("./data/preferences.json")
}

fn default_session_idle_secs() -> u64 {
    3600
}

fn default_max_sessions() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = StorageConfig::default();
        assert_eq!(config.preferences_path, PathBuf::from("./data/preferences.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = StorageConfig {
            preferences_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyPreferencesPath));
    }

    #[test]
    fn test_session_limits() {
        let config = StorageConfig::default();
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(3600));
        assert_eq!(config.max_sessions, 1000);

        let config = StorageConfig {
            max_sessions: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionLimits));
    }
}
