//! Scenario input limits

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::DEFAULT_MAX_INPUT_LENGTH;

const MAX_ALLOWED_LENGTH: usize = 20_000;

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Characters kept after sanitizing any free-text input
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_length == 0 || self.max_length > MAX_ALLOWED_LENGTH {
            return Err(ValidationError::InvalidMaxLength {
                max: MAX_ALLOWED_LENGTH,
            });
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

fn default_max_length() -> usize {
    DEFAULT_MAX_INPUT_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(ScenarioConfig::default().max_length, 4000);
        assert!(ScenarioConfig { max_length: 20_000 }.validate().is_ok());
        assert!(ScenarioConfig { max_length: 0 }.validate().is_err());
        assert!(ScenarioConfig { max_length: 20_001 }.validate().is_err());
    }
}
