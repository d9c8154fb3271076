//! Preference Store Port - Interface for remembered key/value settings.
//!
//! Values are opaque strings; typed access (theme, profile) lives in the
//! application layer.

use async_trait::async_trait;

/// Errors that can occur during preference storage operations.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceStoreError {
    #[error("Failed to serialize preferences: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize preferences: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value. Missing keys return `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;

    /// Remove a value. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), PreferenceStoreError>;
}
