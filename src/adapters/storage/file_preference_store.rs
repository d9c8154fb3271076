//! File-backed Preference Store Adapter
//!
//! Keeps every preference in a single JSON object on disk. The file is read
//! once when the store is opened; every change rewrites it.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{PreferenceStore, PreferenceStoreError};

/// Preferences persisted as a JSON file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open the store, loading any existing file.
    ///
    /// A missing file starts empty. A file that is not a JSON object of
    /// strings is logged and ignored; it will be overwritten on the next write.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceStoreError> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path).await {
            Ok(json) => match serde_json::from_str::<BTreeMap<String, String>>(&json) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Ignoring unreadable preferences file"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(PreferenceStoreError::IoError(e.to_string())),
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "Preferences loaded");

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole map through a temporary file and rename it into place.
    async fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceStoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceStoreError::SerializationFailed(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        // The lock is held through the write so concurrent changes land in order.
        let mut values = self.values.lock().await;
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next).await?;
        *values = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceStoreError> {
        let mut values = self.values.lock().await;
        if !values.contains_key(key) {
            return Ok(());
        }
        let mut next = values.clone();
        next.remove(key);
        self.persist(&next).await?;
        *values = next;
        Ok(())
    }
}
