use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use crate::shared::error::StorageError;

/// Writes artifacts as pretty-printed JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    base_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Serializes `value` to `<base_dir>/<filename>`, replacing any previous
    /// file. The content lands in a temporary sibling first and is renamed
    /// into place, so readers never observe a partial file.
    pub async fn write<T>(&self, filename: &str, value: &T) -> Result<PathBuf, StorageError>
    where
        T: Serialize + ?Sized,
    {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.base_dir.clone(),
                source,
            })?;

        let body = serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialize {
            name: filename.to_string(),
            source,
        })?;

        let path = self.path_for(filename);
        let staging = self.base_dir.join(format!(".{}.tmp", filename));

        if let Err(source) = fs::write(&staging, body.as_bytes()).await {
            let _ = fs::remove_file(&staging).await;
            return Err(StorageError::Write { path, source });
        }
        if let Err(source) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(StorageError::Write { path, source });
        }

        debug!("Wrote {} bytes to {}", body.len(), path.display());
        info!("Saved {}", path.display());
        Ok(path)
    }

    pub async fn read<T: DeserializeOwned>(&self, filename: &str) -> Result<T, StorageError> {
        let path = self.path_for(filename);
        let text = fs::read_to_string(&path)
            .await
            .map_err(|source| StorageError::Read {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| StorageError::Parse { path, source })
    }
}
