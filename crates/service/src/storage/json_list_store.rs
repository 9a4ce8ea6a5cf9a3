use std::{marker::PhantomData, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::StorageError;

/// Generic JSON file-backed list store.
///
/// Keeps no state in memory: every `load` reads the whole file and every
/// `save` replaces it. Writes go to a sibling temp file that is renamed over
/// the target, so a concurrent `load` sees either the old or the new array.
/// There is no locking between a `load` and the following `save`.
pub struct JsonListStore<T> {
    file_path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), _records: PhantomData }
    }

    fn display_path(&self) -> String {
        self.file_path.display().to_string()
    }

    /// Read the full collection.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|source| StorageError::Io { path: self.display_path(), source })?;
        let items: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|source| StorageError::Serde { path: self.display_path(), source })?;
        debug!(file = %self.file_path.display(), count = items.len(), "loaded collection");
        Ok(items)
    }

    /// Overwrite the file with `items`, pretty-printed with two-space indentation.
    pub async fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(items)
            .map_err(|source| StorageError::Serde { path: self.display_path(), source })?;

        let tmp_path = self.temp_path();
        if let Err(source) = fs::write(&tmp_path, &data).await {
            // a short write may still have created the temp file
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StorageError::Io { path: tmp_path.display().to_string(), source });
        }

        if let Err(source) = fs::rename(&tmp_path, &self.file_path).await {
            warn!(file = %self.file_path.display(), error = %source, "failed to move temp file into place");
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StorageError::Io { path: self.display_path(), source });
        }
        debug!(file = %self.file_path.display(), count = items.len(), "saved collection");
        Ok(())
    }

    /// Unique per write so that racing saves never share a temp file.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store".to_string());
        self.file_path.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}
