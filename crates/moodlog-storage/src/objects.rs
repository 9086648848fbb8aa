use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::error::StorageError;

/// A directory of objects addressed by slash-separated keys.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to a path under the root. Keys are relative and may not
    /// climb out of the root.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let valid = !key.is_empty()
            && !key.contains('\\')
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    /// Read an object.
    pub async fn get_object(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::read(&path).await.map_err(|e| io_error(key, e))
    }

    /// Write an object, replacing any existing one.
    ///
    /// The body goes to a temporary sibling first and is renamed into place,
    /// so readers never see a half-written object.
    pub async fn put_object(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(key, e))?;
        }

        let tmp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&tmp_path, &body)
            .await
            .map_err(|e| io_error(key, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| io_error(key, e))?;
        }

        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| io_error(key, e))?;

        tracing::debug!(key, bytes = body.len(), "object written");
        Ok(())
    }

    /// Delete an object. Fails with `NotFound` if it does not exist.
    pub async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| io_error(key, e))?;
        tracing::debug!(key, "object deleted");
        Ok(())
    }

    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| io_error(key, e))
    }

    /// List the keys directly under `prefix`, which must name a directory
    /// (e.g. `"checkins/<user>/"`). A missing directory lists as empty.
    /// Keys are returned in lexical order.
    pub async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let dir = self.path_for(prefix.trim_end_matches('/'))?;
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(prefix, e)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(prefix, e))?
        {
            let file_type = entry.file_type().await.map_err(|e| io_error(prefix, e))?;
            if !file_type.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.ends_with(".tmp") {
                continue;
            }
            keys.push(format!("{}/{name}", prefix.trim_end_matches('/')));
        }
        keys.sort();
        Ok(keys)
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    if source.kind() == ErrorKind::NotFound {
        StorageError::NotFound {
            key: key.to_string(),
        }
    } else {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}
