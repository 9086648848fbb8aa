use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::LocalStore;

/// Load a JSON object from the store.
pub async fn load_state<T: DeserializeOwned>(store: &LocalStore, key: &str) -> Result<T, StorageError> {
    let body = store.get_object(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON object, treating a missing key as `None`.
pub async fn load_optional<T: DeserializeOwned>(
    store: &LocalStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_state(store, key).await {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a value as pretty-printed JSON.
pub async fn save_state<T: Serialize>(store: &LocalStore, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put_object(key, body).await
}

/// Load every JSON object directly under `prefix`.
pub async fn load_all<T: DeserializeOwned>(store: &LocalStore, prefix: &str) -> Result<Vec<T>, StorageError> {
    let mut values = Vec::new();
    for key in store.list_objects(prefix).await? {
        values.push(load_state(store, &key).await?);
    }
    Ok(values)
}
