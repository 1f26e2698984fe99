use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::session::SessionStore;

/// Load a JSON value from the session store. Returns `None` if the key is
/// absent.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn SessionStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Save a JSON value to the session store, replacing any previous value.
pub fn save_state<T: Serialize>(
    store: &dyn SessionStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, body)
}
