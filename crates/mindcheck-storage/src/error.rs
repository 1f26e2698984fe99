use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session store lock poisoned")]
    Poisoned,

    #[error("session store error: {0}")]
    Backend(String),
}
