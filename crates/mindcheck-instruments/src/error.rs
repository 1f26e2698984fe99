use thiserror::Error;

use mindcheck_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown test: {0}")]
    UnknownTest(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("catalog is not valid JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("question {index} is not the current question (current: {current})")]
    OutOfSequence { index: usize, current: usize },

    #[error("option {option} does not exist for question '{question_id}'")]
    InvalidOption { question_id: String, option: usize },

    #[error("run {0} is already completed")]
    RunCompleted(uuid::Uuid),

    #[error("failed to store result: {0}")]
    Storage(#[from] StorageError),
}
