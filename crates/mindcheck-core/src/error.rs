use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown suggestion field: {0}")]
    UnknownSuggestionField(String),
}
