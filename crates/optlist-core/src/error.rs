use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("an option list editor needs a non-empty host id")]
    MissingId,
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;
