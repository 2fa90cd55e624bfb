use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Diet sheet unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Diet sheet is not tabular data: {0}")]
    MalformedSource(String),

    #[error("Selection is empty; nothing to save")]
    EmptySelection,

    #[error("Selection not found: {0}")]
    SelectionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DietError>;
