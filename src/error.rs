//! Error handling for the resume profiler

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Unknown job category: {0}")]
    UnknownCategory(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ProfilerError>;

/// Convert anyhow errors (model2vec-rs surface) to our custom error type
impl From<anyhow::Error> for ProfilerError {
    fn from(err: anyhow::Error) -> Self {
        ProfilerError::Embedding(err.to_string())
    }
}
