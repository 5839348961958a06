//! Error handling for the resume checker application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document parse error: {0}")]
    DocumentParse(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeCheckerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeCheckerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeCheckerError::Embedding(err.to_string())
    }
}

/// Convert rusqlite errors to our custom error type
impl From<rusqlite::Error> for ResumeCheckerError {
    fn from(err: rusqlite::Error) -> Self {
        ResumeCheckerError::Storage(err.to_string())
    }
}
