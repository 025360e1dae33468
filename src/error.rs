//! Error handling for the job compass application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, CompassError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CompassError {
    fn from(err: anyhow::Error) -> Self {
        CompassError::Processing(err.to_string())
    }
}

/// Background load tasks that panic or get cancelled surface as processing errors
impl From<tokio::task::JoinError> for CompassError {
    fn from(err: tokio::task::JoinError) -> Self {
        CompassError::Processing(format!("Load task failed: {}", err))
    }
}
