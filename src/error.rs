// src/error.rs
// Standardized error types for Foresight

use thiserror::Error;

/// Main error type for the Foresight library
#[derive(Error, Debug)]
pub enum ForesightError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Convenience type alias for Result using ForesightError
pub type Result<T> = std::result::Result<T, ForesightError>;
