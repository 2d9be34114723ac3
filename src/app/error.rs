use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("Highlighting error: {0}")]
    Highlight(#[from] syntect::Error),

    #[error("API key rejected: {0}")]
    InvalidApiKey(String),

    #[error("AI service error: {0}")]
    Ai(String),

    #[error("Print error: {0}")]
    Print(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
