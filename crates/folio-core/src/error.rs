//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio core operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// General I/O error (data document or preference file unreadable)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The data document exists but is not valid JSON in the expected shape
    #[error("Data format error: {0}")]
    Format(#[from] serde_json::Error),

    /// A stored theme preference that is neither "light" nor "dark"
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
