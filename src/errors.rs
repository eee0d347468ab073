use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid date '{0}', expected DD.MM.YYYY")]
    Format(String),

    #[error("Cannot read people from {path:?}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AppError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::CorruptData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
