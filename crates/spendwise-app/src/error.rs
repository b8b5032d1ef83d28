//! Error types for spendwise-app

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The command failed; the notification queue already carries the
    /// user-facing message
    #[error("Command failed")]
    CommandFailed,

    #[error("No active session")]
    Unauthorized,

    #[error("IO error")]
    IoError(#[from] std::io::Error),
}

/// Result type with AppError
pub type AppResult<T> = Result<T, AppError>;
