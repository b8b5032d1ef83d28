//! Error types for spendwise-core
//!
//! This module provides error handling for the client's domain logic,
//! including error codes, severities, and the user-facing message
//! resolution used by the presentation layer.

use serde::{Deserialize, Serialize};
use spendwise_api::ApiError;
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Client-side validation failed
    ValidationError,
    /// No active session
    Unauthorized,
    /// Record not found in the current snapshot
    RecordNotFound,
    /// Backend call failed
    BackendError,
    /// Invalid data format
    InvalidFormat,
    /// IO error
    IoError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::Unauthorized => write!(f, "UNAUTHORIZED"),
            ErrorCode::RecordNotFound => write!(f, "RECORD_NOT_FOUND"),
            ErrorCode::BackendError => write!(f, "BACKEND_ERROR"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for spendwise-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {message}")]
    ValidationError { message: String },

    #[error("No active session")]
    Unauthorized,

    #[error("Record not found: {id}")]
    RecordNotFound { id: i64 },

    #[error("Backend error: {0}")]
    Backend(#[from] ApiError),

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("IO error occurred")]
    IoError,
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::Unauthorized => ErrorCode::Unauthorized,
            CoreError::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            CoreError::Backend(_) => ErrorCode::BackendError,
            CoreError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            CoreError::IoError => ErrorCode::IoError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::Unauthorized => ErrorSeverity::Warning,
            CoreError::RecordNotFound { .. } => ErrorSeverity::Info,
            CoreError::Backend(_) => ErrorSeverity::Error,
            CoreError::InvalidFormat { .. } => ErrorSeverity::Error,
            CoreError::IoError => ErrorSeverity::Error,
        }
    }

    /// Message to render as a notification: validation messages and
    /// backend `{message}` bodies verbatim, the fallback otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            CoreError::ValidationError { message } => message.clone(),
            CoreError::Backend(error) => error.user_message(fallback),
            _ => fallback.to_string(),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<io::Error> for CoreError {
    fn from(_error: io::Error) -> Self {
        CoreError::IoError
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::Unauthorized.to_string(), "UNAUTHORIZED");
        assert_eq!(ErrorCode::BackendError.to_string(), "BACKEND_ERROR");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::ValidationError {
            message: "Сума повинна бути більше 0.".to_string(),
        };
        assert_eq!(error.code(), ErrorCode::ValidationError);

        let error = CoreError::RecordNotFound { id: 12 };
        assert_eq!(error.code(), ErrorCode::RecordNotFound);
    }

    #[test]
    fn test_core_error_severity() {
        assert_eq!(CoreError::Unauthorized.severity(), ErrorSeverity::Warning);
        assert_eq!(CoreError::IoError.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_validation_message_shown_verbatim() {
        let error = CoreError::ValidationError {
            message: "Будь ласка, заповніть усі поля".to_string(),
        };
        assert_eq!(
            error.user_message("Сталася невідома помилка"),
            "Будь ласка, заповніть усі поля"
        );
    }

    #[test]
    fn test_backend_message_shown_verbatim() {
        let error = CoreError::Backend(ApiError::Backend {
            status: 401,
            message: Some("Невірний email або пароль".to_string()),
        });
        assert_eq!(
            error.user_message("Сталася невідома помилка"),
            "Невірний email або пароль"
        );
    }

    #[test]
    fn test_fallback_message() {
        let error = CoreError::Backend(ApiError::Request {
            message: "connection refused".to_string(),
        });
        assert_eq!(
            error.user_message("Помилка реєстрації."),
            "Помилка реєстрації."
        );
    }
}
