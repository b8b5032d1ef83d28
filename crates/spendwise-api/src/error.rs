//! Error types for spendwise-api

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status and (possibly) a
    /// `{message}` body
    #[error("Backend error ({status}): {message:?}")]
    Backend {
        status: u16,
        message: Option<String>,
    },

    #[error("Request failed: {message}")]
    Request { message: String },

    #[error("Invalid response body: {message}")]
    InvalidResponse { message: String },
}

impl ApiError {
    /// Backend-provided message, if the response carried one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the backend message verbatim when
    /// present, otherwise the given fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message()
            .map(|m| m.to_string())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Request {
            message: error.to_string(),
        }
    }
}

/// Result type with ApiError
pub type ApiResult<T> = Result<T, ApiError>;
