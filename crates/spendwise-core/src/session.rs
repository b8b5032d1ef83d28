//! Session lifecycle
//!
//! The session object `{id, username}` is created on login, persisted
//! to a JSON file between invocations, and destroyed on logout or
//! account deletion. A corrupt session file is treated as no session.

use std::path::PathBuf;

use super::error::{CoreError, CoreResult};
use super::models::Session;

/// File-backed session storage
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over the given session file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the current session, if any
    pub fn load(&self) -> CoreResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                log::warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    error
                );
                Ok(None)
            }
        }
    }

    /// Persist a session (login)
    pub fn save(&self, session: &Session) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(session).map_err(|_| CoreError::IoError)?;
        std::fs::write(&self.path, content)?;
        log::info!("Session saved for user {}", session.username);
        Ok(())
    }

    /// Remove the persisted session (logout, account deletion)
    pub fn clear(&self) -> CoreResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            log::info!("Session cleared");
        }
        Ok(())
    }
}

// ==================== Tests ====================
