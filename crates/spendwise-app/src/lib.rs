//! Terminal presentation layer for SpendWise
//!
//! Screens are organized into modules:
//! - screens::auth: Login, registration, logout
//! - screens::records: Record tables, filters, create/edit/delete
//! - screens::profile: Profile view, credential changes, account deletion

pub mod error;
pub mod notifications;
pub mod prompt;
pub mod screens;

use spendwise_api::{GatewayRef, HttpGateway};
use spendwise_config::Config;
use spendwise_core::{CoreResult, Session, SessionStore};
use std::sync::Arc;

pub use error::{AppError, AppResult};
pub use notifications::{Notification, NotificationKind, NotificationQueue};

/// Application state shared by every screen
pub struct App {
    pub config: Config,
    pub gateway: GatewayRef,
    pub sessions: SessionStore,
    pub notifications: NotificationQueue,
}

impl App {
    /// Create the application over the HTTP gateway
    pub fn new(config: Config) -> Self {
        let gateway = Arc::new(HttpGateway::new(config.api_base()));
        Self::with_gateway(config, gateway)
    }

    /// Create the application over an arbitrary gateway
    pub fn with_gateway(config: Config, gateway: GatewayRef) -> Self {
        let sessions = SessionStore::new(config.session_path());
        let notifications = NotificationQueue::new(config.notifications.max_visible);
        Self {
            config,
            gateway,
            sessions,
            notifications,
        }
    }

    /// The current session, if any
    pub fn session(&self) -> CoreResult<Option<Session>> {
        self.sessions.load()
    }

    /// The current session, or `AppError::Unauthorized`
    pub fn require_session(&self) -> AppResult<Session> {
        match self.sessions.load() {
            Ok(Some(session)) => Ok(session),
            Ok(None) => Err(AppError::Unauthorized),
            Err(error) => {
                log::error!("Session load failed: {}", error);
                Err(AppError::Unauthorized)
            }
        }
    }

    /// Print and clear pending notifications
    pub fn flush_notifications(&mut self) {
        self.notifications.flush();
    }
}

/// Greeting shown instead of session-requiring screens
pub fn render_unauthenticated() -> String {
    [
        "SpendWise",
        "",
        "Скористайтесь нашим сервісом",
        "",
        "Увійти:            spendwise login --email <email> --password <пароль>",
        "Зареєструватися:   spendwise register --help",
    ]
    .join("\n")
}
