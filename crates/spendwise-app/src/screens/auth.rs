//! Authentication screens - login, registration, logout
//!
//! Handlers:
//! - login: Authenticate and persist the session
//! - register: Create an account (no session is created)
//! - logout: Tear down the persisted session, no network call

use spendwise_api::RegisterRequest;
use spendwise_core::validation::{validate_login, validate_registration};
use spendwise_core::{RegistrationForm, Session};

use crate::{App, AppError, AppResult};

const FALLBACK_LOGIN: &str = "Сталася невідома помилка";
const FALLBACK_REGISTER: &str = "Помилка реєстрації.";
const MSG_LOGIN_OK: &str = "Вхід виконано успішно!";
const MSG_REGISTER_OK: &str = "Реєстрація пройшла успішно! Тепер увійдіть у свій акаунт.";

/// Log in and persist the session object
pub async fn login(app: &mut App, email: &str, password: &str) -> AppResult<()> {
    if let Err(error) = validate_login(email, password) {
        app.notifications.error(error.user_message(FALLBACK_LOGIN));
        return Err(AppError::CommandFailed);
    }

    match app.gateway.login(email, password).await {
        Ok(user) => {
            let session = Session {
                id: user.id,
                username: user.username,
            };
            if let Err(error) = app.sessions.save(&session) {
                log::error!("Failed to persist session: {}", error);
                app.notifications.error(FALLBACK_LOGIN);
                return Err(AppError::CommandFailed);
            }
            app.notifications.success(MSG_LOGIN_OK);
            Ok(())
        }
        Err(error) => {
            log::debug!("Login failed: {}", error);
            app.notifications.error(error.user_message(FALLBACK_LOGIN));
            Err(AppError::CommandFailed)
        }
    }
}

/// Register a new account; the user logs in separately afterwards
pub async fn register(app: &mut App, form: RegistrationForm) -> AppResult<()> {
    if let Err(error) = validate_registration(&form) {
        app.notifications
            .error(error.user_message(FALLBACK_REGISTER));
        return Err(AppError::CommandFailed);
    }

    let request = RegisterRequest {
        username: form.username,
        email: form.email,
        password: form.password,
        confirm_password: form.confirm_password,
        codeword: form.codeword,
    };
    match app.gateway.register(request).await {
        Ok(message) => {
            app.notifications
                .success(message.unwrap_or_else(|| MSG_REGISTER_OK.to_string()));
            Ok(())
        }
        Err(error) => {
            log::debug!("Registration failed: {}", error);
            app.notifications
                .error(error.user_message(FALLBACK_REGISTER));
            Err(AppError::CommandFailed)
        }
    }
}

/// Drop the persisted session; no backend call is involved
pub fn logout(app: &mut App) -> AppResult<()> {
    match app.sessions.clear() {
        Ok(()) => Ok(()),
        Err(error) => {
            log::error!("Failed to clear session: {}", error);
            Err(AppError::CommandFailed)
        }
    }
}

// ==================== Tests ====================
