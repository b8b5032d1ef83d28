//! Profile screen - account data, credential changes, deletion
//!
//! Handlers:
//! - show_profile: Username, email, and record counts
//! - change_password: Old password + codeword + new password
//! - change_email: Old email + new email + codeword
//! - delete_account: Confirmed, tears down the session

use spendwise_api::{ChangeEmailRequest, ChangePasswordRequest, ProfilePayload};
use spendwise_core::validation::{validate_email_change, validate_password_change};

use crate::{prompt, App, AppError, AppResult};

const FALLBACK_PROFILE: &str = "Помилка завантаження даних профілю.";
const FALLBACK_PASSWORD: &str = "Помилка зміни паролю.";
const FALLBACK_EMAIL: &str = "Помилка зміни email.";
const FALLBACK_DELETE: &str = "Помилка видалення акаунта.";
const MSG_DELETE_OK: &str = "Акаунт успішно видалено.";
const MSG_CONFIRM_DELETE: &str =
    "Ви впевнені, що хочете видалити свій акаунт? Ця дія є незворотною.";

/// Render profile data for the active session
pub async fn show_profile(app: &mut App) -> AppResult<()> {
    let session = app.require_session()?;

    match app.gateway.profile(session.id).await {
        Ok(profile) => {
            println!("{}", render_profile(&profile));
            Ok(())
        }
        Err(error) => {
            log::debug!("Profile fetch failed: {}", error);
            app.notifications
                .error(error.user_message(FALLBACK_PROFILE));
            Err(AppError::CommandFailed)
        }
    }
}

fn render_profile(profile: &ProfilePayload) -> String {
    [
        "Профіль користувача".to_string(),
        format!("Ім'я користувача: {}", profile.username),
        format!("Email: {}", profile.email),
        format!("Записів у доходах: {}", profile.incomes),
        format!("Записів у витратах: {}", profile.expenses),
    ]
    .join("\n")
}

/// Change the account password
pub async fn change_password(
    app: &mut App,
    old_password: &str,
    codeword: &str,
    new_password: &str,
) -> AppResult<()> {
    let session = app.require_session()?;

    if let Err(error) = validate_password_change(old_password, codeword, new_password) {
        app.notifications
            .error(error.user_message(FALLBACK_PASSWORD));
        return Err(AppError::CommandFailed);
    }

    let request = ChangePasswordRequest {
        user_id: session.id,
        old_password: old_password.to_string(),
        codeword: codeword.to_string(),
        new_password: new_password.to_string(),
    };
    match app.gateway.change_password(request).await {
        Ok(message) => {
            // The backend message is the success notification
            if let Some(message) = message {
                app.notifications.success(message);
            }
            Ok(())
        }
        Err(error) => {
            app.notifications
                .error(error.user_message(FALLBACK_PASSWORD));
            Err(AppError::CommandFailed)
        }
    }
}

/// Change the account email
pub async fn change_email(
    app: &mut App,
    old_email: &str,
    new_email: &str,
    codeword: &str,
) -> AppResult<()> {
    let session = app.require_session()?;

    if let Err(error) = validate_email_change(old_email, new_email, codeword) {
        app.notifications.error(error.user_message(FALLBACK_EMAIL));
        return Err(AppError::CommandFailed);
    }

    let request = ChangeEmailRequest {
        user_id: session.id,
        old_email: old_email.to_string(),
        new_email: new_email.to_string(),
        codeword: codeword.to_string(),
    };
    match app.gateway.change_email(request).await {
        Ok(message) => {
            if let Some(message) = message {
                app.notifications.success(message);
            }
            Ok(())
        }
        Err(error) => {
            app.notifications.error(error.user_message(FALLBACK_EMAIL));
            Err(AppError::CommandFailed)
        }
    }
}

/// Delete the account and tear down the session
pub async fn delete_account(app: &mut App, assume_yes: bool) -> AppResult<()> {
    let session = app.require_session()?;

    if !prompt::confirm(MSG_CONFIRM_DELETE, assume_yes)? {
        return Ok(());
    }

    match app.gateway.delete_account(session.id).await {
        Ok(()) => {
            if let Err(error) = app.sessions.clear() {
                log::error!("Failed to clear session after deletion: {}", error);
            }
            app.notifications.success(MSG_DELETE_OK);
            Ok(())
        }
        Err(error) => {
            app.notifications
                .error(error.user_message(FALLBACK_DELETE));
            Err(AppError::CommandFailed)
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{payload, test_app, test_app_logged_in, MockGateway};
    use crate::NotificationKind;
    use spendwise_core::validation::{MSG_EMAIL_SAME, MSG_FIELDS_REQUIRED, MSG_PASSWORD_SAME};
    use spendwise_core::RecordType;

    #[tokio::test]
    async fn test_show_profile_requires_session() {
        let gateway = MockGateway::new();
        let mut app = test_app(gateway.clone(), "profile-unauth");
        assert!(matches!(
            show_profile(&mut app).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_show_profile_failure_notifies() {
        let gateway = MockGateway::new();
        gateway.fail_without_message();
        let mut app = test_app_logged_in(gateway.clone(), "profile-fail");

        assert!(show_profile(&mut app).await.is_err());

        let last = app.notifications.visible().last().unwrap();
        assert_eq!(last.message, FALLBACK_PROFILE);
        app.sessions.clear().unwrap();
    }

    #[test]
    fn test_render_profile_counts() {
        let profile = ProfilePayload {
            username: "olena".to_string(),
            email: "olena@example.com".to_string(),
            incomes: 2,
            expenses: 5,
        };
        let text = render_profile(&profile);
        assert!(text.contains("Ім'я користувача: olena"));
        assert!(text.contains("Записів у доходах: 2"));
        assert!(text.contains("Записів у витратах: 5"));
    }

    #[tokio::test]
    async fn test_change_password_validation_first() {
        let gateway = MockGateway::new();
        let mut app = test_app_logged_in(gateway.clone(), "password-validate");

        assert!(change_password(&mut app, "", "слово", "NewPass1")
            .await
            .is_err());
        assert_eq!(
            app.notifications.visible().last().unwrap().message,
            MSG_FIELDS_REQUIRED
        );

        assert!(change_password(&mut app, "Same1234", "слово", "Same1234")
            .await
            .is_err());
        assert_eq!(
            app.notifications.visible().last().unwrap().message,
            MSG_PASSWORD_SAME
        );
        app.sessions.clear().unwrap();
    }

    #[tokio::test]
    async fn test_change_password_shows_backend_message() {
        let gateway = MockGateway::new();
        gateway.set_change_message("Пароль змінено");
        let mut app = test_app_logged_in(gateway.clone(), "password-ok");

        change_password(&mut app, "OldPass1", "слово", "NewPass1")
            .await
            .unwrap();

        let last = app.notifications.visible().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, "Пароль змінено");
        app.sessions.clear().unwrap();
    }

    #[tokio::test]
    async fn test_change_password_quiet_without_message() {
        let gateway = MockGateway::new();
        let mut app = test_app_logged_in(gateway.clone(), "password-quiet");

        change_password(&mut app, "OldPass1", "слово", "NewPass1")
            .await
            .unwrap();

        assert!(app.notifications.is_empty());
        app.sessions.clear().unwrap();
    }

    #[tokio::test]
    async fn test_change_email_same_address_blocked() {
        let gateway = MockGateway::new();
        let mut app = test_app_logged_in(gateway.clone(), "email-same");

        assert!(change_email(&mut app, "a@b.ua", "a@b.ua", "слово")
            .await
            .is_err());
        assert_eq!(
            app.notifications.visible().last().unwrap().message,
            MSG_EMAIL_SAME
        );
        app.sessions.clear().unwrap();
    }

    #[tokio::test]
    async fn test_change_email_backend_fallback() {
        let gateway = MockGateway::new();
        gateway.fail_without_message();
        let mut app = test_app_logged_in(gateway.clone(), "email-fail");

        assert!(change_email(&mut app, "a@b.ua", "c@d.ua", "слово")
            .await
            .is_err());
        assert_eq!(
            app.notifications.visible().last().unwrap().message,
            FALLBACK_EMAIL
        );
        app.sessions.clear().unwrap();
    }

    #[tokio::test]
    async fn test_delete_account_tears_down_session() {
        let gateway = MockGateway::with_records(vec![payload(
            1,
            RecordType::Income,
            "Зарплата",
            "1500.00",
            "2024-05-01 09:00:00",
        )]);
        let mut app = test_app_logged_in(gateway.clone(), "delete-account");

        delete_account(&mut app, true).await.unwrap();

        assert_eq!(gateway.delete_account_calls(), 1);
        assert!(app.session().unwrap().is_none());
        let last = app.notifications.visible().last().unwrap();
        assert_eq!(last.message, MSG_DELETE_OK);
    }

    #[tokio::test]
    async fn test_delete_account_failure_keeps_session() {
        let gateway = MockGateway::new();
        gateway.fail_with_message("Акаунт не знайдено");
        let mut app = test_app_logged_in(gateway.clone(), "delete-fail");

        assert!(delete_account(&mut app, true).await.is_err());

        assert!(app.session().unwrap().is_some());
        assert_eq!(
            app.notifications.visible().last().unwrap().message,
            "Акаунт не знайдено"
        );
        app.sessions.clear().unwrap();
    }
}
