//! Client-side form validation
//!
//! Every form is checked before any network call; the first failing
//! rule blocks submission and carries the localized message the
//! notification layer shows verbatim.

use rust_decimal::Decimal;

use super::error::{CoreError, CoreResult};
use super::models::RecordDraft;

// Record form messages
pub const MSG_NAME_REQUIRED: &str = "Будь ласка, введіть назву запису.";
pub const MSG_CATEGORY_REQUIRED: &str = "Будь ласка, оберіть категорію.";
pub const MSG_AMOUNT_POSITIVE: &str = "Сума повинна бути більше 0.";
pub const MSG_DATE_REQUIRED: &str = "Будь ласка, оберіть дату і час.";

// Credential form messages
pub const MSG_FIELDS_REQUIRED: &str = "Будь ласка, заповніть усі поля";
pub const MSG_EMAIL_INVALID: &str = "Email не відповідає вимогам";
pub const MSG_PASSWORDS_MISMATCH: &str = "Паролі не співпадють.";
pub const MSG_PASSWORD_WEAK: &str = "Пароль не відповідає вимогам.";
pub const MSG_PASSWORD_SAME: &str = "Новий пароль не повинен збігатися зі старим";
pub const MSG_EMAIL_SAME: &str = "Новий email не повинен збігатися зі старим";

fn validation_error(message: &str) -> CoreError {
    CoreError::ValidationError {
        message: message.to_string(),
    }
}

fn email_pattern() -> &'static regex::Regex {
    static EMAIL: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    EMAIL.get_or_init(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Registration form fields
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub codeword: String,
}

/// Validate the record form; rules run in order name, category,
/// amount, date. Returns the parsed amount on success.
pub fn validate_record(draft: &RecordDraft) -> CoreResult<Decimal> {
    if draft.name.trim().is_empty() {
        return Err(validation_error(MSG_NAME_REQUIRED));
    }
    if draft.category.trim().is_empty() {
        return Err(validation_error(MSG_CATEGORY_REQUIRED));
    }
    let amount = draft
        .amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_| validation_error(MSG_AMOUNT_POSITIVE))?;
    if amount <= Decimal::ZERO {
        return Err(validation_error(MSG_AMOUNT_POSITIVE));
    }
    if draft.date_time.trim().is_empty() {
        return Err(validation_error(MSG_DATE_REQUIRED));
    }
    Ok(amount)
}

/// Validate the login form: both fields required
pub fn validate_login(email: &str, password: &str) -> CoreResult<()> {
    if email.is_empty() || password.is_empty() {
        return Err(validation_error(MSG_FIELDS_REQUIRED));
    }
    Ok(())
}

/// Validate the registration form: all fields required, email shape,
/// matching passwords, password strength (at least 8 characters with
/// one lowercase and one uppercase letter)
pub fn validate_registration(form: &RegistrationForm) -> CoreResult<()> {
    if form.username.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
        || form.codeword.is_empty()
    {
        return Err(validation_error(MSG_FIELDS_REQUIRED));
    }
    if !email_pattern().is_match(&form.email) {
        return Err(validation_error(MSG_EMAIL_INVALID));
    }
    if form.password != form.confirm_password {
        return Err(validation_error(MSG_PASSWORDS_MISMATCH));
    }
    if !password_is_strong(&form.password) {
        return Err(validation_error(MSG_PASSWORD_WEAK));
    }
    Ok(())
}

fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
}

/// Validate the password change form
pub fn validate_password_change(
    old_password: &str,
    codeword: &str,
    new_password: &str,
) -> CoreResult<()> {
    if old_password.is_empty() || codeword.is_empty() || new_password.is_empty() {
        return Err(validation_error(MSG_FIELDS_REQUIRED));
    }
    if old_password == new_password {
        return Err(validation_error(MSG_PASSWORD_SAME));
    }
    Ok(())
}

/// Validate the email change form
pub fn validate_email_change(old_email: &str, new_email: &str, codeword: &str) -> CoreResult<()> {
    if old_email.is_empty() || codeword.is_empty() || new_email.is_empty() {
        return Err(validation_error(MSG_FIELDS_REQUIRED));
    }
    if old_email == new_email {
        return Err(validation_error(MSG_EMAIL_SAME));
    }
    Ok(())
}

// ==================== Tests ====================
