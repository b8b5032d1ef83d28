//! Wire types for the SpendWise backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Record type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Income record
    Income,
    /// Expense record
    Expense,
}

impl Default for RecordType {
    fn default() -> Self {
        RecordType::Expense
    }
}

impl std::str::FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(RecordType::Income),
            "expense" => Ok(RecordType::Expense),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordType::Income => write!(f, "income"),
            RecordType::Expense => write!(f, "expense"),
        }
    }
}

/// Authenticated user as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    /// User identifier
    pub id: i64,
    /// Display name
    pub username: String,
    /// Account email (not always present)
    #[serde(default)]
    pub email: Option<String>,
}

/// `POST /api/users/login` body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/users/login` response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserPayload,
}

/// `POST /api/users/register` body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub codeword: String,
}

/// Generic `{message}` response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/profile/:userId` response
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePayload {
    /// Display name
    pub username: String,
    /// Account email
    pub email: String,
    /// Number of income records
    #[serde(default)]
    pub incomes: i64,
    /// Number of expense records
    #[serde(default)]
    pub expenses: i64,
}

/// `POST /api/profile/change-password` body
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    pub codeword: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// `POST /api/profile/change-email` body
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEmailRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "oldEmail")]
    pub old_email: String,
    #[serde(rename = "newEmail")]
    pub new_email: String,
    pub codeword: String,
}

/// One record as `GET /api/records/:userId` returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPayload {
    /// Record identifier
    pub id: i64,
    /// Income or expense
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record name
    pub name: String,
    /// Category label
    pub category: String,
    /// Amount as a decimal string on the wire
    pub amount: Decimal,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Timestamp string as stored by the backend
    pub date_time: String,
}

/// `POST /api/records` and `PUT /api/records` body
#[derive(Debug, Clone, Serialize)]
pub struct SaveRecordRequest {
    /// Present for updates, absent for creates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub date_time: String,
}

/// `DELETE /api/records` body
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRecordRequest {
    pub id: i64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}
