//! REST gateway to the SpendWise backend
//!
//! Every remote operation the client performs goes through the
//! [`RecordsGateway`] trait; [`HttpGateway`] is the reqwest-backed
//! implementation. Error responses are expected as `{message}` bodies.

use async_trait::async_trait;
use std::sync::Arc;

pub mod error;
pub mod types;

pub use error::ApiError;
pub use error::ApiResult;

// Re-export commonly used types
pub use types::{
    ChangeEmailRequest, ChangePasswordRequest, DeleteRecordRequest, LoginRequest, LoginResponse,
    MessageResponse, ProfilePayload, RecordPayload, RecordType, RegisterRequest, SaveRecordRequest,
    UserPayload,
};

// ==================== Gateway Trait ====================

/// Gateway reference type
pub type GatewayRef = Arc<dyn RecordsGateway>;

/// Trait for backend gateways
#[async_trait]
pub trait RecordsGateway: Send + Sync {
    /// Authenticate and return the user payload
    async fn login(&self, email: &str, password: &str) -> ApiResult<UserPayload>;

    /// Register a new user; returns the backend message, if any
    async fn register(&self, request: RegisterRequest) -> ApiResult<Option<String>>;

    /// Fetch profile data for a user
    async fn profile(&self, user_id: i64) -> ApiResult<ProfilePayload>;

    /// Change the account password; returns the backend message, if any
    async fn change_password(&self, request: ChangePasswordRequest) -> ApiResult<Option<String>>;

    /// Change the account email; returns the backend message, if any
    async fn change_email(&self, request: ChangeEmailRequest) -> ApiResult<Option<String>>;

    /// Delete the account and all its records
    async fn delete_account(&self, user_id: i64) -> ApiResult<()>;

    /// Fetch the complete record list for a user
    async fn fetch_records(&self, user_id: i64) -> ApiResult<Vec<RecordPayload>>;

    /// Create a new record
    async fn create_record(&self, request: SaveRecordRequest) -> ApiResult<()>;

    /// Update an existing record
    async fn update_record(&self, request: SaveRecordRequest) -> ApiResult<()>;

    /// Delete a record
    async fn delete_record(&self, request: DeleteRecordRequest) -> ApiResult<()>;
}

// ==================== HTTP Implementation ====================

/// reqwest-backed gateway implementation
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the given base URL (no trailing slash)
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `ApiError::Backend`, extracting
    /// the `{message}` body when there is one
    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<MessageResponse>()
            .await
            .ok()
            .and_then(|body| body.message);
        log::debug!("Backend returned {}: {:?}", status, message);
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_message(response: reqwest::Response) -> ApiResult<Option<String>> {
        let response = Self::check(response).await?;
        let body = response
            .json::<MessageResponse>()
            .await
            .unwrap_or_default();
        Ok(body.message)
    }
}

#[async_trait]
impl RecordsGateway for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> ApiResult<UserPayload> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(self.url("/api/users/login"))
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let body: LoginResponse =
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse {
                    message: e.to_string(),
                })?;
        Ok(body.user)
    }

    async fn register(&self, request: RegisterRequest) -> ApiResult<Option<String>> {
        let response = self
            .client
            .post(self.url("/api/users/register"))
            .json(&request)
            .send()
            .await?;
        Self::read_message(response).await
    }

    async fn profile(&self, user_id: i64) -> ApiResult<ProfilePayload> {
        let response = self
            .client
            .get(self.url(&format!("/api/profile/{}", user_id)))
            .send()
            .await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse {
                message: e.to_string(),
            })
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> ApiResult<Option<String>> {
        let response = self
            .client
            .post(self.url("/api/profile/change-password"))
            .json(&request)
            .send()
            .await?;
        Self::read_message(response).await
    }

    async fn change_email(&self, request: ChangeEmailRequest) -> ApiResult<Option<String>> {
        let response = self
            .client
            .post(self.url("/api/profile/change-email"))
            .json(&request)
            .send()
            .await?;
        Self::read_message(response).await
    }

    async fn delete_account(&self, user_id: i64) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/profile/{}", user_id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn fetch_records(&self, user_id: i64) -> ApiResult<Vec<RecordPayload>> {
        let response = self
            .client
            .get(self.url(&format!("/api/records/{}", user_id)))
            .send()
            .await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse {
                message: e.to_string(),
            })
    }

    async fn create_record(&self, request: SaveRecordRequest) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url("/api/records"))
            .json(&request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update_record(&self, request: SaveRecordRequest) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url("/api/records"))
            .json(&request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_record(&self, request: DeleteRecordRequest) -> ApiResult<()> {
        // The browser client tunnels this body through its HTTP
        // library's request config; the wire body is the bare object.
        let response = self
            .client
            .delete(self.url("/api/records"))
            .json(&request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

// ==================== Tests ====================
