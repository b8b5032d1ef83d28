//! Shared test support for screen handlers

#![allow(dead_code)]

use async_trait::async_trait;
use spendwise_api::{
    ApiError, ApiResult, ChangeEmailRequest, ChangePasswordRequest, DeleteRecordRequest,
    ProfilePayload, RecordPayload, RecordsGateway, RegisterRequest, SaveRecordRequest, UserPayload,
};
use spendwise_config::Config;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::App;

/// In-memory gateway for screen tests: counts calls, serves a fixed
/// user, and can be switched into a failing mode
#[derive(Default)]
pub struct MockGateway {
    pub records: Mutex<Vec<RecordPayload>>,
    register_message: Mutex<Option<String>>,
    change_message: Mutex<Option<String>>,
    failure: Mutex<Option<Option<String>>>,
    login_count: AtomicUsize,
    register_count: AtomicUsize,
    fetch_count: AtomicUsize,
    write_count: AtomicUsize,
    delete_account_count: AtomicUsize,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_records(records: Vec<RecordPayload>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
            ..Default::default()
        })
    }

    /// Make every call fail with a backend `{message}` body
    pub fn fail_with_message(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(Some(message.to_string()));
    }

    /// Make every call fail without a message body
    pub fn fail_without_message(&self) {
        *self.failure.lock().unwrap() = Some(None);
    }

    pub fn set_register_message(&self, message: &str) {
        *self.register_message.lock().unwrap() = Some(message.to_string());
    }

    pub fn set_change_message(&self, message: &str) {
        *self.change_message.lock().unwrap() = Some(message.to_string());
    }

    pub fn login_calls(&self) -> usize {
        self.login_count.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_count.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }

    pub fn delete_account_calls(&self) -> usize {
        self.delete_account_count.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> ApiResult<()> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ApiError::Backend {
                status: 400,
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordsGateway for MockGateway {
    async fn login(&self, _email: &str, _password: &str) -> ApiResult<UserPayload> {
        self.login_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(UserPayload {
            id: 7,
            username: "olena".to_string(),
            email: Some("olena@example.com".to_string()),
        })
    }

    async fn register(&self, _request: RegisterRequest) -> ApiResult<Option<String>> {
        self.register_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.register_message.lock().unwrap().clone())
    }

    async fn profile(&self, _user_id: i64) -> ApiResult<ProfilePayload> {
        self.check_failure()?;
        let records = self.records.lock().unwrap();
        Ok(ProfilePayload {
            username: "olena".to_string(),
            email: "olena@example.com".to_string(),
            incomes: records
                .iter()
                .filter(|r| r.record_type == spendwise_api::RecordType::Income)
                .count() as i64,
            expenses: records
                .iter()
                .filter(|r| r.record_type == spendwise_api::RecordType::Expense)
                .count() as i64,
        })
    }

    async fn change_password(&self, _request: ChangePasswordRequest) -> ApiResult<Option<String>> {
        self.check_failure()?;
        Ok(self.change_message.lock().unwrap().clone())
    }

    async fn change_email(&self, _request: ChangeEmailRequest) -> ApiResult<Option<String>> {
        self.check_failure()?;
        Ok(self.change_message.lock().unwrap().clone())
    }

    async fn delete_account(&self, _user_id: i64) -> ApiResult<()> {
        self.delete_account_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.records.lock().unwrap().clear();
        Ok(())
    }

    async fn fetch_records(&self, _user_id: i64) -> ApiResult<Vec<RecordPayload>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create_record(&self, request: SaveRecordRequest) -> ApiResult<()> {
        self.write_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        records.push(RecordPayload {
            id,
            record_type: request.record_type,
            name: request.name,
            category: request.category,
            amount: request.amount,
            description: request.description,
            date_time: request.date_time,
        });
        Ok(())
    }

    async fn update_record(&self, request: SaveRecordRequest) -> ApiResult<()> {
        self.write_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let id = request.id.expect("update without id");
        if let Some(existing) = records.iter_mut().find(|r| r.id == id) {
            existing.name = request.name;
            existing.category = request.category;
            existing.amount = request.amount;
            existing.description = request.description;
            existing.date_time = request.date_time;
        }
        Ok(())
    }

    async fn delete_record(&self, request: DeleteRecordRequest) -> ApiResult<()> {
        self.write_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.records.lock().unwrap().retain(|r| r.id != request.id);
        Ok(())
    }
}

/// Build an App over the mock gateway with an isolated session file
pub fn test_app(gateway: Arc<MockGateway>, tag: &str) -> App {
    let mut config = Config::default();
    config.session.path = std::env::temp_dir();
    config.session.file = format!(
        "spendwise-app-test-{}-{}.json",
        tag,
        spendwise_utils::generate_id()
    );
    App::with_gateway(config, gateway)
}

/// Build an App with an active session already persisted
pub fn test_app_logged_in(gateway: Arc<MockGateway>, tag: &str) -> App {
    let app = test_app(gateway, tag);
    app.sessions
        .save(&spendwise_core::Session {
            id: 7,
            username: "olena".to_string(),
        })
        .unwrap();
    app
}

/// Sample record payload
pub fn payload(
    id: i64,
    record_type: spendwise_api::RecordType,
    name: &str,
    amount: &str,
    date_time: &str,
) -> RecordPayload {
    RecordPayload {
        id,
        record_type,
        name: name.to_string(),
        category: "Інше".to_string(),
        amount: amount.parse().unwrap(),
        description: String::new(),
        date_time: date_time.to_string(),
    }
}
