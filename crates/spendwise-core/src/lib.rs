//! Domain logic for the SpendWise client
//!
//! The pieces here cooperate as: backend -> record store (full list)
//! -> filter pipeline (per section, per type) -> presentation.
//! Mutations flow the other way: presentation -> backend -> re-fetch
//! -> record store.

pub mod error;
pub mod filters;
pub mod models;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use filters::{filter_records, AmountOperator, FilterState};
pub use models::{category_suggestions, parse_datetime, Record, RecordDraft, Session};
pub use session::SessionStore;
pub use store::{RecordStore, WriteOutcome};
pub use validation::RegistrationForm;

// Re-export the wire discriminator; domain and wire use the same one
pub use spendwise_api::RecordType;
