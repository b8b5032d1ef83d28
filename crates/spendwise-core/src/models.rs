//! Core data models for the client

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_api::{RecordPayload, RecordType};

/// One income or expense record
///
/// Owned by the backend; the client holds an immutable snapshot per
/// fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier
    pub id: i64,
    /// Income or expense
    pub record_type: RecordType,
    /// Record name
    pub name: String,
    /// Category label
    pub category: String,
    /// Amount, always positive
    pub amount: Decimal,
    /// Free-text description
    pub description: String,
    /// Timestamp string as the backend stores it
    pub date_time: String,
}

impl Record {
    /// Parse the timestamp, accepting the formats the backend and the
    /// record form produce
    pub fn datetime_naive(&self) -> Option<NaiveDateTime> {
        parse_datetime(&self.date_time)
    }

    /// Calendar date of the record, if the timestamp parses
    pub fn date_naive(&self) -> Option<NaiveDate> {
        self.datetime_naive().map(|dt| dt.date())
    }

    /// Check whether name or category contains the query,
    /// case-insensitively. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.name.to_lowercase().contains(&query_lower)
            || self.category.to_lowercase().contains(&query_lower)
    }
}

impl From<RecordPayload> for Record {
    fn from(payload: RecordPayload) -> Self {
        Self {
            id: payload.id,
            record_type: payload.record_type,
            name: payload.name,
            category: payload.category,
            amount: payload.amount,
            description: payload.description,
            date_time: payload.date_time,
        }
    }
}

/// Parse a backend or form timestamp string
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    // Date-only input falls back to midnight
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Authenticated user, the client-side session object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier
    pub id: i64,
    /// Display name
    pub username: String,
}

/// Form data for creating or editing a record
///
/// Fields are kept as raw input strings; validation turns them into
/// typed values before anything reaches the network.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    /// Record name
    pub name: String,
    /// Category label
    pub category: String,
    /// Amount as entered
    pub amount: String,
    /// Free-text description
    pub description: String,
    /// Timestamp as entered
    pub date_time: String,
}

/// Category suggestions offered per record type; the category field
/// itself stays free text
pub fn category_suggestions(record_type: RecordType) -> &'static [&'static str] {
    match record_type {
        RecordType::Income => &["Зарплата", "Фріланс"],
        RecordType::Expense => &["Їжа", "Транспорт"],
    }
}

// ==================== Tests ====================
