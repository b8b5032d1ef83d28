//! Record store and refresh protocol
//!
//! The store is a read-through cache of the user's full record list.
//! Every successful write is followed by a complete re-fetch; there is
//! no optimistic local mutation. A failed write leaves the previous
//! snapshot untouched; a failed post-write read leaves the snapshot
//! stale, which is surfaced to the caller as [`WriteOutcome::Stale`].

use spendwise_api::{DeleteRecordRequest, GatewayRef, RecordType, SaveRecordRequest};

use super::error::{CoreError, CoreResult};
use super::models::{Record, RecordDraft};
use super::validation::validate_record;

/// Result of a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The post-write re-fetch succeeded, the snapshot is current
    Refreshed,
    /// The write committed but the re-fetch failed; the snapshot is
    /// stale until the next refresh
    Stale,
}

/// Client-side cache of one user's records
pub struct RecordStore {
    gateway: GatewayRef,
    user_id: i64,
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store for the given user
    pub fn new(gateway: GatewayRef, user_id: i64) -> Self {
        Self {
            gateway,
            user_id,
            records: Vec::new(),
        }
    }

    /// The current snapshot
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The user this store belongs to
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Find a record in the snapshot by id
    pub fn find(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Discard the snapshot and re-fetch the complete list
    pub async fn refresh(&mut self) -> CoreResult<()> {
        let payloads = self.gateway.fetch_records(self.user_id).await?;
        self.records = payloads.into_iter().map(Record::from).collect();
        log::debug!(
            "Refreshed record snapshot for user {}: {} records",
            self.user_id,
            self.records.len()
        );
        Ok(())
    }

    /// Validate the draft, create the record, then refresh
    pub async fn create(
        &mut self,
        record_type: RecordType,
        draft: &RecordDraft,
    ) -> CoreResult<WriteOutcome> {
        let amount = validate_record(draft)?;
        let request = SaveRecordRequest {
            id: None,
            user_id: self.user_id,
            record_type,
            name: draft.name.clone(),
            category: draft.category.clone(),
            amount,
            description: draft.description.clone(),
            date_time: draft.date_time.clone(),
        };
        self.gateway.create_record(request).await?;
        Ok(self.refresh_after_write().await)
    }

    /// Validate the draft, update the record, then refresh
    pub async fn update(
        &mut self,
        id: i64,
        record_type: RecordType,
        draft: &RecordDraft,
    ) -> CoreResult<WriteOutcome> {
        let amount = validate_record(draft)?;
        let request = SaveRecordRequest {
            id: Some(id),
            user_id: self.user_id,
            record_type,
            name: draft.name.clone(),
            category: draft.category.clone(),
            amount,
            description: draft.description.clone(),
            date_time: draft.date_time.clone(),
        };
        self.gateway.update_record(request).await?;
        Ok(self.refresh_after_write().await)
    }

    /// Delete the record, then refresh
    pub async fn delete(&mut self, id: i64, record_type: RecordType) -> CoreResult<WriteOutcome> {
        let request = DeleteRecordRequest { id, record_type };
        self.gateway.delete_record(request).await?;
        Ok(self.refresh_after_write().await)
    }

    /// Build an edit draft from the snapshot, prefilled with the
    /// record's current values
    pub fn draft_for(&self, id: i64) -> CoreResult<RecordDraft> {
        let record = self.find(id).ok_or(CoreError::RecordNotFound { id })?;
        Ok(RecordDraft {
            name: record.name.clone(),
            category: record.category.clone(),
            amount: record.amount.to_string(),
            description: record.description.clone(),
            date_time: record.date_time.clone(),
        })
    }

    // The write already committed server-side; a refresh failure only
    // leaves the display stale.
    async fn refresh_after_write(&mut self) -> WriteOutcome {
        match self.refresh().await {
            Ok(()) => WriteOutcome::Refreshed,
            Err(error) => {
                log::warn!(
                    "Post-write refresh failed for user {}: {}",
                    self.user_id,
                    error
                );
                WriteOutcome::Stale
            }
        }
    }
}

// ==================== Tests ====================
