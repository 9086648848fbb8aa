use std::future::Future;

use moodlog_core::keys;
use moodlog_core::models::checkin::CheckinRecord;
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects::LocalStore;
use crate::state;

/// Append-only log of completed check-ins.
pub trait EventLog: Send + Sync {
    fn record_checkin(&self, record: &CheckinRecord) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// All of a user's check-ins, oldest first.
    fn list_checkins(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CheckinRecord>, StorageError>> + Send;
}

/// Check-in records stored as `checkins/<user>/<id>.json`.
#[derive(Debug, Clone)]
pub struct LocalEventLog {
    store: LocalStore,
}

impl LocalEventLog {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl EventLog for LocalEventLog {
    async fn record_checkin(&self, record: &CheckinRecord) -> Result<(), StorageError> {
        let key = keys::checkin(record.user_id, record.id);
        state::save_state(&self.store, &key, record).await?;
        tracing::info!(
            user_id = %record.user_id,
            checkin_id = %record.id,
            completed_at = %record.completed_at,
            "check-in recorded"
        );
        Ok(())
    }

    async fn list_checkins(&self, user_id: Uuid) -> Result<Vec<CheckinRecord>, StorageError> {
        let mut records: Vec<CheckinRecord> =
            state::load_all(&self.store, &keys::checkins_prefix(user_id)).await?;
        records.sort_by_key(|r| r.completed_at);
        Ok(records)
    }
}
