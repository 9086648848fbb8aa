use moodlog_core::keys;
use moodlog_core::models::diary::DiaryEntry;
use moodlog_core::models::mood::MoodEntry;
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects::LocalStore;
use crate::state;

/// Mood logs and diary entries.
#[derive(Debug, Clone)]
pub struct JournalStore {
    store: LocalStore,
}

impl JournalStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub async fn add_mood(&self, entry: &MoodEntry) -> Result<(), StorageError> {
        state::save_state(&self.store, &keys::mood(entry.user_id, entry.id), entry).await?;
        tracing::info!(user_id = %entry.user_id, level = entry.level.get(), "mood logged");
        Ok(())
    }

    /// Mood entries, newest first.
    pub async fn list_moods(&self, user_id: Uuid) -> Result<Vec<MoodEntry>, StorageError> {
        let mut entries: Vec<MoodEntry> = state::load_all(&self.store, &keys::moods_prefix(user_id)).await?;
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(entries)
    }

    pub async fn add_diary(&self, entry: &DiaryEntry) -> Result<(), StorageError> {
        state::save_state(&self.store, &keys::diary(entry.user_id, entry.id), entry).await?;
        tracing::info!(user_id = %entry.user_id, entry_id = %entry.id, "diary entry created");
        Ok(())
    }

    /// Overwrite an existing diary entry. Fails with `NotFound` if it was
    /// never created.
    pub async fn update_diary(&self, entry: &DiaryEntry) -> Result<(), StorageError> {
        let key = keys::diary(entry.user_id, entry.id);
        if !self.store.exists(&key).await? {
            return Err(StorageError::NotFound { key });
        }
        state::save_state(&self.store, &key, entry).await?;
        tracing::info!(user_id = %entry.user_id, entry_id = %entry.id, "diary entry updated");
        Ok(())
    }

    pub async fn get_diary(&self, user_id: Uuid, id: Uuid) -> Result<DiaryEntry, StorageError> {
        state::load_state(&self.store, &keys::diary(user_id, id)).await
    }

    pub async fn delete_diary(&self, user_id: Uuid, id: Uuid) -> Result<(), StorageError> {
        self.store.delete_object(&keys::diary(user_id, id)).await?;
        tracing::info!(%user_id, entry_id = %id, "diary entry deleted");
        Ok(())
    }

    /// Diary entries, newest first.
    pub async fn list_diary(&self, user_id: Uuid) -> Result<Vec<DiaryEntry>, StorageError> {
        let mut entries: Vec<DiaryEntry> = state::load_all(&self.store, &keys::diary_prefix(user_id)).await?;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}
