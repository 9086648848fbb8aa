use std::future::Future;

use jiff::Timestamp;
use moodlog_core::keys;
use moodlog_core::models::checkin::CheckinScores;
use moodlog_core::models::profile::UserProfile;
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects::LocalStore;
use crate::state;

/// Holds one profile record per user.
pub trait ProfileStore: Send + Sync {
    fn load_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, StorageError>> + Send;

    fn save_profile(&self, profile: &UserProfile) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Merge a check-in's scores into the user's existing profile and return
    /// the updated record. Fails with `NotFound` if the user has no profile.
    fn save_scores(
        &self,
        user_id: Uuid,
        scores: CheckinScores,
        wellness_description: &str,
        at: Timestamp,
    ) -> impl Future<Output = Result<UserProfile, StorageError>> + Send;
}

/// Profiles stored as `profiles/<user>.json`.
#[derive(Debug, Clone)]
pub struct LocalProfileStore {
    store: LocalStore,
}

impl LocalProfileStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Every profile in the store, oldest first.
    pub async fn list_profiles(&self) -> Result<Vec<UserProfile>, StorageError> {
        let mut profiles: Vec<UserProfile> = state::load_all(&self.store, keys::PROFILES_PREFIX).await?;
        profiles.sort_by_key(|p| p.created_at);
        Ok(profiles)
    }
}

impl ProfileStore for LocalProfileStore {
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, StorageError> {
        state::load_optional(&self.store, &keys::profile(user_id)).await
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        state::save_state(&self.store, &keys::profile(profile.user_id), profile).await?;
        tracing::info!(user_id = %profile.user_id, "profile saved");
        Ok(())
    }

    async fn save_scores(
        &self,
        user_id: Uuid,
        scores: CheckinScores,
        wellness_description: &str,
        at: Timestamp,
    ) -> Result<UserProfile, StorageError> {
        let key = keys::profile(user_id);
        let mut profile: UserProfile = state::load_state(&self.store, &key).await?;
        profile.merge_checkin(scores, wellness_description, at);
        state::save_state(&self.store, &key, &profile).await?;

        tracing::info!(
            %user_id,
            depression = scores.depression,
            anxiety = scores.anxiety,
            overall = scores.overall,
            "profile scores updated"
        );
        Ok(profile)
    }
}
