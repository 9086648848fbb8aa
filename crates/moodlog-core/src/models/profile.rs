use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::checkin::CheckinScores;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub display_name: String,
    /// Sums from the most recent check-in. `None` until the first one.
    #[serde(default)]
    pub latest_scores: Option<CheckinScores>,
    #[serde(default)]
    pub wellness_description: Option<String>,
    #[serde(default)]
    pub last_checkin_at: Option<Timestamp>,
    #[serde(default)]
    pub checkin_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfile {
    pub fn new(user_id: Uuid, display_name: impl Into<String>, now: Timestamp) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            latest_scores: None,
            wellness_description: None,
            last_checkin_at: None,
            checkin_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a completed check-in into the profile. Only the scoring fields
    /// are touched; everything else on the record is preserved.
    pub fn merge_checkin(
        &mut self,
        scores: CheckinScores,
        wellness_description: impl Into<String>,
        at: Timestamp,
    ) {
        self.latest_scores = Some(scores);
        self.wellness_description = Some(wellness_description.into());
        self.last_checkin_at = Some(at);
        self.checkin_count = self.checkin_count.saturating_add(1);
        self.updated_at = at;
    }
}
