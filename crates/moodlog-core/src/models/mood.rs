use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Slider position for a mood log, 1 (lowest) to 10 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Short description shown next to the slider.
    pub fn label(self) -> &'static str {
        match self.0 {
            1..=2 => "Very low",
            3..=4 => "Low",
            5..=6 => "Okay",
            7..=8 => "Good",
            _ => "Great",
        }
    }
}

impl TryFrom<i64> for MoodLevel {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::InvalidMoodLevel(value))
        }
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub level: MoodLevel,
    pub note: Option<String>,
    pub recorded_at: Timestamp,
}

impl MoodEntry {
    pub fn new(user_id: Uuid, level: MoodLevel, note: Option<String>, recorded_at: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            level,
            note: note.filter(|n| !n.trim().is_empty()),
            recorded_at,
        }
    }
}
