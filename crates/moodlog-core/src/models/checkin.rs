use std::collections::BTreeSet;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The three scale sums produced by one completed check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckinScores {
    pub depression: u32,
    pub anxiety: u32,
    pub overall: u32,
}

/// A single "check-in completed" event, as written to the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckinRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub completed_at: Timestamp,
    pub scores: CheckinScores,
    pub wellness_description: String,
}

impl CheckinRecord {
    pub fn new(
        user_id: Uuid,
        scores: CheckinScores,
        wellness_description: impl Into<String>,
        completed_at: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            completed_at,
            scores,
            wellness_description: wellness_description.into(),
        }
    }

    /// The UTC calendar day this check-in was completed on.
    pub fn day(&self) -> Date {
        utc_day(self.completed_at)
    }
}

fn utc_day(ts: Timestamp) -> Date {
    ts.to_zoned(TimeZone::UTC).date()
}

/// Whether a periodic screening is due.
///
/// A user who has never checked in is always due. Otherwise the check-in is
/// due once `interval_days` full days have elapsed since the last one.
pub fn checkin_due(last: Option<Timestamp>, now: Timestamp, interval_days: u32) -> bool {
    let Some(last) = last else {
        return true;
    };
    let interval = SignedDuration::from_hours(i64::from(interval_days) * 24);
    now.duration_since(last) >= interval
}

/// Count consecutive UTC days with at least one check-in.
///
/// The streak may end today or yesterday; a gap before that resets it to 0.
pub fn checkin_streak(
    completed_at: impl IntoIterator<Item = Timestamp>,
    today: Date,
) -> Result<u32, CoreError> {
    let days: BTreeSet<Date> = completed_at.into_iter().map(utc_day).collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        let yesterday = today.yesterday()?;
        if !days.contains(&yesterday) {
            return Ok(0);
        }
        yesterday
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor = cursor.yesterday()?;
    }
    Ok(streak)
}
