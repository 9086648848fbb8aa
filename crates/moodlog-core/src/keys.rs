//! Storage key/path conventions.
//!
//! Pure string functions — no filesystem access. These define the canonical
//! layout of objects under the Moodlog data directory.

use uuid::Uuid;

pub const PROFILES_PREFIX: &str = "profiles/";

pub fn profile(user_id: Uuid) -> String {
    format!("profiles/{user_id}.json")
}

pub fn checkins_prefix(user_id: Uuid) -> String {
    format!("checkins/{user_id}/")
}

pub fn checkin(user_id: Uuid, id: Uuid) -> String {
    format!("checkins/{user_id}/{id}.json")
}

pub fn moods_prefix(user_id: Uuid) -> String {
    format!("moods/{user_id}/")
}

pub fn mood(user_id: Uuid, id: Uuid) -> String {
    format!("moods/{user_id}/{id}.json")
}

pub fn diary_prefix(user_id: Uuid) -> String {
    format!("diary/{user_id}/")
}

pub fn diary(user_id: Uuid, id: Uuid) -> String {
    format!("diary/{user_id}/{id}.json")
}
