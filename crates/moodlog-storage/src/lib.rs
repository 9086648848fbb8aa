//! moodlog-storage
//!
//! Local JSON object storage and the collaborators built on it: the profile
//! store, the check-in event log, and the mood/diary journal.

pub mod error;
pub mod events;
pub mod journal;
pub mod objects;
pub mod profiles;
pub mod state;
