//! moodlog-core
//!
//! Pure domain types and storage key conventions. No I/O — this is the
//! shared vocabulary of the Moodlog system.

pub mod error;
pub mod keys;
pub mod models;
