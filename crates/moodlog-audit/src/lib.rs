//! moodlog-audit
//!
//! Application-level audit events for user data changes.

pub mod events;

pub use events::AuditEvent;
