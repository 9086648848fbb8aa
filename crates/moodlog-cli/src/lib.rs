//! moodlog-cli library root.
//!
//! Exposes the config, check-in flow, and command handlers so that
//! integration tests can drive them without going through the binary.

pub mod checkin;
pub mod commands;
pub mod config;
pub mod context;
