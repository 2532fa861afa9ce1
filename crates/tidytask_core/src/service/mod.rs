//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod retention;
pub mod task_service;

/// Current wall-clock instant as Unix epoch milliseconds.
///
/// Clamps to 0 for clocks set before the epoch rather than failing a write.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
