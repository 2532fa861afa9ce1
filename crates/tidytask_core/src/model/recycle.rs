//! Recycle-bin entry model.
//!
//! # Responsibility
//! - Define the tombstone record created when a task is soft-deleted.
//!
//! # Invariants
//! - At most one live entry exists per `original_id`; a task cannot be
//!   deleted again without being restored first.
//! - `deleted_at_ms` is immutable after creation.

use crate::model::task::{TaskId, UserId};
use serde::{Deserialize, Serialize};

/// Snapshot of a deleted task, recoverable until purged.
///
/// The snapshot is frozen at deletion time: edits made to a restored task
/// never rewrite an entry, because restore removes the entry entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleBinEntry {
    /// Entry id, distinct from any task id.
    pub id: i64,
    /// Owner, copied from the deleted task.
    pub user_id: UserId,
    /// The deleted task's former id; key for restore and purge.
    pub original_id: TaskId,
    /// Description as it read at deletion time.
    pub description: String,
    /// Deletion instant, Unix epoch milliseconds.
    #[serde(rename = "deleted_at")]
    pub deleted_at_ms: i64,
}

impl RecycleBinEntry {
    /// Whether this entry is past the retention cutoff and eligible for purge.
    ///
    /// An entry exactly at the cutoff is still retained ("strictly older").
    pub fn is_expired(&self, cutoff_ms: i64) -> bool {
        self.deleted_at_ms < cutoff_ms
    }
}
