//! Recycle-bin repository contract and SQLite implementation.
//!
//! # Responsibility
//! - List, restore and purge soft-deleted tasks in `recycle_bin`.
//! - Perform the restore move back into `tasks` as one transaction.
//!
//! # Invariants
//! - Restore always mints a fresh task id and resets status to pending;
//!   callers must not assume id continuity across delete/restore.
//! - `purge_expired` removes entries strictly older than the cutoff and is
//!   idempotent.

use crate::model::recycle::RecycleBinEntry;
use crate::model::task::{Task, TaskId, TaskStatus, UserId};
use crate::repo::task_repo::{task_status_to_db, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const ENTRY_SELECT_SQL: &str =
    "SELECT id, user_id, original_id, description, deleted_at FROM recycle_bin";

/// Repository interface for recycle-bin operations.
pub trait RecycleBinRepository {
    fn list_entries(&self, user_id: UserId) -> RepoResult<Vec<RecycleBinEntry>>;
    fn restore_task(&self, original_id: TaskId) -> RepoResult<Task>;
    fn purge_entry(&self, original_id: TaskId) -> RepoResult<()>;
    fn purge_expired(&self, cutoff_ms: i64) -> RepoResult<usize>;
}

/// SQLite-backed recycle-bin repository.
pub struct SqliteRecycleBinRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecycleBinRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecycleBinRepository for SqliteRecycleBinRepository<'_> {
    fn list_entries(&self, user_id: UserId) -> RepoResult<Vec<RecycleBinEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL} WHERE user_id = ?1 ORDER BY deleted_at DESC, id DESC;"
        ))?;

        let mut rows = stmt.query([user_id])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }

    fn restore_task(&self, original_id: TaskId) -> RepoResult<Task> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let source: Option<(UserId, String)> = tx
            .query_row(
                "SELECT user_id, description FROM recycle_bin WHERE original_id = ?1;",
                [original_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((user_id, description)) = source else {
            return Err(RepoError::NotFound(original_id));
        };

        tx.execute(
            "INSERT INTO tasks (user_id, description, status) VALUES (?1, ?2, ?3);",
            params![
                user_id,
                description.as_str(),
                task_status_to_db(TaskStatus::Pending)
            ],
        )?;
        let new_id = tx.last_insert_rowid();

        tx.execute(
            "DELETE FROM recycle_bin WHERE original_id = ?1;",
            [original_id],
        )?;

        tx.commit()?;
        Ok(Task {
            id: new_id,
            user_id,
            description,
            status: TaskStatus::Pending,
        })
    }

    fn purge_entry(&self, original_id: TaskId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM recycle_bin WHERE original_id = ?1;",
            [original_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(original_id));
        }

        Ok(())
    }

    fn purge_expired(&self, cutoff_ms: i64) -> RepoResult<usize> {
        // Strict comparison: an entry deleted exactly at the cutoff survives.
        let purged = self.conn.execute(
            "DELETE FROM recycle_bin WHERE deleted_at < ?1;",
            [cutoff_ms],
        )?;

        Ok(purged)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<RecycleBinEntry> {
    Ok(RecycleBinEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        original_id: row.get("original_id")?,
        description: row.get("description")?,
        deleted_at_ms: row.get("deleted_at")?,
    })
}
