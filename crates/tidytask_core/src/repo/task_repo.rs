//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` table.
//! - Perform the soft-delete move into `recycle_bin` as one transaction.
//!
//! # Invariants
//! - Write paths validate description text before SQL mutations.
//! - `delete_task` leaves either the task row or the bin row visible, never
//!   both and never neither.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::task::{
    validate_description, Task, TaskId, TaskStatus, TaskValidationError, UserId,
};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT id, user_id, description, status FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task and recycle-bin persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for active-task operations.
pub trait TaskRepository {
    fn add_task(&self, user_id: UserId, description: &str) -> RepoResult<Task>;
    fn list_tasks(&self, user_id: UserId) -> RepoResult<Vec<Task>>;
    fn get_task(&self, task_id: TaskId) -> RepoResult<Option<Task>>;
    fn update_description(&self, task_id: TaskId, new_description: &str) -> RepoResult<()>;
    fn toggle_status(&self, task_id: TaskId) -> RepoResult<()>;
    fn delete_task(&self, task_id: TaskId, deleted_at_ms: i64) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn add_task(&self, user_id: UserId, description: &str) -> RepoResult<Task> {
        validate_description(description)?;

        self.conn.execute(
            "INSERT INTO tasks (user_id, description, status) VALUES (?1, ?2, ?3);",
            params![user_id, description, task_status_to_db(TaskStatus::Pending)],
        )?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            user_id,
            description: description.to_string(),
            status: TaskStatus::Pending,
        })
    }

    fn list_tasks(&self, user_id: UserId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL} WHERE user_id = ?1 ORDER BY id DESC;"
        ))?;

        let mut rows = stmt.query([user_id])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn get_task(&self, task_id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([task_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn update_description(&self, task_id: TaskId, new_description: &str) -> RepoResult<()> {
        validate_description(new_description)?;

        let changed = self.conn.execute(
            "UPDATE tasks SET description = ?1 WHERE id = ?2;",
            params![new_description, task_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task_id));
        }

        Ok(())
    }

    fn toggle_status(&self, task_id: TaskId) -> RepoResult<()> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT status FROM tasks WHERE id = ?1;",
                [task_id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(stored) = stored else {
            return Err(RepoError::NotFound(task_id));
        };

        // The flip is binary over the raw column: exactly "pending" becomes
        // "done", every other stored value becomes "pending".
        let next = if stored == "pending" { "done" } else { "pending" };

        self.conn.execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2;",
            params![next, task_id],
        )?;

        Ok(())
    }

    fn delete_task(&self, task_id: TaskId, deleted_at_ms: i64) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let source: Option<(UserId, String)> = tx
            .query_row(
                "SELECT user_id, description FROM tasks WHERE id = ?1;",
                [task_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((user_id, description)) = source else {
            return Err(RepoError::NotFound(task_id));
        };

        tx.execute(
            "INSERT INTO recycle_bin (user_id, original_id, description, deleted_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![user_id, task_id, description, deleted_at_ms],
        )?;
        tx.execute("DELETE FROM tasks WHERE id = ?1;", [task_id])?;

        tx.commit()?;
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let status_text: String = row.get("status")?;
    let status = parse_task_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        description: row.get("description")?,
        status,
    })
}

pub(crate) fn task_status_to_db(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::Done => "done",
    }
}

fn parse_task_status(value: &str) -> Option<TaskStatus> {
    match value {
        "pending" => Some(TaskStatus::Pending),
        "done" => Some(TaskStatus::Done),
        _ => None,
    }
}
