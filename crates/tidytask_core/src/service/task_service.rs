//! Task lifecycle use-case service.
//!
//! # Responsibility
//! - Provide the operation surface callers use: add, list, edit, toggle,
//!   soft-delete, restore and purge.
//! - Stamp deletion timestamps and decide which repository errors are
//!   surfaced versus absorbed.
//!
//! # Invariants
//! - Mutations on missing ids are silent no-ops, tolerant of stale UI state.
//! - Validation and storage failures always propagate to the caller.
//! - The service is storage-agnostic; all SQL lives in the repositories.

use crate::model::recycle::RecycleBinEntry;
use crate::model::task::{Task, TaskId, UserId};
use crate::repo::bin_repo::RecycleBinRepository;
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use crate::service::now_epoch_ms;
use log::debug;

/// Use-case service over the task store and the recycle bin.
pub struct TaskService<T: TaskRepository, B: RecycleBinRepository> {
    tasks: T,
    bin: B,
}

impl<T: TaskRepository, B: RecycleBinRepository> TaskService<T, B> {
    /// Creates a service using the provided repository implementations.
    pub fn new(tasks: T, bin: B) -> Self {
        Self { tasks, bin }
    }

    /// Creates a pending task owned by `user_id`.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the description is empty or blank.
    pub fn add_task(&self, user_id: UserId, description: &str) -> RepoResult<Task> {
        self.tasks.add_task(user_id, description)
    }

    /// Lists active tasks for `user_id`, most recently created first.
    pub fn list_tasks(&self, user_id: UserId) -> RepoResult<Vec<Task>> {
        self.tasks.list_tasks(user_id)
    }

    /// Replaces a task's description, leaving its status untouched.
    ///
    /// No-op when the task does not exist.
    pub fn update_description(&self, task_id: TaskId, new_description: &str) -> RepoResult<()> {
        silence_not_found("update_description", self.tasks.update_description(task_id, new_description))
    }

    /// Flips a task between pending and done. No-op when missing.
    pub fn toggle_status(&self, task_id: TaskId) -> RepoResult<()> {
        silence_not_found("toggle_status", self.tasks.toggle_status(task_id))
    }

    /// Soft-deletes a task into the recycle bin, stamped with the current
    /// time. No-op when missing.
    pub fn delete_task(&self, task_id: TaskId) -> RepoResult<()> {
        silence_not_found("delete_task", self.tasks.delete_task(task_id, now_epoch_ms()))
    }

    /// Lists recycle-bin entries for `user_id`, most recently deleted first.
    pub fn list_recycle_bin(&self, user_id: UserId) -> RepoResult<Vec<RecycleBinEntry>> {
        self.bin.list_entries(user_id)
    }

    /// Moves a deleted task back to the active list under a fresh id with
    /// status reset to pending. No-op when no entry matches `original_id`.
    pub fn restore_task(&self, original_id: TaskId) -> RepoResult<()> {
        silence_not_found("restore_task", self.bin.restore_task(original_id).map(|_| ()))
    }

    /// Permanently removes one recycle-bin entry. Irreversible; no-op when
    /// no entry matches `original_id`.
    pub fn purge_entry(&self, original_id: TaskId) -> RepoResult<()> {
        silence_not_found("purge_entry", self.bin.purge_entry(original_id))
    }
}

/// Maps `NotFound` to a logged no-op; every other error propagates.
fn silence_not_found(operation: &str, result: RepoResult<()>) -> RepoResult<()> {
    match result {
        Err(RepoError::NotFound(id)) => {
            debug!("event={operation} module=service status=noop reason=not_found id={id}");
            Ok(())
        }
        other => other,
    }
}
