//! Core domain logic for TidyTask.
//! This crate is the single source of truth for the task lifecycle and
//! recycle-bin retention rules; presentation layers only call into it.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::{AuthError, AuthResult, CredentialStore, SqliteCredentialStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::recycle::RecycleBinEntry;
pub use model::task::{Task, TaskId, TaskStatus, TaskValidationError, UserId};
pub use model::user::User;
pub use repo::bin_repo::{RecycleBinRepository, SqliteRecycleBinRepository};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use service::retention::{sweep_expired, sweep_expired_before, RETENTION_WINDOW_MS};
pub use service::task_service::TaskService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
