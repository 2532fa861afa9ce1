//! Task domain model.
//!
//! # Responsibility
//! - Define the active task record and its binary status.
//! - Validate description input before persistence.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused for another task.
//! - `status` is strictly two-valued; the only mutation is a flip.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task row.
///
/// Also identifies a recycle-bin entry's `original_id` after deletion.
pub type TaskId = i64;

/// Opaque account identifier supplied by the authentication layer.
pub type UserId = i64;

/// Binary task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not finished.
    Pending,
    /// Checked off.
    Done,
}

impl TaskStatus {
    /// Returns the flipped status. Applying this twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            Self::Done => Self::Pending,
        }
    }
}

/// An active to-do item owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Owner; immutable once assigned.
    pub user_id: UserId,
    /// Non-empty free-form text.
    pub description: String,
    pub status: TaskStatus,
}

/// Validation failures for task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Rejects empty or whitespace-only descriptions.
///
/// Called on every write path that accepts description text.
pub fn validate_description(description: &str) -> Result<(), TaskValidationError> {
    if description.trim().is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_description, TaskStatus, TaskValidationError};

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::Pending.toggled().toggled(), TaskStatus::Pending);
    }

    #[test]
    fn validate_description_rejects_blank_input() {
        assert_eq!(
            validate_description(""),
            Err(TaskValidationError::EmptyDescription)
        );
        assert_eq!(
            validate_description("   \t"),
            Err(TaskValidationError::EmptyDescription)
        );
        assert!(validate_description("buy milk").is_ok());
    }
}
