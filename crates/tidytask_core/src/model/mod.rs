//! Domain model for accounts, active tasks and recycled tasks.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Task and recycle-bin ids are stable and never reused.
//! - Deletion is represented by moving a task into the recycle bin,
//!   not by a hard delete of user data.

pub mod recycle;
pub mod task;
pub mod user;
