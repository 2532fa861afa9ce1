//! Account model.

use crate::model::task::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated account.
///
/// The password hash never leaves the credential store; this record is what
/// callers hold after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}
