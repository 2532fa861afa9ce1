//! Credential store: registration and login.
//!
//! # Responsibility
//! - Persist accounts with salted Argon2id password hashes.
//! - Verify credentials and hand back the `User` that scopes all task and
//!   recycle-bin operations.
//!
//! # Invariants
//! - Plaintext passwords are never persisted or logged.
//! - Verification goes through `PasswordVerifier`, which compares in
//!   constant time against the stored PHC string.
//! - A taken username is a reported outcome (`Ok(false)`), not an error.

use crate::db::DbError;
use crate::model::task::UserId;
use crate::model::user::User;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Failures while registering or authenticating an account.
#[derive(Debug)]
pub enum AuthError {
    Db(DbError),
    /// Hashing backend failure or a corrupt stored hash. A wrong password is
    /// not an error; it surfaces as `Ok(None)` from `authenticate`.
    Hash(argon2::password_hash::Error),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Hash(err) => write!(f, "password hashing failed: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Hash(_) => None,
        }
    }
}

impl From<DbError> for AuthError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for AuthError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Account registration and verification contract.
pub trait CredentialStore {
    /// Creates an account. Returns `false` when the username is taken.
    fn register(&self, username: &str, password: &str) -> AuthResult<bool>;

    /// Verifies credentials. Returns `None` for unknown usernames and wrong
    /// passwords alike.
    fn authenticate(&self, username: &str, password: &str) -> AuthResult<Option<User>>;
}

/// SQLite-backed credential store.
pub struct SqliteCredentialStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCredentialStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CredentialStore for SqliteCredentialStore<'_> {
    fn register(&self, username: &str, password: &str) -> AuthResult<bool> {
        let taken: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1);",
            [username],
            |row| row.get(0),
        )?;
        if taken == 1 {
            info!("event=register module=auth status=rejected reason=username_taken");
            return Ok(false);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(AuthError::Hash)?
            .to_string();

        self.conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2);",
            params![username, hash],
        )?;

        info!("event=register module=auth status=ok");
        Ok(true)
    }

    fn authenticate(&self, username: &str, password: &str) -> AuthResult<Option<User>> {
        let stored: Option<(UserId, String)> = self
            .conn
            .query_row(
                "SELECT id, password_hash FROM users WHERE username = ?1;",
                [username],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((id, hash)) = stored else {
            debug!("event=authenticate module=auth status=rejected reason=unknown_user");
            return Ok(None);
        };

        let parsed = PasswordHash::new(&hash).map_err(AuthError::Hash)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => {
                info!("event=authenticate module=auth status=ok user_id={id}");
                Ok(Some(User {
                    id,
                    username: username.to_string(),
                }))
            }
            Err(argon2::password_hash::Error::Password) => {
                debug!("event=authenticate module=auth status=rejected reason=wrong_password");
                Ok(None)
            }
            Err(err) => Err(AuthError::Hash(err)),
        }
    }
}
