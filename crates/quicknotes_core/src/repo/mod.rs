//! Repository layer: durable slots and the adapters built on them.
//!
//! # Responsibility
//! - Define the key-value storage contract and its implementations.
//! - Map the note collection and preferences onto named slots.
//!
//! # Invariants
//! - Write failures surface as `RepoError`; read failures of the note
//!   snapshot degrade to an empty collection instead.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv_repo;
pub mod note_snapshot;
pub mod preferences;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for slot storage and snapshot serialization.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Failure reported by a non-SQLite backend.
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
            Self::Backend(message) => write!(f, "storage backend error: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Backend(_) => None,
        }
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

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
