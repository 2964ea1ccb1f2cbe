//! Persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define a key-value repository contract over string keys and JSON text.
//! - Provide the per-user app store that maps feature collections to keys
//!   and implements snapshot export/restore.
//!
//! # Invariants
//! - Stored values are always valid JSON text.
//! - Multi-key writes are atomic.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod app_store;
pub mod kv_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored value could not be (de)serialized.
    InvalidData { key: String, message: String },
    /// Imported snapshot text is not a JSON object.
    InvalidSnapshot(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData { key, message } => {
                write!(f, "invalid stored data under `{key}`: {message}")
            }
            Self::InvalidSnapshot(message) => write!(f, "invalid snapshot: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData { .. } | Self::InvalidSnapshot(_) => None,
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
