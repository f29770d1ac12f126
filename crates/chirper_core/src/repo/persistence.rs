//! Storage-agnostic persistence capability for chirps.

use crate::model::chirp::{Chirp, ChirpCollection};
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageFailure>;

/// Unified error for any persistence-layer malfunction.
///
/// Only the human-readable cause is kept; whether the backend raised an
/// error or reported failure through a return value is not distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage failure: {message}")]
pub struct StorageFailure {
    message: String,
}

impl StorageFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<rusqlite::Error> for StorageFailure {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Durable storage for chirps.
pub trait PersistenceDriver {
    /// Persists one chirp. Returns `true` once the write is committed.
    ///
    /// A duplicate `id` is an ordinary `StorageFailure`.
    fn save(&self, chirp: &Chirp) -> StorageResult<bool>;

    /// Returns every stored chirp, most recent `created_at` first.
    ///
    /// An empty store yields an empty collection.
    fn get_all(&self) -> StorageResult<ChirpCollection>;
}

impl<D: PersistenceDriver + ?Sized> PersistenceDriver for &D {
    fn save(&self, chirp: &Chirp) -> StorageResult<bool> {
        (**self).save(chirp)
    }

    fn get_all(&self) -> StorageResult<ChirpCollection> {
        (**self).get_all()
    }
}
