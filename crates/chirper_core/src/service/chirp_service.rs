//! Chirp use-case service.
//!
//! # Responsibility
//! - Accept inbound JSON:API documents and persist the decoded chirp.
//! - Render the stored timeline as a JSON:API collection document.
//!
//! # Invariants
//! - Decode failures never reach the driver.
//! - Errors from the codec and driver are returned unchanged.

use crate::codec::json_api::{JsonApiChirpTransformer, TransformError};
use crate::model::chirp::Chirp;
use crate::repo::persistence::{PersistenceDriver, StorageFailure};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Storage(#[from] StorageFailure),
}

/// Use-case service wrapper over a `PersistenceDriver`.
pub struct ChirpService<D: PersistenceDriver> {
    driver: D,
    transformer: JsonApiChirpTransformer,
}

impl<D: PersistenceDriver> ChirpService<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            transformer: JsonApiChirpTransformer::new(),
        }
    }

    /// Decodes `raw`, saves the chirp and returns it as a resource document.
    pub fn publish(&self, raw: &str) -> ServiceResult<String> {
        let chirp = self.transformer.to_chirp(raw)?;
        self.store(&chirp)?;
        Ok(self.transformer.to_json(&chirp))
    }

    /// Saves an already-built chirp.
    pub fn store(&self, chirp: &Chirp) -> ServiceResult<()> {
        self.driver.save(chirp)?;
        Ok(())
    }

    /// Returns all chirps, most recent first, as a collection document.
    pub fn timeline(&self) -> ServiceResult<String> {
        let chirps = self.driver.get_all()?;
        Ok(self.transformer.to_json_collection(&chirps))
    }
}
