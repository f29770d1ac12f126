//! Core domain logic for Chirper.
//!
//! Chirps are short text posts exchanged as JSON:API documents and stored in
//! SQLite. This crate owns the value model, the codec, and the persistence
//! boundary; request routing and process wiring live with callers.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::json_api::{JsonApiChirpTransformer, TransformError, TransformResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chirp::{Chirp, ChirpCollection, ChirpValidationError, CREATED_AT_FORMAT};
pub use repo::persistence::{PersistenceDriver, StorageFailure, StorageResult};
pub use repo::sqlite_driver::SqlitePersistenceDriver;
pub use service::chirp_service::{ChirpService, ServiceError, ServiceResult};

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
