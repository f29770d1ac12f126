//! SQLite connection bootstrap for chirp storage.
//!
//! # Responsibility
//! - Open and configure SQLite connections handed to persistence drivers.
//! - Ensure the `chirp` table exists with the columns drivers rely on.
//!
//! # Invariants
//! - Drivers never open or close connections; this module does.
//! - Schema setup is idempotent and never rewrites existing data.

use thiserror::Error;

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("table `{table}` exists but is missing column `{column}`")]
    IncompatibleSchema {
        table: &'static str,
        column: &'static str,
    },
}
