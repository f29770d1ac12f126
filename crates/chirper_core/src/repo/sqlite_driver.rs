//! SQLite-backed `PersistenceDriver`.
//!
//! # Responsibility
//! - Issue parameterized insert/select statements against `chirp`.
//! - Fold raised driver errors and silent no-op writes into `StorageFailure`.
//!
//! # Invariants
//! - Rows are returned in the order the `ORDER BY` clause emits them; no
//!   in-memory re-sorting.
//! - Rows are materialized field-for-field, without re-validation.
//! - At most one logical operation is in flight per borrowed connection.

use crate::model::chirp::{Chirp, ChirpCollection};
use crate::repo::persistence::{PersistenceDriver, StorageFailure, StorageResult};
use log::{debug, error, info};
use rusqlite::{named_params, Connection, Row};
use std::time::Instant;

pub const INSERT_CHIRP_SQL: &str = "INSERT INTO chirp(id, chirp_text, author, created_at) \
                                    VALUES(:id, :chirp_text, :author, :created_at)";

pub const SELECT_CHIRPS_SQL: &str =
    "SELECT id, chirp_text, author, created_at FROM chirp ORDER BY created_at DESC";

/// Persistence driver over a caller-owned SQLite connection.
pub struct SqlitePersistenceDriver<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersistenceDriver<'conn> {
    /// Wraps a ready connection (see `db::open_db`).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert(&self, chirp: &Chirp) -> StorageResult<bool> {
        let mut stmt = self.conn.prepare(INSERT_CHIRP_SQL)?;
        let changed = stmt.execute(named_params! {
            ":id": chirp.id(),
            ":chirp_text": chirp.text(),
            ":author": chirp.author(),
            ":created_at": chirp.created_at(),
        })?;

        if changed == 0 {
            return Err(StorageFailure::new(self.no_write_diagnostics(chirp.id())));
        }
        Ok(true)
    }

    fn select_all(&self) -> StorageResult<ChirpCollection> {
        let mut stmt = self.conn.prepare(SELECT_CHIRPS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut chirps = Vec::new();

        while let Some(row) = rows.next()? {
            chirps.push(parse_chirp_row(row)?);
        }

        Ok(ChirpCollection::new(chirps))
    }

    // The statement succeeded without writing, so there is no driver error
    // to forward; describe the connection state instead.
    fn no_write_diagnostics(&self, id: &str) -> String {
        format!(
            "insert into chirp reported no affected rows for id `{id}` \
             (last_insert_rowid={}, autocommit={})",
            self.conn.last_insert_rowid(),
            self.conn.is_autocommit()
        )
    }
}

impl PersistenceDriver for SqlitePersistenceDriver<'_> {
    fn save(&self, chirp: &Chirp) -> StorageResult<bool> {
        let started_at = Instant::now();
        debug!("event=chirp_save module=repo status=start id={}", chirp.id());

        let result = self.insert(chirp);
        match &result {
            Ok(_) => info!(
                "event=chirp_save module=repo status=ok id={} duration_ms={}",
                chirp.id(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=chirp_save module=repo status=error id={} duration_ms={} error={}",
                chirp.id(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn get_all(&self) -> StorageResult<ChirpCollection> {
        let started_at = Instant::now();

        let result = self.select_all();
        match &result {
            Ok(chirps) => debug!(
                "event=chirp_list module=repo status=ok count={} duration_ms={}",
                chirps.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=chirp_list module=repo status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

fn parse_chirp_row(row: &Row<'_>) -> StorageResult<Chirp> {
    Ok(Chirp::from_storage(
        row.get("id")?,
        row.get("chirp_text")?,
        row.get("author")?,
        row.get("created_at")?,
    ))
}
