//! Fixed storage schema for chirps.
//!
//! # Invariants
//! - `chirp.id` is the uniqueness key.
//! - A pre-existing `chirp` table must expose every column in
//!   `CHIRP_COLUMNS`; extra columns are tolerated.
//! - Indexes are created only after the column check passes.

use super::{DbError, DbResult};
use rusqlite::Connection;

pub const CHIRP_TABLE: &str = "chirp";
pub const CHIRP_COLUMNS: [&str; 4] = ["id", "chirp_text", "author", "created_at"];

const TABLE_SQL: &str = include_str!("schema.sql");
const INDEX_SQL: &str = include_str!("schema_index.sql");

/// Creates the `chirp` table when absent, checks its columns, then creates
/// the `created_at` index.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(TABLE_SQL)?;

    let existing = table_columns(conn, CHIRP_TABLE)?;
    for column in CHIRP_COLUMNS {
        if !existing.iter().any(|name| name == column) {
            return Err(DbError::IncompatibleSchema {
                table: CHIRP_TABLE,
                column,
            });
        }
    }

    conn.execute_batch(INDEX_SQL)?;
    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
