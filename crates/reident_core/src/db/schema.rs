//! Census table schema for fixtures and dataset preparation.
//!
//! # Responsibility
//! - Create the `census` table expected by the record store loader.
//!
//! # Invariants
//! - Column names and order mirror `Attribute::CANONICAL_ORDER` wire names.

use super::DbResult;
use rusqlite::Connection;

const CENSUS_SCHEMA_SQL: &str = include_str!("census_schema.sql");

/// Applies the census table schema on the provided connection.
///
/// Idempotent; the statement uses `IF NOT EXISTS`.
pub fn apply_census_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CENSUS_SCHEMA_SQL)?;
    Ok(())
}
