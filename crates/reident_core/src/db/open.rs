//! Connection bootstrap utilities for the dataset.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for the census extract.
//! - Emit `dataset_open` logging events with duration and status.
//!
//! # Invariants
//! - File datasets are opened as-is; their schema is validated at store load.
//! - In-memory connections get the census schema applied before returning.

use super::schema::apply_census_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a census dataset file.
///
/// The file is expected to already contain the `census` table; schema
/// mismatches surface later as `LoadError` when the record store loads.
pub fn open_dataset(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=dataset_open module=db status=start mode=file");

    let result = Connection::open(path).and_then(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            info!(
                "event=dataset_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=dataset_open module=db status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Opens an in-memory dataset with the census schema applied.
///
/// Used by tests and dataset preparation tooling to build fixture extracts.
pub fn open_dataset_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=dataset_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=dataset_open module=db status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    apply_census_schema(&conn)?;
    info!(
        "event=dataset_open module=db status=ok mode=memory duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}
