//! Columnar in-memory census record store.
//!
//! # Responsibility
//! - Load the fixed-schema `census` table into columnar memory exactly once.
//! - Serve cell access and distinct-value enumeration to the query engines.
//!
//! # Invariants
//! - All columns have identical length, fixed after `load`.
//! - The store is never mutated after load; shared access is read-only.
//! - A missing table or column fails the load with a typed `LoadError`, it
//!   never panics.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::DbError;
use crate::model::attribute::Attribute;
use log::{error, info};
use rusqlite::Connection;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const CENSUS_SELECT_SQL: &str = "SELECT
    region,
    comuna,
    sex,
    age_band,
    marital_status,
    education_level,
    labor_force_status,
    occupation_code,
    workplace_location,
    commute_mode
FROM census";

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure to materialize the record store from its source.
///
/// Load errors are fatal for the store only: the process keeps serving in a
/// degraded state where every query reports `DataUnavailable`.
#[derive(Debug)]
pub enum LoadError {
    /// The source has no `census` table at all.
    MissingTable,
    /// The source table lacks an expected column.
    SchemaMismatch(String),
    /// Any other SQLite-level failure (unreadable file, malformed cell, ...).
    Db(DbError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTable => write!(f, "dataset has no `census` table"),
            Self::SchemaMismatch(message) => {
                write!(f, "dataset schema mismatch: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingTable => None,
            Self::SchemaMismatch(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for LoadError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Immutable columnar table of census records.
///
/// One `Vec<Option<i64>>` per attribute, indexed by
/// `Attribute::column_index`. `None` cells are respondents who skipped the
/// question; they never satisfy an equality predicate.
#[derive(Debug)]
pub struct RecordStore {
    columns: Vec<Vec<Option<i64>>>,
    len: usize,
}

impl RecordStore {
    /// Loads every census record from the connection in one pass.
    ///
    /// # Errors
    /// - `LoadError::MissingTable` when the `census` table does not exist.
    /// - `LoadError::SchemaMismatch` when an expected column is absent.
    /// - `LoadError::Db` for any other SQLite failure.
    pub fn load(conn: &Connection) -> LoadResult<RecordStore> {
        let started_at = Instant::now();
        info!("event=store_load module=store status=start");

        let mut stmt = match conn.prepare(CENSUS_SELECT_SQL) {
            Ok(stmt) => stmt,
            Err(err) => {
                let load_err = classify_prepare_error(err);
                error!(
                    "event=store_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    load_err
                );
                return Err(load_err);
            }
        };

        let mut columns: Vec<Vec<Option<i64>>> = vec![Vec::new(); Attribute::COUNT];
        let mut rows = stmt.query([])?;
        let mut len = 0usize;

        while let Some(row) = rows.next()? {
            for (index, column) in columns.iter_mut().enumerate() {
                column.push(row.get::<_, Option<i64>>(index)?);
            }
            len += 1;
        }

        info!(
            "event=store_load module=store status=ok records={} duration_ms={}",
            len,
            started_at.elapsed().as_millis()
        );

        Ok(RecordStore { columns, len })
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds zero records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of `attribute` for the record at `row`.
    ///
    /// `None` means the respondent skipped the question.
    pub fn value(&self, attribute: Attribute, row: usize) -> Option<i64> {
        self.columns[attribute.column_index()][row]
    }

    /// Sorted, deduplicated non-null values present for one attribute.
    pub fn distinct_values(&self, attribute: Attribute) -> Vec<i64> {
        self.columns[attribute.column_index()]
            .iter()
            .flatten()
            .copied()
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect()
    }

    /// Sorted, deduplicated comuna codes of records in the given region.
    ///
    /// Backs region-scoped geo option lists.
    pub fn comunas_in_region(&self, region: i64) -> Vec<i64> {
        let regions = &self.columns[Attribute::Region.column_index()];
        let comunas = &self.columns[Attribute::Comuna.column_index()];

        regions
            .iter()
            .zip(comunas.iter())
            .filter(|(record_region, _)| **record_region == Some(region))
            .filter_map(|(_, comuna)| *comuna)
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect()
    }
}

fn classify_prepare_error(err: rusqlite::Error) -> LoadError {
    if let rusqlite::Error::SqliteFailure(_, Some(message)) = &err {
        let msg = message.to_lowercase();
        if msg.contains("no such table") {
            return LoadError::MissingTable;
        }
        if msg.contains("no such column") {
            return LoadError::SchemaMismatch(message.clone());
        }
    }
    LoadError::Db(DbError::Sqlite(err))
}
