use reident_core::db::schema::apply_census_schema;
use reident_core::db::{open_dataset, open_dataset_in_memory};
use reident_core::{Attribute, LoadError, RecordStore};
use rusqlite::{params, Connection};

const INSERT_SQL: &str = "INSERT INTO census (
    region, comuna, sex, age_band, marital_status, education_level,
    labor_force_status, occupation_code, workplace_location, commute_mode
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

fn insert_record(conn: &Connection, values: [Option<i64>; 10]) {
    conn.execute(
        INSERT_SQL,
        params![
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
            values[7], values[8], values[9]
        ],
    )
    .unwrap();
}

#[test]
fn load_counts_rows_and_preserves_null_cells() {
    let conn = open_dataset_in_memory().unwrap();
    insert_record(&conn, [Some(13), Some(13101), Some(1), Some(30), None, None, None, None, None, None]);
    insert_record(&conn, [Some(7), None, Some(2), None, None, None, None, None, None, None]);

    let store = RecordStore::load(&conn).unwrap();
    assert_eq!(store.len(), 2);
    assert!(!store.is_empty());
    assert_eq!(store.value(Attribute::Region, 0), Some(13));
    assert_eq!(store.value(Attribute::Comuna, 1), None);
    assert_eq!(store.value(Attribute::MaritalStatus, 0), None);
}

#[test]
fn empty_table_loads_as_zero_records() {
    let conn = open_dataset_in_memory().unwrap();
    let store = RecordStore::load(&conn).unwrap();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn distinct_values_are_sorted_deduped_and_skip_nulls() {
    let conn = open_dataset_in_memory().unwrap();
    for region in [Some(13), Some(7), Some(13), None, Some(1)] {
        insert_record(&conn, [region, None, None, None, None, None, None, None, None, None]);
    }

    let store = RecordStore::load(&conn).unwrap();
    assert_eq!(store.distinct_values(Attribute::Region), vec![1, 7, 13]);
}

#[test]
fn comunas_in_region_filters_by_region() {
    let conn = open_dataset_in_memory().unwrap();
    insert_record(&conn, [Some(13), Some(13101), None, None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(13), Some(13120), None, None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(13), Some(13101), None, None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(7), Some(7101), None, None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(13), None, None, None, None, None, None, None, None, None]);

    let store = RecordStore::load(&conn).unwrap();
    assert_eq!(store.comunas_in_region(13), vec![13101, 13120]);
    assert_eq!(store.comunas_in_region(7), vec![7101]);
    assert!(store.comunas_in_region(2).is_empty());
}

#[test]
fn missing_table_fails_load() {
    let conn = Connection::open_in_memory().unwrap();
    let err = RecordStore::load(&conn).unwrap_err();
    assert!(matches!(err, LoadError::MissingTable));
}

#[test]
fn missing_column_fails_load_with_schema_mismatch() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE census (
            region INTEGER, comuna INTEGER, sex INTEGER, age_band INTEGER,
            marital_status INTEGER, education_level INTEGER,
            labor_force_status INTEGER, occupation_code INTEGER,
            workplace_location INTEGER
        );",
    )
    .unwrap();

    let err = RecordStore::load(&conn).unwrap_err();
    match err {
        LoadError::SchemaMismatch(message) => assert!(message.contains("commute_mode")),
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn file_dataset_loads_through_open_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("census.sqlite3");

    {
        let conn = Connection::open(&path).unwrap();
        apply_census_schema(&conn).unwrap();
        insert_record(&conn, [Some(9), Some(9101), Some(2), Some(45), None, None, None, None, None, None]);
    }

    let conn = open_dataset(&path).unwrap();
    let store = RecordStore::load(&conn).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.value(Attribute::AgeBand, 0), Some(45));
}
