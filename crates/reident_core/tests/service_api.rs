use reident_core::db::open_dataset_in_memory;
use reident_core::{
    CensusService, LoadError, Profile, QueryError, RecordStore,
};
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

fn scenario_a_service() -> CensusService {
    let conn = open_dataset_in_memory().unwrap();
    insert_record(&conn, [Some(13), Some(13101), Some(1), None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(13), Some(13120), Some(2), None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(7), Some(7101), Some(1), None, None, None, None, None, None, None]);
    CensusService::from_load(RecordStore::load(&conn))
}

#[test]
fn degraded_service_fails_every_query_with_data_unavailable() {
    let service = CensusService::from_load(Err(LoadError::MissingTable));

    assert!(!service.is_available());
    assert!(service.unavailable_reason().unwrap().contains("census"));

    let profile = Profile::default();
    assert!(matches!(
        service.submit_full_query(&profile),
        Err(QueryError::DataUnavailable { .. })
    ));
    assert!(matches!(
        service.submit_funnel_query(&profile),
        Err(QueryError::DataUnavailable { .. })
    ));
    assert!(matches!(
        service.store_stats(),
        Err(QueryError::DataUnavailable { .. })
    ));
    assert!(matches!(
        service.options_catalog(),
        Err(QueryError::DataUnavailable { .. })
    ));
    assert!(matches!(
        service.comunas_in_region(13),
        Err(QueryError::DataUnavailable { .. })
    ));
}

#[test]
fn zero_record_store_is_unavailable_not_an_empty_result() {
    let conn = open_dataset_in_memory().unwrap();
    let service = CensusService::from_load(RecordStore::load(&conn));

    assert!(!service.is_available());
    let err = service.submit_full_query(&Profile::default()).unwrap_err();
    let QueryError::DataUnavailable { reason } = err;
    assert!(reason.contains("zero records"));
}

#[test]
fn scenario_a_full_query_counts_and_classifies() {
    let service = scenario_a_service();

    let region_only = Profile {
        region: Some(13),
        ..Profile::default()
    };
    let result = service.submit_full_query(&region_only).unwrap();
    assert_eq!(result.matches, 2);
    assert_eq!(result.total_population, 3);
    assert!((result.percentage - 66.666667).abs() < 1e-9);
    assert_eq!(result.k_anonymity, 2);
    assert!(!result.is_unique);
    assert_eq!(result.attributes_used, vec!["region"]);

    let region_and_sex = Profile {
        region: Some(13),
        sex: Some(1),
        ..Profile::default()
    };
    let result = service.submit_full_query(&region_and_sex).unwrap();
    assert_eq!(result.matches, 1);
    assert!(result.is_unique);
    assert!(result.message.contains("unique"));
    assert_eq!(result.attributes_used, vec!["region", "sex"]);
}

#[test]
fn unconstrained_query_reports_full_population() {
    let service = scenario_a_service();
    let result = service.submit_full_query(&Profile::default()).unwrap();
    assert_eq!(result.matches, 3);
    assert_eq!(result.percentage, 100.0);
    assert!(result.attributes_used.is_empty());
}

#[test]
fn store_stats_report_distinct_geo_counts() {
    let service = scenario_a_service();
    let stats = service.store_stats().unwrap();
    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.distinct_regions, 2);
    assert_eq!(stats.distinct_comunas, 3);
}

#[test]
fn options_catalog_mixes_store_backed_and_static_lists() {
    let service = scenario_a_service();
    let catalog = service.options_catalog().unwrap();

    let region_values: Vec<i64> = catalog.region.iter().map(|o| o.value).collect();
    assert_eq!(region_values, vec![7, 13]);
    assert_eq!(catalog.region[1].label, "Metropolitana");

    assert_eq!(catalog.sex.len(), 2);
    assert_eq!(catalog.sex[0].label, "Male");
    assert!(catalog.occupation_code.iter().all(|o| o.value != 999));
    assert_eq!(catalog.commute_mode.len(), 7);
}

#[test]
fn comunas_in_region_resolve_through_geo_names() {
    let service = scenario_a_service();
    let comunas = service.comunas_in_region(13).unwrap();
    let values: Vec<i64> = comunas.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![13101, 13120]);
    // Built-in resolver stringifies comuna codes; a full table is injectable.
    assert_eq!(comunas[0].label, "13101");
}

#[test]
fn funnel_query_through_service_matches_direct_build() {
    let service = scenario_a_service();
    let profile = Profile {
        region: Some(13),
        sex: Some(2),
        ..Profile::default()
    };

    let trace = service.submit_funnel_query(&profile).unwrap();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].matches, 3);
    assert_eq!(trace[1].matches, 2);
    assert_eq!(trace[2].matches, 1);
}
