//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `reident_core` linkage and a
//!   dataset file: loads the extract, prints stats and a sample funnel.
//! - Keep output deterministic for quick local sanity checks.

use reident_core::db::open_dataset;
use reident_core::{CensusService, Profile, RecordStore, EMPLOYED_CODE};

const DEFAULT_DATASET_PATH: &str = "data/census.sqlite3";

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());

    println!("reident_core version={}", reident_core::core_version());

    let outcome = open_dataset(&path)
        .map_err(reident_core::LoadError::Db)
        .and_then(|conn| RecordStore::load(&conn));
    let service = CensusService::from_load(outcome);

    match service.store_stats() {
        Ok(stats) => println!(
            "dataset={} records={} regions={} comunas={}",
            path, stats.total_records, stats.distinct_regions, stats.distinct_comunas
        ),
        Err(err) => {
            println!("dataset={} unavailable: {err}", path);
            std::process::exit(1);
        }
    }

    let profile = Profile {
        region: Some(13),
        sex: Some(1),
        age_band: Some(30),
        labor_force_status: Some(EMPLOYED_CODE),
        ..Profile::default()
    };

    match service.submit_funnel_query(&profile) {
        Ok(trace) => {
            for step in trace {
                println!(
                    "step={} attribute={} value={} matches={} percentage={}",
                    step.step,
                    step.attribute,
                    step.value.map_or("-".to_string(), |v| v.to_string()),
                    step.matches,
                    step.percentage
                );
            }
        }
        Err(err) => println!("funnel failed: {err}"),
    }
}
