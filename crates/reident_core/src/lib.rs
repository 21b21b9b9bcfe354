//! Core engine for the census re-identification demo.
//!
//! Given a partial demographic profile, counts how many census records match
//! it exactly and traces how the match count collapses as attributes are
//! disclosed one at a time (the k-anonymity funnel). This crate is the single
//! source of truth for matching, ordering and classification semantics; the
//! HTTP transport lives outside it.

pub mod db;
pub mod engine;
pub mod labels;
pub mod logging;
pub mod model;
pub mod store;

pub use engine::classify::{classify, Classification};
pub use engine::filter::count_matches;
pub use engine::funnel::{
    build_funnel, compute_attribute_order, COMMUTING_WORKPLACE_CODES, EMPLOYED_CODE,
    WORKS_FROM_HOME_CODE,
};
pub use engine::service::{CensusService, QueryError, QueryResult};
pub use labels::{GeoKind, GeoNameResolver, StaticGeoNames};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attribute::Attribute;
pub use model::profile::Profile;
pub use model::result::{
    CatalogOption, FunnelStep, MatchResult, OptionsCatalog, StoreStats,
};
pub use store::record_store::{LoadError, LoadResult, RecordStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
