//! Core-facing query service.
//!
//! # Responsibility
//! - Hold the load-once store handle and expose the contract consumed by the
//!   (external) transport layer.
//! - Enforce the degraded-serving policy: a failed or empty load turns every
//!   query into `DataUnavailable` instead of crashing the process.
//!
//! # Invariants
//! - Queries are stateless read-only computations over a shared
//!   `Arc<RecordStore>`; the service never mutates the store.
//! - Store-level unavailability aborts a query before any scan work.
//!
//! # See also
//! - docs/architecture/funnel.md

use crate::engine::classify::classify;
use crate::engine::filter::{count_matches, percentage};
use crate::engine::funnel::build_funnel;
use crate::labels::{static_catalog_entries, GeoKind, GeoNameResolver, StaticGeoNames};
use crate::model::attribute::Attribute;
use crate::model::profile::Profile;
use crate::model::result::{CatalogOption, FunnelStep, MatchResult, OptionsCatalog, StoreStats};
use crate::store::record_store::{LoadError, RecordStore};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type QueryResult<T> = Result<T, QueryError>;

/// Failure of a query operation.
#[derive(Debug)]
pub enum QueryError {
    /// The store is unloaded or empty; retryable by the user, non-fatal.
    DataUnavailable { reason: String },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataUnavailable { reason } => {
                write!(f, "census data unavailable: {reason}")
            }
        }
    }
}

impl Error for QueryError {}

enum StoreState {
    Loaded(Arc<RecordStore>),
    Unavailable { reason: String },
}

/// Query entry point shared across concurrent callers.
///
/// Constructed once at startup from the load outcome; all operations borrow
/// immutably, so the service can sit behind an `Arc` with no locking.
pub struct CensusService<G: GeoNameResolver = StaticGeoNames> {
    state: StoreState,
    geo: G,
}

impl CensusService<StaticGeoNames> {
    /// Builds a service from a load outcome using built-in geo names.
    ///
    /// A load failure is absorbed into the degraded state so the process can
    /// keep serving health checks.
    pub fn from_load(outcome: Result<RecordStore, LoadError>) -> Self {
        Self::with_resolver(outcome, StaticGeoNames)
    }
}

impl<G: GeoNameResolver> CensusService<G> {
    /// Builds a service from a load outcome and a caller-provided resolver.
    pub fn with_resolver(outcome: Result<RecordStore, LoadError>, geo: G) -> Self {
        let state = match outcome {
            Ok(store) => StoreState::Loaded(Arc::new(store)),
            Err(err) => {
                warn!(
                    "event=service_init module=engine status=degraded error={}",
                    err
                );
                StoreState::Unavailable {
                    reason: err.to_string(),
                }
            }
        };
        Self { state, geo }
    }

    /// Whether queries can currently be served.
    pub fn is_available(&self) -> bool {
        self.store().is_ok()
    }

    /// Reason queries fail, when degraded.
    pub fn unavailable_reason(&self) -> Option<String> {
        match self.store() {
            Ok(_) => None,
            Err(QueryError::DataUnavailable { reason }) => Some(reason),
        }
    }

    /// Full-profile exact-match query.
    pub fn submit_full_query(&self, profile: &Profile) -> QueryResult<MatchResult> {
        let store = self.store()?;
        let (matches, attributes_used) = count_matches(store, profile);
        let total = store.len();
        let verdict = classify(matches);

        debug!(
            "event=full_query module=engine status=ok constraints={} matches={}",
            attributes_used.len(),
            matches
        );

        Ok(MatchResult {
            matches,
            total_population: total,
            percentage: percentage(matches, total),
            k_anonymity: matches,
            is_unique: verdict.is_unique,
            message: verdict.message,
            attributes_used: attributes_used
                .into_iter()
                .map(|attr| attr.wire_name().to_string())
                .collect(),
        })
    }

    /// Progressive-disclosure query producing the funnel trace.
    pub fn submit_funnel_query(&self, profile: &Profile) -> QueryResult<Vec<FunnelStep>> {
        let store = self.store()?;
        Ok(build_funnel(store, profile, &self.geo))
    }

    /// Aggregate dataset figures for the health/stats surface.
    pub fn store_stats(&self) -> QueryResult<StoreStats> {
        let store = self.store()?;
        Ok(StoreStats {
            total_records: store.len(),
            distinct_regions: store.distinct_values(Attribute::Region).len(),
            distinct_comunas: store.distinct_values(Attribute::Comuna).len(),
        })
    }

    /// Per-attribute questionnaire option lists.
    ///
    /// Regions and age bands enumerate the values actually present in the
    /// store; the remaining attributes use their static enumerations.
    pub fn options_catalog(&self) -> QueryResult<OptionsCatalog> {
        let store = self.store()?;

        let region = store
            .distinct_values(Attribute::Region)
            .into_iter()
            .map(|code| CatalogOption {
                value: code,
                label: self.geo.name_of(GeoKind::Region, code),
            })
            .collect();

        let age_band = store
            .distinct_values(Attribute::AgeBand)
            .into_iter()
            .map(|code| CatalogOption {
                value: code,
                label: crate::labels::age_band_label(code),
            })
            .collect();

        Ok(OptionsCatalog {
            region,
            sex: self.static_options(Attribute::Sex),
            age_band,
            marital_status: self.static_options(Attribute::MaritalStatus),
            education_level: self.static_options(Attribute::EducationLevel),
            labor_force_status: self.static_options(Attribute::LaborForceStatus),
            occupation_code: self.static_options(Attribute::OccupationCode),
            workplace_location: self.static_options(Attribute::WorkplaceLocation),
            commute_mode: self.static_options(Attribute::CommuteMode),
        })
    }

    /// Comunas present in one region, with resolved display names.
    pub fn comunas_in_region(&self, region: i64) -> QueryResult<Vec<CatalogOption>> {
        let store = self.store()?;
        Ok(store
            .comunas_in_region(region)
            .into_iter()
            .map(|code| CatalogOption {
                value: code,
                label: self.geo.name_of(GeoKind::Comuna, code),
            })
            .collect())
    }

    fn static_options(&self, attribute: Attribute) -> Vec<CatalogOption> {
        // All non-geo, non-age attributes have a static table by construction.
        static_catalog_entries(attribute).unwrap_or_default()
    }

    fn store(&self) -> QueryResult<&Arc<RecordStore>> {
        match &self.state {
            StoreState::Loaded(store) if !store.is_empty() => Ok(store),
            StoreState::Loaded(_) => Err(QueryError::DataUnavailable {
                reason: "dataset loaded with zero records".to_string(),
            }),
            StoreState::Unavailable { reason } => Err(QueryError::DataUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}
