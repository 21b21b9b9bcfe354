//! Wire-facing query result models.
//!
//! # Responsibility
//! - Define the shapes returned to the (external) transport layer.
//!
//! # Invariants
//! - Results are computed on demand per request and never persisted.
//! - Field names are stable wire contract; renames are breaking changes.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::Serialize;

/// Outcome of a full-profile exact-match query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Number of records matching every active constraint.
    pub matches: usize,
    /// Total record count of the loaded store.
    pub total_population: usize,
    /// `100 * matches / total_population`, rounded to 6 decimals.
    pub percentage: f64,
    /// k-anonymity of the submitted profile; equals `matches`.
    pub k_anonymity: usize,
    /// True only when exactly one record matches.
    pub is_unique: bool,
    /// Human-readable risk classification.
    pub message: String,
    /// Wire names of the attributes that imposed a predicate, canonical order.
    pub attributes_used: Vec<String>,
}

/// One row of the progressive-disclosure trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStep {
    /// Ordinal position; 0 is the whole population.
    pub step: usize,
    /// Attribute wire name, or `"population"` for step 0.
    pub attribute: String,
    /// Display label for the attribute.
    pub attribute_label: String,
    /// Constraint value applied at this step; null for step 0.
    pub value: Option<i64>,
    /// Display label for the constraint value.
    pub value_label: String,
    /// Records matching this and all prior constraints.
    pub matches: usize,
    /// `100 * matches / total_population`, rounded to 6 decimals.
    pub percentage: f64,
}

/// Aggregate figures about the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total_records: usize,
    pub distinct_regions: usize,
    pub distinct_comunas: usize,
}

/// One selectable questionnaire option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub value: i64,
    pub label: String,
}

/// Per-attribute option lists for building the questionnaire UI.
///
/// Comunas are excluded here; they are region-scoped and served by
/// `CensusService::comunas_in_region`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsCatalog {
    pub region: Vec<CatalogOption>,
    pub sex: Vec<CatalogOption>,
    pub age_band: Vec<CatalogOption>,
    pub marital_status: Vec<CatalogOption>,
    pub education_level: Vec<CatalogOption>,
    pub labor_force_status: Vec<CatalogOption>,
    pub occupation_code: Vec<CatalogOption>,
    pub workplace_location: Vec<CatalogOption>,
    pub commute_mode: Vec<CatalogOption>,
}
