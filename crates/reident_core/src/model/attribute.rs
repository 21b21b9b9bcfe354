//! Census attribute schema.
//!
//! # Responsibility
//! - Define the closed set of categorical attributes a profile may constrain.
//! - Fix the canonical attribute order used by every query path.
//!
//! # Invariants
//! - `CANONICAL_ORDER` lists every variant exactly once; column indexes and
//!   iteration order are derived from it and never change at runtime.
//! - Wire names are stable snake_case identifiers shared with the dataset
//!   column names.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

/// One categorical census field.
///
/// Attribute values are small integer codes from closed enumerations; codes
/// outside the enumeration still match exactly, they only lose their display
/// label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Region,
    Comuna,
    Sex,
    AgeBand,
    MaritalStatus,
    EducationLevel,
    LaborForceStatus,
    OccupationCode,
    WorkplaceLocation,
    CommuteMode,
}

impl Attribute {
    /// Canonical evaluation order for filters and the funnel base sequence.
    ///
    /// Equivalent profiles must produce identical results regardless of how
    /// the caller assembled them, so every scan iterates in this order.
    pub const CANONICAL_ORDER: [Attribute; 10] = [
        Attribute::Region,
        Attribute::Comuna,
        Attribute::Sex,
        Attribute::AgeBand,
        Attribute::MaritalStatus,
        Attribute::EducationLevel,
        Attribute::LaborForceStatus,
        Attribute::OccupationCode,
        Attribute::WorkplaceLocation,
        Attribute::CommuteMode,
    ];

    /// Number of attributes, also the column count of the record store.
    pub const COUNT: usize = Self::CANONICAL_ORDER.len();

    /// Stable identifier used for dataset columns and wire payloads.
    pub fn wire_name(self) -> &'static str {
        match self {
            Attribute::Region => "region",
            Attribute::Comuna => "comuna",
            Attribute::Sex => "sex",
            Attribute::AgeBand => "age_band",
            Attribute::MaritalStatus => "marital_status",
            Attribute::EducationLevel => "education_level",
            Attribute::LaborForceStatus => "labor_force_status",
            Attribute::OccupationCode => "occupation_code",
            Attribute::WorkplaceLocation => "workplace_location",
            Attribute::CommuteMode => "commute_mode",
        }
    }

    /// Parses a wire/column name back into an attribute.
    pub fn from_wire_name(value: &str) -> Option<Attribute> {
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|attr| attr.wire_name() == value)
    }

    /// Column index of this attribute inside the record store.
    pub fn column_index(self) -> usize {
        self as usize
    }
}
