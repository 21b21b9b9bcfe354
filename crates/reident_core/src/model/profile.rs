//! Partial demographic profile submitted by a caller.
//!
//! # Responsibility
//! - Represent a sparse set of attribute=value constraints.
//! - Expose constraints in canonical attribute order only.
//!
//! # Invariants
//! - An absent (or explicitly null) field means "unconstrained", never
//!   "must be null".
//! - Iteration order is `Attribute::CANONICAL_ORDER`, independent of how the
//!   caller populated the fields.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::attribute::Attribute;
use serde::{Deserialize, Serialize};

/// Sparse attribute constraints for one query.
///
/// Callers may freely supply values for skip-pattern dependents (for example
/// `commute_mode` without being employed); the funnel builder silently
/// excludes them, it never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub region: Option<i64>,
    pub comuna: Option<i64>,
    pub sex: Option<i64>,
    pub age_band: Option<i64>,
    pub marital_status: Option<i64>,
    pub education_level: Option<i64>,
    pub labor_force_status: Option<i64>,
    pub occupation_code: Option<i64>,
    pub workplace_location: Option<i64>,
    pub commute_mode: Option<i64>,
}

impl Profile {
    /// Returns the raw submitted value for one attribute.
    pub fn value_of(&self, attribute: Attribute) -> Option<i64> {
        match attribute {
            Attribute::Region => self.region,
            Attribute::Comuna => self.comuna,
            Attribute::Sex => self.sex,
            Attribute::AgeBand => self.age_band,
            Attribute::MaritalStatus => self.marital_status,
            Attribute::EducationLevel => self.education_level,
            Attribute::LaborForceStatus => self.labor_force_status,
            Attribute::OccupationCode => self.occupation_code,
            Attribute::WorkplaceLocation => self.workplace_location,
            Attribute::CommuteMode => self.commute_mode,
        }
    }

    /// Sets or clears one attribute constraint.
    pub fn set(&mut self, attribute: Attribute, value: Option<i64>) {
        let slot = match attribute {
            Attribute::Region => &mut self.region,
            Attribute::Comuna => &mut self.comuna,
            Attribute::Sex => &mut self.sex,
            Attribute::AgeBand => &mut self.age_band,
            Attribute::MaritalStatus => &mut self.marital_status,
            Attribute::EducationLevel => &mut self.education_level,
            Attribute::LaborForceStatus => &mut self.labor_force_status,
            Attribute::OccupationCode => &mut self.occupation_code,
            Attribute::WorkplaceLocation => &mut self.workplace_location,
            Attribute::CommuteMode => &mut self.commute_mode,
        };
        *slot = value;
    }

    /// Active constraints in canonical attribute order.
    pub fn constraints(&self) -> impl Iterator<Item = (Attribute, i64)> + '_ {
        Attribute::CANONICAL_ORDER
            .into_iter()
            .filter_map(|attr| self.value_of(attr).map(|value| (attr, value)))
    }

    /// Number of active constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints().count()
    }

    /// Whether the profile constrains nothing at all.
    pub fn is_unconstrained(&self) -> bool {
        self.constraint_count() == 0
    }
}
