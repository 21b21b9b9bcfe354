//! Progressive-disclosure funnel builder.
//!
//! # Responsibility
//! - Order a profile's attributes by fixed precedence plus the questionnaire
//!   skip-pattern gates.
//! - Replay the filter incrementally, one attribute at a time, into a trace.
//!
//! # Invariants
//! - Gates are evaluated against the raw submitted profile values, never
//!   against partially filtered state.
//! - The trace is strictly cumulative; counts never increase between steps.
//! - Attributes excluded by a gate are absent from the whole trace even when
//!   the caller supplied values for them.
//!
//! # See also
//! - docs/architecture/funnel.md

use crate::engine::filter::{all_rows, percentage, refine};
use crate::labels::{attribute_label, value_label, GeoNameResolver};
use crate::model::attribute::Attribute;
use crate::model::profile::Profile;
use crate::model::result::FunnelStep;
use crate::store::record_store::RecordStore;
use log::debug;

/// `labor_force_status` code meaning "currently working".
pub const EMPLOYED_CODE: i64 = 1;

/// `workplace_location` code meaning the job site is the respondent's home.
pub const WORKS_FROM_HOME_CODE: i64 = 1;

/// `workplace_location` codes implying a commute actually happens: own
/// comuna, another comuna, abroad, multiple locations.
pub const COMMUTING_WORKPLACE_CODES: [i64; 4] = [2, 3, 4, 5];

/// Attributes always eligible for the funnel, in disclosure order.
const FUNNEL_BASE_ORDER: [Attribute; 7] = [
    Attribute::Region,
    Attribute::Comuna,
    Attribute::Sex,
    Attribute::AgeBand,
    Attribute::MaritalStatus,
    Attribute::EducationLevel,
    Attribute::LaborForceStatus,
];

/// Computes the funnel attribute order for one profile.
///
/// The base sequence is fixed; `occupation_code` and `workplace_location`
/// join only when the raw `labor_force_status` is the employed code, and
/// `commute_mode` joins only when, additionally, the raw
/// `workplace_location` is a commuting code. Any out-of-enumeration
/// workplace code fails the commute gate.
pub fn compute_attribute_order(profile: &Profile) -> Vec<Attribute> {
    let mut order: Vec<Attribute> = FUNNEL_BASE_ORDER.to_vec();

    if profile.labor_force_status == Some(EMPLOYED_CODE) {
        order.push(Attribute::OccupationCode);
        order.push(Attribute::WorkplaceLocation);

        let commutes = matches!(
            profile.workplace_location,
            Some(code) if COMMUTING_WORKPLACE_CODES.contains(&code)
        );
        if commutes {
            order.push(Attribute::CommuteMode);
        }
    }

    order
}

/// Builds the stepwise disclosure trace for one profile.
///
/// Step 0 is the whole population; each further step intersects the active
/// set with one more equality predicate. Ordered attributes without a
/// submitted value are skipped silently and do not break the chain.
pub fn build_funnel(
    store: &RecordStore,
    profile: &Profile,
    geo: &dyn GeoNameResolver,
) -> Vec<FunnelStep> {
    let total = store.len();
    let mut trace = vec![FunnelStep {
        step: 0,
        attribute: "population".to_string(),
        attribute_label: "Total population".to_string(),
        value: None,
        value_label: "entire census".to_string(),
        matches: total,
        percentage: 100.0,
    }];

    let mut active = all_rows(store);
    let mut step = 1;

    for attribute in compute_attribute_order(profile) {
        let Some(value) = profile.value_of(attribute) else {
            continue;
        };

        active = refine(store, &active, attribute, value);
        trace.push(FunnelStep {
            step,
            attribute: attribute.wire_name().to_string(),
            attribute_label: attribute_label(attribute).to_string(),
            value: Some(value),
            value_label: value_label(attribute, value, geo),
            matches: active.len(),
            percentage: percentage(active.len(), total),
        });
        step += 1;
    }

    debug!(
        "event=funnel_query module=engine status=ok steps={} final_matches={}",
        trace.len(),
        active.len()
    );

    trace
}
