//! Conjunctive exact-match filter over the record store.
//!
//! # Responsibility
//! - Compile a profile into equality predicates and count matching records.
//!
//! # Invariants
//! - Predicates are evaluated in canonical attribute order.
//! - A record with a null cell at a constrained attribute never matches.
//! - Evaluation is one full pass over the store; there is no partial mode.

use crate::model::attribute::Attribute;
use crate::model::profile::Profile;
use crate::store::record_store::RecordStore;

/// Counts records matching every constraint of `profile`.
///
/// Returns the match count and the constrained attributes in canonical
/// order. Unconstrained attributes impose no predicate, so an empty profile
/// matches the whole store.
pub fn count_matches(store: &RecordStore, profile: &Profile) -> (usize, Vec<Attribute>) {
    let constraints: Vec<(Attribute, i64)> = profile.constraints().collect();

    let matches = (0..store.len())
        .filter(|&row| row_matches(store, row, &constraints))
        .count();

    let attributes_used = constraints.into_iter().map(|(attr, _)| attr).collect();
    (matches, attributes_used)
}

/// Row indexes matching every constraint, for incremental refinement.
///
/// The funnel builder starts from the full store and narrows this set one
/// attribute at a time.
pub fn all_rows(store: &RecordStore) -> Vec<usize> {
    (0..store.len()).collect()
}

/// Narrows `rows` to those whose `attribute` cell equals `value` exactly.
pub fn refine(store: &RecordStore, rows: &[usize], attribute: Attribute, value: i64) -> Vec<usize> {
    rows.iter()
        .copied()
        .filter(|&row| store.value(attribute, row) == Some(value))
        .collect()
}

fn row_matches(store: &RecordStore, row: usize, constraints: &[(Attribute, i64)]) -> bool {
    constraints
        .iter()
        .all(|&(attribute, value)| store.value(attribute, row) == Some(value))
}

/// Match percentage of the total population, rounded to 6 decimals.
///
/// Callers must guarantee `total > 0`; the service layer treats an empty
/// store as unavailable before any scan starts.
pub fn percentage(matches: usize, total: usize) -> f64 {
    debug_assert!(total > 0, "percentage requires a non-empty store");
    round6(100.0 * matches as f64 / total as f64)
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::{percentage, round6};

    #[test]
    fn percentage_rounds_to_six_decimals() {
        assert_eq!(percentage(2, 3), 66.666667);
        assert_eq!(percentage(1, 1), 100.0);
        assert_eq!(percentage(0, 4), 0.0);
    }

    #[test]
    fn round6_is_stable_on_exact_values() {
        assert_eq!(round6(12.5), 12.5);
        assert_eq!(round6(0.000_000_4), 0.0);
    }
}
