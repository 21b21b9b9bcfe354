//! Anonymity risk classification.
//!
//! # Responsibility
//! - Map a final match count to a qualitative risk category and message.
//!
//! # Invariants
//! - Pure function of the count; no state, no I/O.
//! - `is_unique` is true only for exactly one match. Zero matches is a
//!   distinct, equally severe, non-unique category (identifiable by
//!   exclusion).

/// Qualitative anonymity verdict for a match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_unique: bool,
    pub message: String,
}

/// Classifies a final match count.
///
/// Boundaries: 0 / 1 / 2..9 / 10..99 / 100 and above.
pub fn classify(matches: usize) -> Classification {
    match matches {
        0 => Classification {
            is_unique: false,
            message: "No exact match exists in the census; you could be identified by exclusion."
                .to_string(),
        },
        1 => Classification {
            is_unique: true,
            message: "You are unique: this profile alone fully identifies you.".to_string(),
        },
        2..=9 => Classification {
            is_unique: false,
            message: format!("Near-unique: only {matches} people share this profile."),
        },
        10..=99 => Classification {
            is_unique: false,
            message: format!("Relatively identifiable: {matches} people share this profile."),
        },
        _ => Classification {
            is_unique: false,
            message: format!("You share this profile with {matches} people."),
        },
    }
}
