//! Profile-matching and progressive-disclosure engine.
//!
//! # Responsibility
//! - Count exact matches for a profile over the record store.
//! - Build the k-anonymity funnel trace.
//! - Classify match counts into risk categories.
//! - Expose the core-facing service contract consumed by the transport layer.
//!
//! # See also
//! - docs/architecture/funnel.md

pub mod classify;
pub mod filter;
pub mod funnel;
pub mod service;
