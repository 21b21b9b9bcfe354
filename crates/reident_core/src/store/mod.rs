//! Immutable record storage.
//!
//! # Responsibility
//! - Load the census extract into memory once and serve read-only access.
//!
//! # Invariants
//! - A loaded store never changes for the process lifetime.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod record_store;
