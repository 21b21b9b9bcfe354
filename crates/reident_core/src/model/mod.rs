//! Domain model for profile matching.
//!
//! # Responsibility
//! - Define the attribute schema, sparse profiles and result shapes shared by
//!   the filter engine, funnel builder and service facade.
//!
//! # Invariants
//! - Every model keeps the canonical attribute order as its single source of
//!   iteration order.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod attribute;
pub mod profile;
pub mod result;
