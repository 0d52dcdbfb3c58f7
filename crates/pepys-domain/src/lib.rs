//! Pepys Domain Layer
//!
//! This crate is the core of Pepys: a value-oriented algebra for sets of
//! moments. It defines immutable intervals over any totally ordered domain,
//! periods (finite unions of intervals kept in canonical form), and the
//! textual format periods travel in. Everything higher in the stack models
//! knowledge whose validity is one of these sets.
//!
//! ## Key Concepts
//!
//! - **Interval**: an immutable convex subset of an ordered domain, one of
//!   five shapes (empty, full, two half-lines, bounded)
//! - **Period**: a mutable set of moments, stored as sorted
//!   pairwise-separated intervals; the canonical form is restored by every
//!   operation
//! - **Instant**: the concrete ordered domain used for time, a naive
//!   calendar timestamp
//! - **Canonical order**: the total order on intervals that makes period
//!   storage and serialization deterministic
//!
//! ## Architecture
//!
//! The interval algebra is pure and generic; periods delegate all geometry
//! to it. Serialization is the only boundary with the outside world, and
//! the caller supplies the endpoint format. There is no I/O, no clock
//! access and no shared state anywhere in the crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algebra;
pub mod error;
pub mod interval;
pub mod period;
pub mod text;

// Re-exports for convenience
pub use algebra::{intersect_all, union_all, IntervalPair};
pub use error::TemporalError;
pub use interval::Interval;
pub use period::{Instant, Period, TimePeriod};
