//! The matching-enumeration and constraint-elimination engine.
//!
//! - [`MatchingGenerator`]: lazy sweep of the full candidate space
//! - [`Constraint`]: one empirical hint with its elimination accumulators
//! - [`Game`]: orchestrates the scan and the sequential finalize pass
//! - [`SimReport`]: the frozen statistics a run produces
//!
//! ## Lifecycle
//!
//! A [`Game`] is built once from a validated configuration. `run` makes a
//! single pass over the generated candidate space; each matching is
//! checked against the constraints in list order, and the first constraint
//! to reject it records the elimination. After the scan, each constraint
//! is finalized in the same order, threading the running remaining-table
//! and total through the sequence; every output is immutable from then on.

pub mod constraint;
pub mod game;
pub mod generator;
pub mod report;
pub mod tally;

pub use constraint::Constraint;
pub use game::{Game, RunOptions, StateError};
pub use generator::MatchingGenerator;
pub use report::{ConstraintSummary, SimReport, StatPoint};
pub use tally::PairTally;
