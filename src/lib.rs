//! # match-solver
//!
//! A library for enumerating candidate matchings between two label sets
//! and eliminating them with empirical constraints.
//!
//! The setting: n labels (set A) are each matched onto one of n+1 labels
//! (set B), with exactly one A-label absorbing a second B-label. The true
//! matching is unknown; what is known is a sequence of observations —
//! single-pair probes (`MB`) and full rounds (`MN`) — each reporting how
//! many of its proposed pairs are correct.
//!
//! `match-solver` walks the full candidate space once, charges every
//! rejected matching to the first constraint that excludes it, and reports
//! per-pair percentage tables, per-constraint information gain (entropy),
//! and the surviving candidates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use match_solver::{GameDocument, RunOptions};
//!
//! // Load and validate a game description
//! let game = GameDocument::load(Path::new("season2.yaml")).unwrap();
//!
//! // One exhaustive pass over the candidate space
//! let report = game.run(RunOptions::default()).unwrap();
//!
//! println!("{} of {} matchings remain", report.remaining, report.total);
//! for c in &report.constraints {
//!     println!("{}: I = {}", c.title(), c.entropy);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: YAML game-description loading and validation
//! - [`core`]: label sets, matchings, and shared enums
//! - [`engine`]: the generator, constraints, and orchestration
//! - [`render`]: text tables and Graphviz export
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod render;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameDocument};
pub use core::{ConstraintKind, Entropy, LabelSet, Matching};
pub use engine::{
    Constraint, ConstraintSummary, Game, MatchingGenerator, RunOptions, SimReport, StatPoint,
    StateError,
};
