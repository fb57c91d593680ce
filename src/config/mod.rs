//! Configuration-document loading.
//!
//! The input is a YAML document with the two label sets and the ordered
//! constraint list:
//!
//! ```yaml
//! setA: [x1, x2]
//! setB: [y1, y2, y3]
//! instructions:
//!   - type: MB        # single-pair probe; lights must be 0 or 1
//!     num: 1
//!     lights: 1
//!     comment: first booth
//!     map: {x1: y1}
//!   - type: MN        # full round; lights counts correct proposals
//!     num: 1
//!     lights: 0
//!     comment: first round
//!     map: {x1: y2, x2: y3}
//! ```
//!
//! [`GameDocument::load`] reads, parses, and validates in one step and
//! hands the engine a ready-to-run [`Game`](crate::engine::Game). All
//! fatal input problems surface here as [`ConfigError`] — the engine
//! itself never sees an unresolved label or a mismatched set size.

pub mod document;

pub use document::{ConfigError, ConstraintDoc, GameDocument};
