//! Core data types shared across the engine.
//!
//! - [`LabelSet`]: one side of the game — ordered labels with reverse lookup
//! - [`Matching`]: a candidate assignment from set A onto set B
//! - [`ConstraintKind`], [`Entropy`]: classification and result types
//!
//! Everything downstream of the configuration loader works in indices;
//! labels only reappear when results are rendered.

pub mod labels;
pub mod matching;
pub mod types;

pub use labels::LabelSet;
pub use matching::Matching;
pub use types::{ConstraintKind, Entropy};
