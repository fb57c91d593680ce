use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{ConstraintKind, LabelSet};
use crate::engine::constraint::Constraint;
use crate::engine::game::Game;

/// Fatal configuration problems, all detected before any enumeration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Label set {set} must not be empty")]
    Empty { set: char },

    #[error("Duplicate label {label:?} in set {set}")]
    DuplicateLabel { label: String, set: char },

    #[error("Set A must be exactly one label shorter than set B (got {size_a} and {size_b})")]
    SizeMismatch { size_a: usize, size_b: usize },

    #[error("Constraint {constraint}: unknown label {label:?}")]
    UnknownLabel { constraint: String, label: String },

    #[error("Constraint {constraint}: a single-pair probe expects 0 or 1 lights, got {lights}")]
    InvalidLights { constraint: String, lights: u32 },
}

/// One constraint specification as it appears in the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct ConstraintDoc {
    #[serde(rename = "type")]
    pub kind: ConstraintKind,

    /// Display identifier. Fractional values are allowed so side-probes
    /// can be ordered between full rounds.
    pub num: f64,

    pub lights: u32,
    pub comment: String,

    /// Sparse label-to-label proposal; need not cover all of set A.
    pub map: BTreeMap<String, String>,
}

impl ConstraintDoc {
    fn title(&self) -> String {
        format!("{}#{:.1}", self.kind, self.num)
    }
}

/// The raw input document: two label sets and the ordered constraint list.
///
/// The instruction order is semantic — it decides which constraint a
/// multiply-rejected matching is charged to — so it is preserved exactly
/// as written.
#[derive(Debug, Clone, Deserialize)]
pub struct GameDocument {
    #[serde(rename = "setA")]
    pub set_a: Vec<String>,

    #[serde(rename = "setB")]
    pub set_b: Vec<String>,

    pub instructions: Vec<ConstraintDoc>,
}

impl GameDocument {
    /// Parse a document from YAML text.
    ///
    /// # Errors
    ///
    /// Malformed YAML, a missing or mistyped field, or an unknown
    /// constraint kind.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and validate a game in one step.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`].
    pub fn load(path: &Path) -> Result<Game, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)?.build()
    }

    /// Resolve labels to indices and hand the engine a validated [`Game`].
    ///
    /// # Errors
    ///
    /// Duplicate or missing labels, mismatched set sizes, or an invalid
    /// `lights` value.
    pub fn build(self) -> Result<Game, ConfigError> {
        check_distinct(&self.set_a, 'A')?;
        check_distinct(&self.set_b, 'B')?;

        let set_a = LabelSet::new(self.set_a);
        let set_b = LabelSet::new(self.set_b);

        let mut constraints = Vec::with_capacity(self.instructions.len());
        for doc in self.instructions {
            let mut map = BTreeMap::new();
            for (a_label, b_label) in &doc.map {
                let a = set_a
                    .index_of(a_label)
                    .ok_or_else(|| ConfigError::UnknownLabel {
                        constraint: doc.title(),
                        label: a_label.clone(),
                    })?;
                let b = set_b
                    .index_of(b_label)
                    .ok_or_else(|| ConfigError::UnknownLabel {
                        constraint: doc.title(),
                        label: b_label.clone(),
                    })?;
                map.insert(a, b);
            }
            constraints.push(Constraint::new(
                doc.kind,
                doc.num,
                doc.lights,
                doc.comment,
                map,
                set_a.len(),
                set_b.len(),
            )?);
        }

        Game::new(set_a, set_b, constraints)
    }
}

fn check_distinct(labels: &[String], set: char) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ConfigError::DuplicateLabel {
                label: label.clone(),
                set,
            });
        }
    }
    Ok(())
}
