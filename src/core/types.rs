use serde::{Deserialize, Serialize};

/// The two kinds of empirical constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Single-pair probe: proposes one assignment and learns whether it is
    /// part of the true matching. `lights` must be 0 or 1.
    #[serde(rename = "MB")]
    Mb,

    /// Full-round probe: proposes a set of assignments and learns how many
    /// of them are correct. `lights` is any non-negative count.
    #[serde(rename = "MN")]
    Mn,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mb => write!(f, "MB"),
            Self::Mn => write!(f, "MN"),
        }
    }
}

/// Information gained by a constraint, in bits.
///
/// `Bits(0.0)` means the constraint eliminated nothing; `Unbounded` means
/// nothing survived it — the constraint sequence up to this point is
/// contradictory. The two are deliberately distinct values, never a
/// display convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entropy {
    Bits(f64),
    Unbounded,
}

impl Entropy {
    /// Entropy of eliminating `eliminated` candidates out of
    /// `remaining + eliminated`.
    #[must_use]
    pub fn from_counts(remaining: u64, eliminated: u64) -> Self {
        if eliminated == 0 {
            return Self::Bits(0.0);
        }
        if remaining == 0 {
            return Self::Unbounded;
        }
        #[allow(clippy::cast_precision_loss)]
        let survived = remaining as f64 / (remaining + eliminated) as f64;
        Self::Bits(-survived.log2())
    }
}

impl std::fmt::Display for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bits(b) => write!(f, "{b}"),
            // stat series are consumed by plotting tools that accept "inf"
            Self::Unbounded => write!(f, "inf"),
        }
    }
}

impl Serialize for Entropy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bits(b) => serializer.serialize_f64(*b),
            // JSON has no infinity
            Self::Unbounded => serializer.serialize_str("inf"),
        }
    }
}
