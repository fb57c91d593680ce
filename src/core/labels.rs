use std::collections::HashMap;

/// An ordered set of distinct labels with a name-to-index reverse lookup.
///
/// The two sides of a game are each a `LabelSet`; indices into the set are
/// the working representation everywhere in the engine, and the labels
/// themselves only reappear at the presentation boundary.
///
/// Distinctness is enforced by the configuration loader before a `LabelSet`
/// is constructed; the set itself is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LabelSet {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

// Serialized as the plain label sequence; the reverse lookup is derived.
impl serde::Serialize for LabelSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.labels, serializer)
    }
}

impl LabelSet {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        Self { labels, index }
    }

    /// Look up a label's index.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// The label at `index`. Panics on out-of-range indices, which cannot
    /// be produced by a validated configuration.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Labels in their original order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
