use serde::Serialize;

use crate::core::labels::LabelSet;

/// One candidate assignment from set A onto set B.
///
/// A matching has one slot per A-index. Every slot holds one B-index,
/// except the merge slot, which holds two — set B has one more element
/// than set A, so in every candidate exactly one A-label absorbs a second
/// B-label and all m B-indices are used exactly once across the slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matching {
    slots: Vec<Vec<usize>>,
}

impl Matching {
    #[must_use]
    pub fn new(slots: Vec<Vec<usize>>) -> Self {
        Self { slots }
    }

    /// Is B-index `b` assigned to A-index `a`?
    #[must_use]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.slots.get(a).is_some_and(|slot| slot.contains(&b))
    }

    /// Every (A-index, B-index) pair present in the matching.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(a, slot)| slot.iter().map(move |&b| (a, b)))
    }

    #[must_use]
    pub fn slots(&self) -> &[Vec<usize>] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Render the assignment with labels, A-side sorted by label, B labels
    /// sorted within a slot: `"x1 -> [y1, y3] | x2 -> [y2] |"`.
    #[must_use]
    pub fn display_line(&self, set_a: &LabelSet, set_b: &LabelSet) -> String {
        let mut rows: Vec<(&str, Vec<&str>)> = self
            .slots
            .iter()
            .enumerate()
            .map(|(a, slot)| {
                let mut bs: Vec<&str> = slot.iter().map(|&b| set_b.label(b)).collect();
                bs.sort_unstable();
                (set_a.label(a), bs)
            })
            .collect();
        rows.sort_unstable_by_key(|(a, _)| *a);

        let mut out = String::new();
        for (a, bs) in rows {
            out.push_str(a);
            out.push_str(" -> [");
            out.push_str(&bs.join(", "));
            out.push_str("] | ");
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sets() -> (LabelSet, LabelSet) {
        (
            LabelSet::new(vec!["x1".into(), "x2".into()]),
            LabelSet::new(vec!["y1".into(), "y2".into(), "y3".into()]),
        )
    }

    #[test]
    fn test_contains() {
        let m = Matching::new(vec![vec![0, 2], vec![1]]);
        assert!(m.contains(0, 0));
        assert!(m.contains(0, 2));
        assert!(m.contains(1, 1));
        assert!(!m.contains(1, 0));
        assert!(!m.contains(2, 0));
    }

    #[test]
    fn test_pairs() {
        let m = Matching::new(vec![vec![0, 2], vec![1]]);
        let pairs: Vec<_> = m.pairs().collect();
        assert_eq!(pairs, vec![(0, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn test_display_line_sorts_labels() {
        let (set_a, set_b) = make_sets();
        let m = Matching::new(vec![vec![2, 0], vec![1]]);
        assert_eq!(
            m.display_line(&set_a, &set_b),
            "x1 -> [y1, y3] | x2 -> [y2] |"
        );
    }
}
