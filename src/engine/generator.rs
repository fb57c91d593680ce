use itertools::Itertools;

use crate::core::Matching;

/// Lazily enumerates every candidate matching of n = m−1 slots over m
/// B-indices.
///
/// The sweep walks all m! permutations of the B-indices. For each
/// permutation the last slot acts as the merge source: its value is folded
/// into every earlier slot whose own value is strictly smaller, and the
/// first m−1 slots are emitted as one candidate per fold target. The
/// strict comparison is the canonical tie-break — the merged slot holds an
/// unordered pair, so without it every candidate would be produced twice
/// (once per ordering of the pair between the target slot and the merge
/// source).
///
/// The full space has m!·(m−1)/2 candidates: 1, 6, 36, 240 for
/// m = 2, 3, 4, 5.
#[derive(Debug, Clone, Copy)]
pub struct MatchingGenerator {
    size_b: usize,
}

impl MatchingGenerator {
    /// `size_b` is m, the larger side. The emitted matchings have m−1 slots.
    #[must_use]
    pub fn new(size_b: usize) -> Self {
        Self { size_b }
    }

    /// A fresh pass over the full candidate space. Restartable: every call
    /// yields the same sequence in the same order.
    pub fn iter(&self) -> impl Iterator<Item = Matching> {
        let m = self.size_b;
        (0..m).permutations(m).flat_map(|perm| {
            let mut out = Vec::new();
            if let Some((&merge, rest)) = perm.split_last() {
                for target in 0..rest.len() {
                    if rest[target] < merge {
                        let mut slots: Vec<Vec<usize>> =
                            rest.iter().map(|&b| vec![b]).collect();
                        slots[target].push(merge);
                        out.push(Matching::new(slots));
                    }
                }
            }
            out
        })
    }
}
