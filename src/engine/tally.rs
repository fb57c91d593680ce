use crate::core::Matching;

/// Per-(A, B)-pair counters, stored as a flat row-major grid.
///
/// Tallies are the scan-time accumulators of the engine: written while the
/// candidate space is enumerated, then only read (and folded into the
/// running remaining-table) during the finalize pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTally {
    rows: usize,
    cols: usize,
    counts: Vec<u64>,
}

impl PairTally {
    #[must_use]
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self::uniform(rows, cols, 0)
    }

    /// A grid with every cell set to `value`. The pre-filter remaining
    /// table starts out uniform: by symmetry of the candidate space, every
    /// pair appears in the same number of matchings.
    #[must_use]
    pub fn uniform(rows: usize, cols: usize, value: u64) -> Self {
        Self {
            rows,
            cols,
            counts: vec![value; rows * cols],
        }
    }

    pub fn record(&mut self, a: usize, b: usize) {
        self.counts[a * self.cols + b] += 1;
    }

    /// Count every pair present in `matching`.
    pub fn record_matching(&mut self, matching: &Matching) {
        for (a, b) in matching.pairs() {
            self.record(a, b);
        }
    }

    #[must_use]
    pub fn get(&self, a: usize, b: usize) -> u64 {
        self.counts[a * self.cols + b]
    }

    /// Cell-wise subtraction. Callers uphold `other[i] <= self[i]`: each
    /// matching is eliminated by exactly one constraint, so a constraint's
    /// per-pair eliminations never exceed the pair's remaining count.
    pub fn subtract(&mut self, other: &PairTally) {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        for (cell, sub) in self.counts.iter_mut().zip(&other.counts) {
            *cell -= sub;
        }
    }

    /// Each cell as a percentage of `total`. A zeroed total yields an
    /// all-zero table rather than dividing.
    #[must_use]
    pub fn percentages(&self, total: u64) -> Vec<f64> {
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        #[allow(clippy::cast_precision_loss)]
        self.counts
            .iter()
            .map(|&c| c as f64 / total as f64 * 100.0)
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }
}
