use serde::Serialize;

use crate::core::{ConstraintKind, Entropy, LabelSet, Matching};

/// Safely convert u64 counts to f64 for logarithms and percentages.
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// The frozen outcome of one constraint after the finalize pass.
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintSummary {
    pub kind: ConstraintKind,
    pub num: f64,
    pub lights: u32,
    pub comment: String,

    /// Proposed assignment resolved back to labels, in set-A order.
    pub map: Vec<(String, String)>,

    /// Matchings this constraint was the first to reject.
    pub eliminated: u64,

    /// Candidates still alive after this constraint.
    pub remaining: u64,

    /// Row-major n×m table: each pair's share of `remaining`, in percent.
    pub percentages: Vec<f64>,

    /// Information gained by this constraint.
    pub entropy: Entropy,
}

impl ConstraintSummary {
    /// `"MB#1.0"`-style display identifier.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}#{:.1}", self.kind, self.num)
    }

    /// log2 of the remaining candidate count; `-inf` once nothing is left.
    #[must_use]
    pub fn bits_remaining(&self) -> f64 {
        count_to_f64(self.remaining).log2()
    }

    /// The B label this constraint proposes for `a_label`, if any.
    #[must_use]
    pub fn proposed(&self, a_label: &str) -> Option<&str> {
        self.map
            .iter()
            .find(|(a, _)| a == a_label)
            .map(|(_, b)| b.as_str())
    }
}

/// One point of a plottable per-kind statistics series.
#[derive(Debug, Clone, Serialize)]
pub struct StatPoint {
    pub id: f64,
    pub bits_remaining: f64,
    pub entropy: Entropy,
}

/// Immutable result of a full enumeration-and-filter run.
#[derive(Debug, Serialize)]
pub struct SimReport {
    pub set_a: LabelSet,
    pub set_b: LabelSet,

    /// Size of the unconstrained candidate space.
    pub total: u64,

    /// Matchings whose first slot contains B-index 0; by symmetry, the
    /// count every (A, B) pair appears in, which seeds the pre-filter
    /// table uniformly.
    pub baseline: u64,

    /// Row-major n×m pre-filter percentage table.
    pub prefilter: Vec<f64>,

    /// One summary per constraint, in evaluation order.
    pub constraints: Vec<ConstraintSummary>,

    /// Candidates accepted by every constraint.
    pub remaining: u64,

    /// The accepted matchings in generation order, when collection was
    /// requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<Vec<Matching>>,
}

impl SimReport {
    /// log2 of the final remaining count.
    #[must_use]
    pub fn bits_remaining(&self) -> f64 {
        count_to_f64(self.remaining).log2()
    }

    /// Statistics series for one constraint kind, ordered by identifier.
    #[must_use]
    pub fn kind_series(&self, kind: ConstraintKind) -> Vec<StatPoint> {
        let mut points: Vec<StatPoint> = self
            .constraints
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| StatPoint {
                id: c.num,
                bits_remaining: c.bits_remaining(),
                entropy: c.entropy,
            })
            .collect();
        points.sort_by(|a, b| a.id.total_cmp(&b.id));
        points
    }

    /// Combined bits-remaining series over all constraints in evaluation
    /// order, on the interleaved identifier axis: a full round `num` maps
    /// to 2·num, the single-pair probe preceding it to 2·num−1.
    #[must_use]
    pub fn information_series(&self) -> Vec<(f64, f64)> {
        self.constraints
            .iter()
            .map(|c| {
                let id = match c.kind {
                    ConstraintKind::Mb => 2.0 * c.num - 1.0,
                    ConstraintKind::Mn => 2.0 * c.num,
                };
                (id, c.bits_remaining())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(kind: ConstraintKind, num: f64, remaining: u64) -> ConstraintSummary {
        ConstraintSummary {
            kind,
            num,
            lights: 0,
            comment: String::new(),
            map: vec![],
            eliminated: 0,
            remaining,
            percentages: vec![],
            entropy: Entropy::Bits(0.0),
        }
    }

    fn report(constraints: Vec<ConstraintSummary>) -> SimReport {
        SimReport {
            set_a: LabelSet::new(vec!["x1".into()]),
            set_b: LabelSet::new(vec!["y1".into(), "y2".into()]),
            total: 1,
            baseline: 1,
            prefilter: vec![100.0, 100.0],
            remaining: constraints.last().map_or(1, |c| c.remaining),
            constraints,
            accepted: None,
        }
    }

    #[test]
    fn test_kind_series_filters_and_sorts() {
        let r = report(vec![
            summary(ConstraintKind::Mn, 2.0, 8),
            summary(ConstraintKind::Mb, 1.0, 16),
            summary(ConstraintKind::Mn, 1.0, 32),
        ]);
        let mn = r.kind_series(ConstraintKind::Mn);
        assert_eq!(mn.len(), 2);
        assert_eq!(mn[0].id, 1.0);
        assert_eq!(mn[1].id, 2.0);
        assert!((mn[1].bits_remaining - 3.0).abs() < 1e-12);

        let mb = r.kind_series(ConstraintKind::Mb);
        assert_eq!(mb.len(), 1);
        assert!((mb[0].bits_remaining - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_information_series_interleaves_ids() {
        let r = report(vec![
            summary(ConstraintKind::Mb, 1.0, 16),
            summary(ConstraintKind::Mn, 1.0, 8),
            summary(ConstraintKind::Mb, 2.0, 4),
            summary(ConstraintKind::Mn, 2.0, 2),
        ]);
        let ids: Vec<f64> = r.information_series().iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_bits_remaining_of_empty_pool() {
        let r = report(vec![summary(ConstraintKind::Mb, 1.0, 0)]);
        assert!(r.constraints[0].bits_remaining().is_infinite());
        assert!(r.constraints[0].bits_remaining() < 0.0);
    }
}
