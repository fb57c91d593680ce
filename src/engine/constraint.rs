use std::collections::BTreeMap;

use crate::config::ConfigError;
use crate::core::{ConstraintKind, Entropy, LabelSet, Matching};
use crate::engine::report::ConstraintSummary;
use crate::engine::tally::PairTally;

/// One empirical hint about the true matching.
///
/// A constraint proposes a sparse partial assignment (`map`) together with
/// the number of its proposals that matched reality (`lights`). During the
/// scan it accumulates, for every matching it is the first to reject, the
/// pairs that matching contained; `finalize` then folds the accumulators
/// into the running remaining-table and freezes the result as a
/// [`ConstraintSummary`].
#[derive(Debug, Clone)]
pub struct Constraint {
    kind: ConstraintKind,
    /// Display identifier; fractional values order side-probes between
    /// full rounds.
    num: f64,
    lights: u32,
    comment: String,
    /// Proposed assignment, A-index → B-index. Sparse: need not cover A.
    map: BTreeMap<usize, usize>,
    eliminated: u64,
    tally: PairTally,
}

impl Constraint {
    /// Build a constraint over an n×m pair space.
    ///
    /// # Errors
    ///
    /// A single-pair probe (`MB`) is a yes/no observation; any `lights`
    /// other than 0 or 1 is rejected.
    pub fn new(
        kind: ConstraintKind,
        num: f64,
        lights: u32,
        comment: impl Into<String>,
        map: BTreeMap<usize, usize>,
        size_a: usize,
        size_b: usize,
    ) -> Result<Self, ConfigError> {
        let constraint = Self {
            kind,
            num,
            lights,
            comment: comment.into(),
            map,
            eliminated: 0,
            tally: PairTally::zeroed(size_a, size_b),
        };
        if kind == ConstraintKind::Mb && lights > 1 {
            return Err(ConfigError::InvalidLights {
                constraint: constraint.title(),
                lights,
            });
        }
        debug_assert!(constraint
            .map
            .iter()
            .all(|(&a, &b)| a < size_a && b < size_b));
        Ok(constraint)
    }

    /// `"MB#1.0"`-style display identifier.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}#{:.1}", self.kind, self.num)
    }

    /// Does `matching` agree with this observation? True iff exactly
    /// `lights` of the proposed pairs are present.
    #[must_use]
    pub fn fits(&self, matching: &Matching) -> bool {
        let hits = self
            .map
            .iter()
            .filter(|&(&a, &b)| matching.contains(a, b))
            .count();
        hits as u64 == u64::from(self.lights)
    }

    /// Charge `matching` to this constraint. Only the first constraint in
    /// list order to reject a matching calls this, and only once per
    /// matching.
    pub(crate) fn eliminate(&mut self, matching: &Matching) {
        self.tally.record_matching(matching);
        self.eliminated += 1;
    }

    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    #[must_use]
    pub fn num(&self) -> f64 {
        self.num
    }

    #[must_use]
    pub fn lights(&self) -> u32 {
        self.lights
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn eliminated(&self) -> u64 {
        self.eliminated
    }

    /// Number of proposed pairs.
    #[must_use]
    pub fn map_len(&self) -> usize {
        self.map.len()
    }

    /// Fold this constraint's eliminations into the running remaining
    /// table and total, and freeze the outcome.
    ///
    /// Consumes the constraint: after the scan the accumulators are
    /// read-only, and the summary is the only surviving view of them.
    pub(crate) fn finalize(
        self,
        mut table: PairTally,
        total: u64,
        set_a: &LabelSet,
        set_b: &LabelSet,
    ) -> (ConstraintSummary, PairTally, u64) {
        let remaining = total - self.eliminated;
        table.subtract(&self.tally);

        let summary = ConstraintSummary {
            kind: self.kind,
            num: self.num,
            lights: self.lights,
            comment: self.comment,
            map: self
                .map
                .iter()
                .map(|(&a, &b)| (set_a.label(a).to_string(), set_b.label(b).to_string()))
                .collect(),
            eliminated: self.eliminated,
            remaining,
            percentages: table.percentages(remaining),
            entropy: Entropy::from_counts(remaining, self.eliminated),
        };

        (summary, table, remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> (LabelSet, LabelSet) {
        (
            LabelSet::new(vec!["x1".into(), "x2".into()]),
            LabelSet::new(vec!["y1".into(), "y2".into(), "y3".into()]),
        )
    }

    fn mb(map: BTreeMap<usize, usize>, lights: u32) -> Constraint {
        Constraint::new(ConstraintKind::Mb, 1.0, lights, "booth", map, 2, 3).unwrap()
    }

    #[test]
    fn test_mb_lights_validated() {
        let err = Constraint::new(ConstraintKind::Mb, 1.0, 2, "", BTreeMap::new(), 2, 3);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidLights { lights: 2, .. })
        ));

        // MN takes arbitrary counts
        assert!(Constraint::new(ConstraintKind::Mn, 1.0, 7, "", BTreeMap::new(), 2, 3).is_ok());
    }

    #[test]
    fn test_fits_counts_hits() {
        let c = mb(BTreeMap::from([(0, 0)]), 1);
        assert!(c.fits(&Matching::new(vec![vec![0, 2], vec![1]])));
        assert!(c.fits(&Matching::new(vec![vec![0], vec![1, 2]])));
        assert!(!c.fits(&Matching::new(vec![vec![1], vec![0, 2]])));
    }

    #[test]
    fn test_fits_zero_lights() {
        let c = mb(BTreeMap::from([(0, 0)]), 0);
        assert!(!c.fits(&Matching::new(vec![vec![0, 2], vec![1]])));
        assert!(c.fits(&Matching::new(vec![vec![1], vec![0, 2]])));
    }

    #[test]
    fn test_empty_map_zero_lights_always_fits() {
        let c = mb(BTreeMap::new(), 0);
        let gen = crate::engine::generator::MatchingGenerator::new(3);
        assert!(gen.iter().all(|m| c.fits(&m)));
    }

    #[test]
    fn test_multi_pair_round() {
        let c = Constraint::new(
            ConstraintKind::Mn,
            1.0,
            2,
            "",
            BTreeMap::from([(0, 0), (1, 1)]),
            2,
            3,
        )
        .unwrap();
        assert!(c.fits(&Matching::new(vec![vec![0, 2], vec![1]])));
        assert!(!c.fits(&Matching::new(vec![vec![0, 1], vec![2]])));
    }

    #[test]
    fn test_eliminate_records_whole_matching() {
        let mut c = mb(BTreeMap::from([(0, 0)]), 1);
        c.eliminate(&Matching::new(vec![vec![1], vec![0, 2]]));
        assert_eq!(c.eliminated(), 1);
        // the full matching is charged, not only the constraint's own map
        assert_eq!(c.tally.get(0, 1), 1);
        assert_eq!(c.tally.get(1, 0), 1);
        assert_eq!(c.tally.get(1, 2), 1);
        assert_eq!(c.tally.get(0, 0), 0);
    }

    #[test]
    fn test_finalize_math() {
        let (set_a, set_b) = sets();
        let mut c = mb(BTreeMap::from([(0, 0)]), 1);
        c.eliminate(&Matching::new(vec![vec![1], vec![0, 2]]));
        c.eliminate(&Matching::new(vec![vec![1, 2], vec![0]]));
        c.eliminate(&Matching::new(vec![vec![2], vec![0, 1]]));

        let table = PairTally::uniform(2, 3, 3);
        let (summary, _, remaining) = c.finalize(table, 6, &set_a, &set_b);

        assert_eq!(remaining, 3);
        assert_eq!(summary.eliminated, 3);
        assert_eq!(summary.entropy, Entropy::Bits(1.0));
        // (x1, y1) survives in every remaining matching
        assert!((summary.percentages[0] - 100.0).abs() < 1e-9);
        // (x2, y1) survives in none
        assert!((summary.percentages[3] - 0.0).abs() < 1e-9);
        assert_eq!(summary.map, vec![("x1".to_string(), "y1".to_string())]);
    }

    #[test]
    fn test_title_format() {
        let c = mb(BTreeMap::new(), 0);
        assert_eq!(c.title(), "MB#1.0");
        let half = Constraint::new(ConstraintKind::Mn, 2.5, 0, "", BTreeMap::new(), 2, 3).unwrap();
        assert_eq!(half.title(), "MN#2.5");
    }
}
