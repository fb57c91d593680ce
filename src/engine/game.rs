use thiserror::Error;
use tracing::{debug, info};

use crate::config::ConfigError;
use crate::core::{LabelSet, Matching};
use crate::engine::constraint::Constraint;
use crate::engine::generator::MatchingGenerator;
use crate::engine::report::SimReport;
use crate::engine::tally::PairTally;

/// Fatal conditions detected during the finalize pass.
#[derive(Debug, Error)]
pub enum StateError {
    /// A constraint left zero candidates while later constraints were
    /// still pending. The constraints up to and including the named one
    /// are mutually contradictory; percentages for the rest are
    /// undefined. (A *terminal* constraint may empty the pool — the run
    /// then completes with unbounded entropy.)
    #[error("No candidate matchings survive {constraint}; later constraints cannot be scored")]
    Contradictory { constraint: String },
}

/// Options for a [`Game::run`] pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Keep the accepted matchings (in generation order) in the report.
    pub collect_matchings: bool,
}

/// A fully validated game: both label sets and the ordered constraint
/// list.
///
/// Constraint order is a semantic input, not an iteration detail: a
/// matching rejected by several constraints is charged to the earliest
/// one, so reordering the list changes every downstream statistic.
#[derive(Debug)]
pub struct Game {
    set_a: LabelSet,
    set_b: LabelSet,
    constraints: Vec<Constraint>,
}

impl Game {
    /// # Errors
    ///
    /// Set A must be non-empty and exactly one element shorter than set B.
    pub fn new(
        set_a: LabelSet,
        set_b: LabelSet,
        constraints: Vec<Constraint>,
    ) -> Result<Self, ConfigError> {
        if set_a.is_empty() {
            return Err(ConfigError::Empty { set: 'A' });
        }
        if set_a.len() + 1 != set_b.len() {
            return Err(ConfigError::SizeMismatch {
                size_a: set_a.len(),
                size_b: set_b.len(),
            });
        }
        Ok(Self {
            set_a,
            set_b,
            constraints,
        })
    }

    #[must_use]
    pub fn set_a(&self) -> &LabelSet {
        &self.set_a
    }

    #[must_use]
    pub fn set_b(&self) -> &LabelSet {
        &self.set_b
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Evaluate the constraints in list order. The first one that rejects
    /// `matching` is charged with its elimination and the matching is
    /// dropped; later constraints never see it.
    pub fn filter(&mut self, matching: &Matching) -> bool {
        for constraint in &mut self.constraints {
            if !constraint.fits(matching) {
                constraint.eliminate(matching);
                return false;
            }
        }
        true
    }

    /// Enumerate the full candidate space once, filter it, and finalize
    /// the per-constraint statistics.
    ///
    /// Consumes the game: accumulators are written during the single scan
    /// and the returned report is immutable.
    ///
    /// # Errors
    ///
    /// [`StateError::Contradictory`] if a non-terminal constraint leaves
    /// zero candidates.
    pub fn run(mut self, options: RunOptions) -> Result<SimReport, StateError> {
        let generator = MatchingGenerator::new(self.set_b.len());

        let mut total = 0u64;
        let mut baseline = 0u64;
        let mut remaining = 0u64;
        let mut accepted = options.collect_matchings.then(Vec::new);

        for matching in generator.iter() {
            total += 1;
            if matching.contains(0, 0) {
                baseline += 1;
            }
            if self.filter(&matching) {
                remaining += 1;
                if let Some(list) = accepted.as_mut() {
                    list.push(matching);
                }
            }
        }
        info!("Scanned {total} matchings, {remaining} remain after {} constraints",
            self.constraints.len());

        let Game {
            set_a,
            set_b,
            constraints,
        } = self;

        // By symmetry every pair appears in `baseline` matchings, so the
        // running remaining-table starts out uniform.
        let mut table = PairTally::uniform(set_a.len(), set_b.len(), baseline);
        let mut running_total = total;
        let prefilter = table.percentages(total);

        let count = constraints.len();
        let mut summaries = Vec::with_capacity(count);
        for (idx, constraint) in constraints.into_iter().enumerate() {
            let title = constraint.title();
            let (summary, next_table, next_total) =
                constraint.finalize(table, running_total, &set_a, &set_b);
            table = next_table;
            running_total = next_total;
            debug!(
                "Finalized {title}: {} eliminated, {running_total} left",
                summary.eliminated
            );

            if running_total == 0 && idx + 1 < count {
                return Err(StateError::Contradictory { constraint: title });
            }
            summaries.push(summary);
        }

        Ok(SimReport {
            set_a,
            set_b,
            total,
            baseline,
            prefilter,
            constraints: summaries,
            remaining,
            accepted,
        })
    }
}
