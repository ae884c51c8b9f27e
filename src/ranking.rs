//! Ranking and truncation of scored solutions.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::HourSet;

/// Default maximum number of solutions in a report.
pub const MAX_SOLUTIONS: usize = 2048;

/// Default maximum number of reported solutions scoring below the best score.
pub const MAX_LOWER_TIER: usize = 2048;

/// A candidate together with its score.
///
/// Solutions order by score. Equal scores order by the raw hour bits where
/// the smaller bit pattern counts as the better solution so that reports are
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredSolution {
    pub score: i64,
    pub hours: HourSet,
}

impl Ord for ScoredSolution {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.hours.bits().cmp(&self.hours.bits()))
    }
}

impl PartialOrd for ScoredSolution {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Limits for the number of reported solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankLimits {
    /// Maximum number of reported solutions overall.
    pub max_solutions: usize,

    /// Maximum number of reported solutions scoring strictly below the best
    /// score.
    ///
    /// The report holds exactly `max_lower_tier` of them when enough exist
    /// and `max_solutions` leaves room.
    pub max_lower_tier: usize,
}

impl Default for RankLimits {
    fn default() -> Self {
        Self {
            max_solutions: MAX_SOLUTIONS,
            max_lower_tier: MAX_LOWER_TIER,
        }
    }
}

/// Collects scored solutions, keeping only the ones that can still end up in
/// the report.
///
/// A report is a prefix of all solutions sorted best first and never longer
/// than `max_solutions`, so keeping the `max_solutions` best solutions seen is
/// enough. Rankings over disjoint parts of the search space can be merged in
/// any order and give the same report as a single ranking over everything.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Min-heap of the best solutions seen so far.
    kept: BinaryHeap<Reverse<ScoredSolution>>,

    /// Number of solutions to keep.
    capacity: usize,

    /// Best score seen so far.
    best_score: Option<i64>,

    /// Number of solutions pushed, including the ones already dropped.
    evaluated: u64,
}

impl Ranking {
    /// Creates an empty ranking for a report bounded by `limits`.
    pub fn new(limits: RankLimits) -> Ranking {
        Self {
            kept: BinaryHeap::with_capacity(limits.max_solutions.min(MAX_SOLUTIONS) + 1),
            capacity: limits.max_solutions,
            best_score: None,
            evaluated: 0,
        }
    }

    /// Records a scored candidate.
    pub fn push(&mut self, score: i64, hours: HourSet) {
        self.evaluated += 1;
        self.best_score = max_option(self.best_score, Some(score));
        self.keep(ScoredSolution { score, hours });
    }

    /// Merges another ranking into this one.
    pub fn merge(self, other: Ranking) -> Ranking {
        let (mut into, from) = if self.kept.len() >= other.kept.len() {
            (self, other)
        } else {
            (other, self)
        };

        into.evaluated += from.evaluated;
        into.best_score = max_option(into.best_score, from.best_score);
        for Reverse(solution) in from.kept {
            into.keep(solution);
        }
        into
    }

    fn keep(&mut self, solution: ScoredSolution) {
        if self.kept.len() < self.capacity {
            self.kept.push(Reverse(solution));
        } else if let Some(mut worst) = self.kept.peek_mut()
            && solution > worst.0
        {
            *worst = Reverse(solution);
        }
    }

    /// Best score seen so far, `None` if nothing was pushed.
    #[inline]
    pub fn best_score(&self) -> Option<i64> {
        self.best_score
    }

    /// Number of candidates pushed into this ranking and the rankings merged
    /// into it.
    #[inline]
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Sorts the kept solutions and applies `limits`.
    ///
    /// Solutions are taken best first. Taking stops as soon as either the
    /// total number of solutions reaches `limits.max_solutions` or the next
    /// solution scores below the best score while `limits.max_lower_tier`
    /// lower-tier solutions were already taken.
    pub fn finish(self, limits: RankLimits) -> Report {
        let best_score = self.best_score;
        let evaluated = self.evaluated;

        // Ascending order of `Reverse` is descending order of solutions.
        let sorted = self.kept.into_sorted_vec();

        let mut solutions = Vec::with_capacity(sorted.len().min(limits.max_solutions));
        let mut lower_tier = 0usize;

        for Reverse(solution) in sorted {
            if solutions.len() == limits.max_solutions {
                break;
            }

            if best_score.is_some_and(|best| solution.score < best) {
                if lower_tier == limits.max_lower_tier {
                    break;
                }
                lower_tier += 1;
            }

            solutions.push(solution);
        }

        Report {
            best_score,
            evaluated,
            solutions,
        }
    }
}

fn max_option(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// Ranked solutions selected for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Highest score over every candidate, `None` if there were none.
    pub best_score: Option<i64>,

    /// Number of scored candidates.
    pub evaluated: u64,

    /// Reported solutions, best first.
    pub solutions: Vec<ScoredSolution>,
}

impl Report {
    /// Solutions scoring the best score.
    pub fn top_tier(&self) -> &[ScoredSolution] {
        let len = self
            .solutions
            .iter()
            .take_while(|solution| Some(solution.score) == self.best_score)
            .count();
        &self.solutions[..len]
    }

    /// Reported solutions scoring below the best score.
    pub fn lower_tier(&self) -> &[ScoredSolution] {
        &self.solutions[self.top_tier().len()..]
    }
}

#[cfg(test)]
mod tests {
    use super::{RankLimits, Ranking, ScoredSolution};
    use crate::HourSet;

    fn hours(bits: u32) -> HourSet {
        HourSet::from_bits(bits).unwrap()
    }

    fn limits(max_solutions: usize, max_lower_tier: usize) -> RankLimits {
        RankLimits {
            max_solutions,
            max_lower_tier,
        }
    }

    #[test]
    fn ordering_breaks_ties_by_bits() {
        let a = ScoredSolution {
            score: 5,
            hours: hours(0b011),
        };
        let b = ScoredSolution {
            score: 5,
            hours: hours(0b110),
        };
        let c = ScoredSolution {
            score: 6,
            hours: hours(0b111),
        };
        assert!(a > b);
        assert!(c > a);
    }

    #[test]
    fn unique_best_with_lower_tier() {
        let limits = limits(10, 3);
        let mut ranking = Ranking::new(limits);
        for bits in 1..=20u32 {
            ranking.push(bits as i64, hours(bits));
        }

        let report = ranking.finish(limits);
        assert_eq!(report.best_score, Some(20));
        assert_eq!(report.evaluated, 20);
        assert_eq!(report.top_tier().len(), 1);

        let scores: Vec<i64> = report.solutions.iter().map(|s| s.score).collect();
        assert_eq!(scores, [20, 19, 18, 17]);
        assert_eq!(report.lower_tier().len(), 3);
    }

    #[test]
    fn total_cap_clips_top_tier() {
        let limits = limits(4, 100);
        let mut ranking = Ranking::new(limits);
        for bits in 1..=10u32 {
            ranking.push(0, hours(bits));
        }

        let report = ranking.finish(limits);
        assert_eq!(report.best_score, Some(0));
        let bits: Vec<u32> = report.solutions.iter().map(|s| s.hours.bits()).collect();
        assert_eq!(bits, [1, 2, 3, 4]);
        assert!(report.lower_tier().is_empty());
    }

    #[test]
    fn lower_tier_cap_reached_exactly() {
        let limits = limits(100, 4);
        let mut ranking = Ranking::new(limits);
        ranking.push(50, hours(1));
        ranking.push(50, hours(2));
        for bits in 3..=30u32 {
            ranking.push(bits as i64, hours(bits));
        }

        let report = ranking.finish(limits);
        assert_eq!(report.top_tier().len(), 2);
        assert_eq!(report.lower_tier().len(), 4);
        assert_eq!(report.solutions.len(), 6);

        let lower: Vec<i64> = report.lower_tier().iter().map(|s| s.score).collect();
        assert_eq!(lower, [30, 29, 28, 27]);
    }

    #[test]
    fn lower_tier_cap_zero() {
        let limits = limits(10, 0);
        let mut ranking = Ranking::new(limits);
        ranking.push(3, hours(1));
        ranking.push(3, hours(2));
        ranking.push(1, hours(4));

        let report = ranking.finish(limits);
        assert_eq!(report.solutions.len(), 2);
        assert_eq!(report.top_tier().len(), 2);
    }

    #[test]
    fn merge_matches_single_pass() {
        let limits = limits(5, 3);
        let scores: Vec<(i64, u32)> = (1..=40u32).map(|bits| (((bits * 7) % 11) as i64, bits)).collect();

        let mut single = Ranking::new(limits);
        for &(score, bits) in &scores {
            single.push(score, hours(bits));
        }

        let merged = scores
            .chunks(6)
            .map(|chunk| {
                let mut part = Ranking::new(limits);
                for &(score, bits) in chunk {
                    part.push(score, hours(bits));
                }
                part
            })
            .rev()
            .fold(Ranking::new(limits), Ranking::merge);

        assert_eq!(merged.evaluated(), 40);
        assert_eq!(merged.finish(limits), single.finish(limits));
    }

    #[test]
    fn empty_ranking() {
        let report = Ranking::new(RankLimits::default()).finish(RankLimits::default());
        assert_eq!(report.best_score, None);
        assert!(report.solutions.is_empty());
        assert!(report.top_tier().is_empty());
    }
}
