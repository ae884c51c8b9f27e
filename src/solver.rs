//! Search over every candidate schedule.

use rayon::prelude::*;

use crate::{
    Combinations, Configuration, HourSet, Participant, Result, WeightTable,
    ranking::{RankLimits, Ranking, Report},
    scoring::{self, ParticipantScore},
    timing::ScopedTimer,
};

/// Number of consecutive candidates scored as one unit of parallel work.
const CHUNK_SIZE: u64 = 1 << 14;

/// Scores every combination of `k` hours against a list of participants.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    k: usize,
    table: WeightTable,
    participants: &'a [Participant],
    limits: RankLimits,
}

impl<'a> Solver<'a> {
    /// Creates a solver for `config` with the default report limits.
    pub fn new(config: &Configuration, participants: &'a [Participant]) -> Solver<'a> {
        Self {
            k: config.k(),
            table: WeightTable::new(config),
            participants,
            limits: RankLimits::default(),
        }
    }

    /// Sets the report limits.
    pub fn limits(mut self, limits: RankLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    #[inline]
    pub fn participants(&self) -> &'a [Participant] {
        self.participants
    }

    /// Scores every candidate on the current rayon thread pool.
    ///
    /// The candidates are split into contiguous rank ranges. The report does
    /// not depend on the number of threads.
    pub fn solve(&self) -> Result<Report> {
        let total = Combinations::total(self.k)?;
        let chunks = total.div_ceil(CHUNK_SIZE);

        log::debug!(
            "scoring {total} candidates for {} participants in {chunks} chunks on {} threads",
            self.participants.len(),
            rayon::current_num_threads()
        );

        let timer = ScopedTimer::msg(format!("scoring {total} candidates"));
        let ranking = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * CHUNK_SIZE;
                self.rank_range(start, CHUNK_SIZE.min(total - start))
            })
            .try_reduce(|| Ranking::new(self.limits), |a, b| Ok(a.merge(b)))?;
        timer.stop();

        Ok(ranking.finish(self.limits))
    }

    /// Scores every candidate on the calling thread.
    pub fn solve_sequential(&self) -> Result<Report> {
        let total = Combinations::total(self.k)?;
        let _timer = ScopedTimer::msg(format!("scoring {total} candidates sequentially"));
        Ok(self.rank_range(0, total)?.finish(self.limits))
    }

    /// Ranks `len` candidates starting at rank `start`.
    fn rank_range(&self, start: u64, len: u64) -> Result<Ranking> {
        let mut ranking = Ranking::new(self.limits);
        for candidate in Combinations::from_rank(self.k, start)?.take(len as usize) {
            let score = scoring::score_solution(self.participants, candidate, &self.table);
            ranking.push(score, candidate);
        }

        log::trace!(
            "ranks {start}..{}: best score {:?}",
            start + len,
            ranking.best_score()
        );
        Ok(ranking)
    }

    /// Per participant score breakdown for `hours`.
    pub fn breakdown(
        &self,
        hours: HourSet,
    ) -> impl Iterator<Item = (&'a Participant, ParticipantScore)> + '_ {
        self.participants
            .iter()
            .map(move |participant| {
                let score = scoring::breakdown(participant, hours, &self.table);
                (participant, score)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use crate::{
        Combinations, Configuration, HourSet, Participant,
        ranking::{MAX_LOWER_TIER, MAX_SOLUTIONS, RankLimits},
    };

    fn hours(list: &[u32]) -> HourSet {
        HourSet::from_hours(list.iter().copied()).unwrap()
    }

    fn guild() -> Vec<Participant> {
        vec![
            Participant::new("alice", hours(&[19, 20]), hours(&[21])),
            Participant::new("bob", hours(&[20]), hours(&[19, 22])),
            Participant::new("carol", hours(&[20, 21]), HourSet::empty()),
            Participant::new("dave", HourSet::empty(), hours(&[18, 19, 20])),
        ]
    }

    #[test]
    fn unique_best_solution() {
        let config = Configuration::new(2, vec![10, 6], vec![3]).unwrap();
        let participants = guild();
        let report = Solver::new(&config, &participants).solve().unwrap();

        // {19, 20}: alice 16, bob 10 + 3, carol 10, dave 6
        assert_eq!(report.best_score, Some(45));
        assert_eq!(report.evaluated, 276);
        assert_eq!(report.top_tier().len(), 1);
        assert_eq!(report.solutions[0].hours, hours(&[19, 20]));

        // Every other candidate is reported below it.
        assert_eq!(report.solutions.len(), 276);
        assert!(report.solutions.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn breakdown_of_best() {
        let config = Configuration::new(2, vec![10, 6], vec![3]).unwrap();
        let participants = guild();
        let solver = Solver::new(&config, &participants);

        let totals: Vec<(&str, i64)> = solver
            .breakdown(hours(&[19, 20]))
            .map(|(p, score)| (p.name(), score.total()))
            .collect();
        assert_eq!(totals, [("alice", 16), ("bob", 13), ("carol", 10), ("dave", 6)]);
    }

    #[test]
    fn no_weights_ties_everything() {
        let config = Configuration::new(3, vec![], vec![]).unwrap();
        let participants = guild();
        let report = Solver::new(&config, &participants).solve().unwrap();

        assert_eq!(report.best_score, Some(0));
        assert_eq!(report.evaluated, 2024);
        assert_eq!(report.solutions.len(), 2024.min(MAX_SOLUTIONS));
        assert_eq!(report.top_tier().len(), report.solutions.len());
    }

    #[test]
    fn no_participants_clipped_by_total_cap() {
        let config = Configuration::new(6, vec![1], vec![1]).unwrap();
        let limits = RankLimits {
            max_solutions: 100,
            max_lower_tier: MAX_LOWER_TIER,
        };
        let report = Solver::new(&config, &[]).limits(limits).solve().unwrap();

        assert_eq!(report.best_score, Some(0));
        assert_eq!(report.evaluated, Combinations::total(6).unwrap());
        assert_eq!(report.solutions.len(), 100);
        // Ties are reported in ascending bit order.
        assert_eq!(report.solutions[0].hours.bits(), 0x00003f);
    }

    #[test]
    fn lower_tier_bounded() {
        let config = Configuration::new(4, vec![5, 1], vec![2]).unwrap();
        let participants = guild();
        let limits = RankLimits {
            max_solutions: 50,
            max_lower_tier: 20,
        };
        let report = Solver::new(&config, &participants)
            .limits(limits)
            .solve()
            .unwrap();

        assert!(report.solutions.len() <= 50);
        assert!(report.lower_tier().len() <= 20);
        assert!(!report.top_tier().is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let config = Configuration::new(5, vec![7, 3, 1], vec![2, 1]).unwrap();
        let participants = guild();
        let solver = Solver::new(&config, &participants).limits(RankLimits {
            max_solutions: 300,
            max_lower_tier: 200,
        });

        let parallel = solver.solve().unwrap();
        assert_eq!(parallel, solver.solve_sequential().unwrap());
        assert_eq!(parallel, solver.solve().unwrap());
    }
}
