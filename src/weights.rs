//! Cumulative reward tables.

use crate::Configuration;

/// Running sums of the configured weights.
///
/// `best_cum()[n]` is the reward for a player getting `n` of their best hours
/// and `acceptable_cum()[n]` is the acceptable reward accumulated over the
/// first `n` hours a player can attend. Both tables have `k + 1` entries and
/// start at 0.
///
/// When a weight list is shorter than `k`, its last weight keeps being added
/// for the remaining counts. The acceptable list is only extended this way
/// when the best list is non-empty as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    best_cum: Box<[i64]>,
    acceptable_cum: Box<[i64]>,
}

impl WeightTable {
    /// Builds the tables for `config`.
    pub fn new(config: &Configuration) -> WeightTable {
        let best = config.best_weights();
        let acceptable = config.acceptable_weights();

        let best_increment = |i: usize| best.get(i).or(best.last()).copied().unwrap_or(0);

        let acceptable_increment = |i: usize| {
            acceptable
                .get(i)
                .or_else(|| acceptable.last().filter(|_| !best.is_empty()))
                .copied()
                .unwrap_or(0)
        };

        WeightTable {
            best_cum: running_sum(config.k(), best_increment),
            acceptable_cum: running_sum(config.k(), acceptable_increment),
        }
    }

    /// Largest count the tables cover.
    #[inline]
    pub fn k(&self) -> usize {
        self.best_cum.len() - 1
    }

    #[inline]
    pub fn best_cum(&self) -> &[i64] {
        &self.best_cum
    }

    #[inline]
    pub fn acceptable_cum(&self) -> &[i64] {
        &self.acceptable_cum
    }
}

fn running_sum(k: usize, increment: impl Fn(usize) -> i64) -> Box<[i64]> {
    std::iter::once(0)
        .chain((0..k).scan(0i64, |sum, i| {
            *sum += increment(i);
            Some(*sum)
        }))
        .collect()
}
