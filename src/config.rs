use crate::{Error, HOURS, Result};

/// What to search for and how to reward coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    k: usize,
    best_weights: Vec<i64>,
    acceptable_weights: Vec<i64>,
}

impl Configuration {
    /// Creates a configuration choosing `k` hours.
    ///
    /// `best_weights[i]` is the reward for a player's `i + 1`-th best hour in
    /// a solution, `acceptable_weights[i]` the reward for the `i + 1`-th hour
    /// counting both best and acceptable ones. Either list may be empty.
    pub fn new(k: usize, best_weights: Vec<i64>, acceptable_weights: Vec<i64>) -> Result<Self> {
        if !(1..=HOURS as usize).contains(&k) {
            return Err(Error::SlotCount(k));
        }

        Ok(Self {
            k,
            best_weights,
            acceptable_weights,
        })
    }

    /// Number of hours in a solution.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn best_weights(&self) -> &[i64] {
        &self.best_weights
    }

    #[inline]
    pub fn acceptable_weights(&self) -> &[i64] {
        &self.acceptable_weights
    }
}
