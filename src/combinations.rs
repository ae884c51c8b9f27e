//! Enumeration of every way to choose `k` hours out of a day.
//!
//! Combinations are produced in lexicographic order of their ascending hour
//! lists:
//!
//! ```text
//! k = 3
//!  rank  hours      bits (hour 0 first)
//!     0  0 1 2      111000000000000000000000
//!     1  0 1 3      110100000000000000000000
//!   ...
//!    21  0 1 23     110000000000000000000001
//!    22  0 2 3      101100000000000000000000
//!   ...
//!  2023  21 22 23   000000000000000000000111
//! ```
//!
//! The position of a combination in this order is its rank. Since any rank can
//! be turned back into its combination, the search space can be split into
//! contiguous rank ranges that are enumerated independently.

use crate::{Error, HOURS, HourSet, Result};

const N: usize = HOURS as usize;

/// Returns the binomial coefficient `C(n, r)`.
///
/// Returns 0 if `r > n`.
pub const fn binomial(n: u32, r: u32) -> u64 {
    if r > n {
        return 0;
    }

    let r = if r > n - r { n - r } else { r };
    let mut result: u64 = 1;
    let mut i = 0;
    while i < r {
        // Exact at every step: the product of i + 1 consecutive integers is
        // divisible by (i + 1)!.
        result = result * (n - i) as u64 / (i + 1) as u64;
        i += 1;
    }
    result
}

/// Iterator over every [`HourSet`] with exactly `k` hours.
///
/// Every one of the `C(24, k)` combinations is yielded exactly once. Once
/// exhausted the iterator stays exhausted.
#[derive(Debug, Clone)]
pub struct Combinations {
    /// Ascending hour indices of the next combination. Only the first `k`
    /// entries are used.
    indices: [u8; N],

    /// Number of hours in each combination.
    k: usize,

    /// Number of combinations left to yield. Zero is the exhausted state.
    remaining: u64,
}

impl Combinations {
    /// Creates an iterator over all combinations of `k` hours.
    pub fn new(k: usize) -> Result<Combinations> {
        Self::from_rank(k, 0)
    }

    /// Creates an iterator starting at the combination with rank `rank`.
    ///
    /// A rank at or past `C(24, k)` gives an exhausted iterator.
    pub fn from_rank(k: usize, rank: u64) -> Result<Combinations> {
        let total = Self::total(k)?;
        let mut indices = [0u8; N];

        if rank < total {
            unrank(k, rank, &mut indices[..k]);
        }

        Ok(Self {
            indices,
            k,
            remaining: total.saturating_sub(rank),
        })
    }

    /// Returns the number of combinations of `k` hours.
    pub fn total(k: usize) -> Result<u64> {
        if !(1..=N).contains(&k) {
            return Err(Error::SlotCount(k));
        }

        Ok(binomial(HOURS, k as u32))
    }

    fn current(&self) -> HourSet {
        let bits = self.indices[..self.k]
            .iter()
            .fold(0u32, |bits, &hour| bits | 1 << hour);

        // Every index is below 24.
        HourSet::from_bits_truncate(bits)
    }

    /// Moves to the lexicographic successor. Returns `false` if the current
    /// combination was the last one.
    fn advance(&mut self) -> bool {
        let k = self.k;
        let idx = &mut self.indices[..k];

        // Largest position that can still move right while leaving room for
        // the positions after it.
        let Some(p) = (0..k).rev().find(|&p| (idx[p] as usize) < N - (k - p)) else {
            return false;
        };

        idx[p] += 1;
        for q in p + 1..k {
            idx[q] = idx[q - 1] + 1;
        }

        true
    }
}

impl Iterator for Combinations {
    type Item = HourSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.current();
        self.remaining -= 1;
        if !self.advance() {
            self.remaining = 0;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Combinations {}

impl std::iter::FusedIterator for Combinations {}

/// Writes the ascending hour indices of the combination with lexicographic
/// rank `rank` into `out`.
///
/// `rank` must be below `C(24, out.len())`.
fn unrank(k: usize, mut rank: u64, out: &mut [u8]) {
    let mut hour = 0u32;

    for (position, slot) in out.iter_mut().enumerate() {
        let after = (k - position - 1) as u32;

        // Skip every block of combinations that start with a smaller hour at
        // this position.
        loop {
            let block = binomial(HOURS - hour - 1, after);
            if rank < block {
                break;
            }
            rank -= block;
            hour += 1;
        }

        *slot = hour as u8;
        hour += 1;
    }
}
