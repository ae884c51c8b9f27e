//! Scoring of candidate solutions.
//!
//! A participant scores the best reward for the number of their best hours in
//! the candidate, plus the acceptable reward for the acceptable hours counted
//! after the best ones:
//!
//! ```text
//! best_cum[b] + acceptable_cum[b + a] - acceptable_cum[b]
//! ```
//!
//! Since the best and acceptable sets are disjoint and a candidate has exactly
//! `k` hours, `b + a <= k` and the lookups stay inside the tables.

use crate::{HourSet, Participant, WeightTable};

/// How a single participant contributes to a solution's score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantScore {
    /// Number of the participant's best hours in the candidate.
    pub best_count: u32,

    /// Number of the participant's acceptable hours in the candidate.
    pub acceptable_count: u32,

    /// Reward from the best hours.
    pub best_reward: i64,

    /// Reward from the acceptable hours.
    pub acceptable_reward: i64,
}

impl ParticipantScore {
    #[inline]
    pub fn total(&self) -> i64 {
        self.best_reward + self.acceptable_reward
    }
}

/// Computes the score breakdown of `participant` for `candidate`.
pub fn breakdown(
    participant: &Participant,
    candidate: HourSet,
    table: &WeightTable,
) -> ParticipantScore {
    let best_count = (participant.best() & candidate).count();
    let acceptable_count = (participant.acceptable() & candidate).count();

    let b = best_count as usize;
    let a = acceptable_count as usize;
    debug_assert!(b + a <= table.k(), "candidate has more than k hours");

    let acceptable_cum = table.acceptable_cum();

    ParticipantScore {
        best_count,
        acceptable_count,
        best_reward: table.best_cum()[b],
        acceptable_reward: acceptable_cum[b + a] - acceptable_cum[b],
    }
}

/// Score of `participant` for `candidate`.
#[inline]
pub fn score_participant(participant: &Participant, candidate: HourSet, table: &WeightTable) -> i64 {
    breakdown(participant, candidate, table).total()
}

/// Score of `candidate` summed over all participants.
pub fn score_solution(participants: &[Participant], candidate: HourSet, table: &WeightTable) -> i64 {
    participants
        .iter()
        .map(|participant| score_participant(participant, candidate, table))
        .sum()
}
