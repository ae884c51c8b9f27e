//! Conversion of players' local hours into the reference timezone.
//!
//! Every player reports the hour at which the daily reset happens on their
//! own clock. The reset is the same instant for everybody, so the difference
//! between a player's reset hour and the reference reset hour is that
//! player's offset from the reference timezone.

use crate::{HOURS, HourSet, Result};

/// Offset between a player's local clock and the reference clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOffset {
    /// Hours to add to a local hour, in `0..24`.
    shift: u32,
}

impl ResetOffset {
    /// Creates the offset for a player whose reset happens at
    /// `local_reset_hour` while the reference reset is at
    /// `reference_reset_hour`.
    ///
    /// Both hours are taken modulo 24.
    pub fn new(reference_reset_hour: u32, local_reset_hour: u32) -> ResetOffset {
        let shift = (HOURS + reference_reset_hour % HOURS - local_reset_hour % HOURS) % HOURS;
        Self { shift }
    }

    /// Converts a local hour to the reference clock. Hour 24 is midnight.
    #[inline]
    pub fn to_reference(self, local_hour: u32) -> u32 {
        (local_hour % HOURS + self.shift) % HOURS
    }

    /// Converts a list of local hours into a set of reference hours.
    pub fn hours_to_reference(
        self,
        local_hours: impl IntoIterator<Item = u32>,
    ) -> Result<HourSet> {
        HourSet::from_hours(local_hours.into_iter().map(|hour| self.to_reference(hour)))
    }
}
