//! Sets of hours of the day.

use std::ops::{BitAnd, BitOr, BitXor, BitXorAssign};

use crate::{Error, Result};

/// Number of hours in the universe of an [`HourSet`].
pub const HOURS: u32 = 24;

const FULL_MASK: u32 = (1 << HOURS) - 1;

/// A set of hours of the day stored as a 24-bit mask.
///
/// Bit `h` is set if hour `h` is a member. Bits 24 and up are always clear.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourSet(u32);

impl HourSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set containing every hour of the day.
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Creates a set from a raw bit mask.
    ///
    /// Fails with [`Error::OutOfRange`] naming the lowest offending hour if
    /// any bit at or above [`HOURS`] is set.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let invalid = bits & !FULL_MASK;
        if invalid != 0 {
            return Err(Error::OutOfRange {
                hour: invalid.trailing_zeros(),
            });
        }

        Ok(Self(bits))
    }

    /// Creates a set from a raw bit mask, dropping every bit at or above
    /// [`HOURS`].
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & FULL_MASK)
    }

    /// Creates a set from a list of hours.
    pub fn from_hours(hours: impl IntoIterator<Item = u32>) -> Result<Self> {
        hours
            .into_iter()
            .try_fold(Self::empty(), |set, hour| set.with(hour))
    }

    /// Returns the raw bit mask.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns a copy of this set with `hour` added.
    pub fn with(self, hour: u32) -> Result<Self> {
        if hour >= HOURS {
            return Err(Error::OutOfRange { hour });
        }

        Ok(Self(self.0 | 1 << hour))
    }

    /// Returns `true` if `hour` is in the set.
    #[inline]
    pub const fn contains(self, hour: u32) -> bool {
        hour < HOURS && self.0 & (1 << hour) != 0
    }

    /// Adds `hour` to the set.
    pub fn set(&mut self, hour: u32) -> Result<()> {
        *self = self.with(hour)?;
        Ok(())
    }

    /// Removes `hour` from the set. Hours outside of the universe are never
    /// members so removing them does nothing.
    pub fn unset(&mut self, hour: u32) {
        if hour < HOURS {
            self.0 &= !(1 << hour);
        }
    }

    #[inline]
    pub const fn intersect(self, other: HourSet) -> HourSet {
        Self(self.0 & other.0)
    }

    #[inline]
    pub const fn union(self, other: HourSet) -> HourSet {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn symmetric_difference(self, other: HourSet) -> HourSet {
        Self(self.0 ^ other.0)
    }

    /// Number of hours in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the hours in ascending order.
    pub fn hours(self) -> Hours {
        Hours { bits: self.0 }
    }
}

impl BitAnd for HourSet {
    type Output = HourSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl BitOr for HourSet {
    type Output = HourSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitXor for HourSet {
    type Output = HourSet;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl BitXorAssign for HourSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Formats the hours separated by a single space, e.g. `18 19 22`.
impl std::fmt::Display for HourSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut it = self.hours();
        let Some(first) = it.next() else {
            return Ok(());
        };

        write!(f, "{first}")?;
        it.try_for_each(|hour| write!(f, " {hour}"))
    }
}

/// Iterator over the hours of an [`HourSet`].
#[derive(Debug, Clone)]
pub struct Hours {
    bits: u32,
}

impl Iterator for Hours {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let hour = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(hour)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Hours {}
