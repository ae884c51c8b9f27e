/// Result type for the solver library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the solver library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An hour outside of `0..24` was used to build an [`HourSet`](crate::HourSet).
    #[error("hour {hour} is out of range, expected 0..24")]
    OutOfRange { hour: u32 },

    /// The number of slots to choose is outside of `1..=24`.
    #[error("cannot choose {0} of 24 hours, expected 1..=24")]
    SlotCount(usize),

    /// A player line referenced hours without a reset time.
    #[error("line {line}: player '{name}' lists hours but has no reset time")]
    MissingReset { name: String, line: u32 },

    #[error("{0}")]
    Parse(#[from] raidconf::Error),
}
