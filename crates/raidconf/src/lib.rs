//! Parser for raid time preference files.
//!
//! A preference file starts with a header describing what to search for,
//! followed by one line per player describing when that player can attend.
//!
//! ```text
//! # Header
//! Number of best raid times to seek: 2
//! Guild activities reset time for results: 18:30
//! Best times weights list: 10, 6
//! Acceptable times weights list: 3
//!
//! # Players
//! alice, reset(18:30), best(19, 20), acceptable(21)
//! bob, reset(20:30), best(22), acceptable(23, 0)
//! ```
//!
//! Rules
//!
//! - Lines are processed independently. A UTF-8 byte order mark at the start
//!   of a line is ignored.
//! - Empty lines, whitespace-only lines and lines starting with `#` are comments.
//! - The four header lines must appear before any player line. Each of them
//!   must appear exactly once but their order is not significant.
//! - The reset times are always at half past the hour.
//! - The number of raid times to seek must be in `1..=23`.
//! - A player line is `<name>, <command>[, <command>]...` where a command is
//!   one of `reset(<H>:30)`, `best(<hours>)` or `acceptable(<hours>)`.
//! - `best` and `acceptable` list hours in the player's local time and must
//!   come after `reset` on the same line. Local hours are in `0..=24`.
//! - Whitespace is allowed between tokens.
//!
//! Hours are not converted here. Callers receive the raw local hours together
//! with the player's reset hour and the reference reset hour from the header.

mod error;
mod file;
mod header;
mod parsers;
mod player;

pub use error::{Error, ErrorKind};
pub use file::*;
pub use header::{
    ACCEPTABLE_WEIGHTS_LABEL, BEST_WEIGHTS_LABEL, HEADER_LABELS, Header, RAID_TIMES_LABEL,
    RESET_TIME_LABEL,
};
pub use player::PlayerRecord;
