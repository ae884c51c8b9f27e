use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::space0,
    combinator::cut,
    sequence::{preceded, terminated},
};

use crate::{
    error::{ErrorKind, SpanError},
    parsers::{PResult, Span, end_of_line, lex, parse_integer, parse_integer_list, parse_reset_time},
};

pub const RAID_TIMES_LABEL: &str = "Number of best raid times to seek:";
pub const RESET_TIME_LABEL: &str = "Guild activities reset time for results:";
pub const BEST_WEIGHTS_LABEL: &str = "Best times weights list:";
pub const ACCEPTABLE_WEIGHTS_LABEL: &str = "Acceptable times weights list:";

/// Every header label in the order they are usually written.
pub const HEADER_LABELS: [&str; 4] = [
    RAID_TIMES_LABEL,
    RESET_TIME_LABEL,
    BEST_WEIGHTS_LABEL,
    ACCEPTABLE_WEIGHTS_LABEL,
];

/// The file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Number of raid times to seek.
    pub raid_times: u8,

    /// Hour of the reference reset time. Results are reported in the timezone
    /// where the reset happens at `<reset_hour>:30`.
    pub reset_hour: u8,

    /// Reward for the n-th best hour a player gets.
    pub best_weights: Vec<i64>,

    /// Reward for the n-th acceptable hour a player gets.
    pub acceptable_weights: Vec<i64>,
}

/// A single parsed header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderLine {
    RaidTimes(u8),
    ResetHour(u8),
    BestWeights(Vec<i64>),
    AcceptableWeights(Vec<i64>),
}

impl HeaderLine {
    fn label(&self) -> &'static str {
        match self {
            HeaderLine::RaidTimes(_) => RAID_TIMES_LABEL,
            HeaderLine::ResetHour(_) => RESET_TIME_LABEL,
            HeaderLine::BestWeights(_) => BEST_WEIGHTS_LABEL,
            HeaderLine::AcceptableWeights(_) => ACCEPTABLE_WEIGHTS_LABEL,
        }
    }
}

/// Collects header lines until all of them are present.
#[derive(Debug, Default)]
pub(crate) struct HeaderBuilder {
    raid_times: Option<u8>,
    reset_hour: Option<u8>,
    best_weights: Option<Vec<i64>>,
    acceptable_weights: Option<Vec<i64>>,
}

impl HeaderBuilder {
    /// Records a parsed header line.
    ///
    /// Returns [`ErrorKind::DuplicateHeader`] if the line was already seen.
    pub fn apply(&mut self, line: HeaderLine) -> Result<(), ErrorKind> {
        let label = line.label();
        let duplicate = match line {
            HeaderLine::RaidTimes(v) => self.raid_times.replace(v).is_some(),
            HeaderLine::ResetHour(v) => self.reset_hour.replace(v).is_some(),
            HeaderLine::BestWeights(v) => self.best_weights.replace(v).is_some(),
            HeaderLine::AcceptableWeights(v) => self.acceptable_weights.replace(v).is_some(),
        };

        if duplicate {
            Err(ErrorKind::DuplicateHeader(label))
        } else {
            Ok(())
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Labels of the header lines not seen yet.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.raid_times.is_none(), RAID_TIMES_LABEL),
            (self.reset_hour.is_none(), RESET_TIME_LABEL),
            (self.best_weights.is_none(), BEST_WEIGHTS_LABEL),
            (self.acceptable_weights.is_none(), ACCEPTABLE_WEIGHTS_LABEL),
        ]
        .into_iter()
        .filter_map(|(missing, label)| missing.then_some(label))
        .collect()
    }

    /// Builds the header if every line was seen.
    pub fn build(self) -> Result<Header, ErrorKind> {
        match self {
            HeaderBuilder {
                raid_times: Some(raid_times),
                reset_hour: Some(reset_hour),
                best_weights: Some(best_weights),
                acceptable_weights: Some(acceptable_weights),
            } => Ok(Header {
                raid_times,
                reset_hour,
                best_weights,
                acceptable_weights,
            }),
            incomplete => Err(ErrorKind::MissingHeader(incomplete.missing())),
        }
    }
}

/// Combinator for a header line `<label> <value>`.
///
/// Once the label matched, failures to parse the value are not recoverable.
fn labelled<'a, O, P>(
    label: &'static str,
    parser: P,
) -> impl Parser<Span<'a>, Output = O, Error = SpanError<'a>>
where
    P: Parser<Span<'a>, Output = O, Error = SpanError<'a>>,
{
    preceded(tag(label), cut(terminated(lex(parser), end_of_line)))
}

fn parse_raid_times(input: Span<'_>) -> PResult<'_, u8> {
    parse_integer
        .map_res(|count| {
            u8::try_from(count)
                .ok()
                .filter(|count| (1..=23).contains(count))
                .ok_or(ErrorKind::RaidTimes(count))
        })
        .parse(input)
}

/// Parses a single header line.
pub(crate) fn parse_header_line(input: Span<'_>) -> PResult<'_, HeaderLine> {
    let (input, _) = space0::<_, SpanError<'_>>(input)?;

    alt((
        labelled(RAID_TIMES_LABEL, parse_raid_times).map(HeaderLine::RaidTimes),
        labelled(RESET_TIME_LABEL, parse_reset_time).map(HeaderLine::ResetHour),
        labelled(BEST_WEIGHTS_LABEL, parse_integer_list).map(HeaderLine::BestWeights),
        labelled(ACCEPTABLE_WEIGHTS_LABEL, parse_integer_list).map(HeaderLine::AcceptableWeights),
    ))
    .parse(input)
    .map_err(|e| match e {
        nom::Err::Error(_) => nom::Err::Failure(SpanError::new(input, ErrorKind::UnknownHeader)),
        e => e,
    })
}
