use nom::{
    IResult, Parser,
    character::complete::{char, space0},
    combinator::cut,
    multi::separated_list1,
    sequence::{delimited, separated_pair},
};
use nom_locate::LocatedSpan;

use crate::error::{ErrorKind, SpanError};

/// Input type for all line parsers.
pub type Span<'a> = LocatedSpan<&'a str>;

pub(crate) type PResult<'a, O> = IResult<Span<'a>, O, SpanError<'a>>;

/// Combinator for removing preceeding and trailing whitespace when applying
/// the specified parser
pub(crate) fn lex<'a, O, P>(parser: P) -> impl Parser<Span<'a>, Output = O, Error = SpanError<'a>>
where
    P: Parser<Span<'a>, Output = O, Error = SpanError<'a>>,
{
    delimited(space0, parser, space0)
}

/// Combinator which replaces a generic syntax error from `parser` with
/// "expected `what`".
///
/// Errors raised with a more specific [`ErrorKind`] are passed through.
pub(crate) fn expect<'a, O, P>(
    what: &'static str,
    mut parser: P,
) -> impl Parser<Span<'a>, Output = O, Error = SpanError<'a>>
where
    P: Parser<Span<'a>, Output = O, Error = SpanError<'a>>,
{
    move |input: Span<'a>| -> PResult<'a, O> {
        parser.parse(input).map_err(|e| {
            e.map(|mut err| {
                if matches!(err.kind, ErrorKind::Syntax(_)) {
                    err.kind = ErrorKind::Expected(what);
                }
                err
            })
        })
    }
}

/// Succeeds only if nothing but whitespace remains on the line.
pub(crate) fn end_of_line(input: Span<'_>) -> PResult<'_, ()> {
    let (input, _) = space0::<_, SpanError<'_>>(input)?;
    if input.fragment().is_empty() {
        Ok((input, ()))
    } else {
        Err(nom::Err::Failure(SpanError::new(
            input,
            ErrorKind::TrailingInput,
        )))
    }
}

/// Parses an optionally signed decimal integer.
pub(crate) fn parse_integer(input: Span<'_>) -> PResult<'_, i64> {
    expect("an integer", nom::character::complete::i64).parse(input)
}

/// Parses a non-empty comma separated list of integers.
///
/// ```text
/// 10, 6, -2
/// ```
pub(crate) fn parse_integer_list(input: Span<'_>) -> PResult<'_, Vec<i64>> {
    separated_list1(lex(char(',')), cut(lex(parse_integer))).parse(input)
}

/// Parses a reset time `<hour>:30`.
///
/// Returns the hour. Anything other than 30 minutes past the hour is rejected
/// since every timezone the game is played in is offset by whole hours from
/// the server clock.
pub(crate) fn parse_reset_time(input: Span<'_>) -> PResult<'_, u8> {
    let hour = parse_integer.map_res(|hour| {
        u8::try_from(hour)
            .ok()
            .filter(|hour| *hour < 24)
            .ok_or(ErrorKind::ResetHour(hour))
    });

    let minutes = parse_integer.map_res(|minutes| {
        if minutes == 30 {
            Ok(())
        } else {
            Err(ErrorKind::ResetMinutes(minutes))
        }
    });

    separated_pair(lex(hour), expect("':'", char(':')), cut(lex(minutes)))
        .map(|(hour, ())| hour)
        .parse(input)
}
