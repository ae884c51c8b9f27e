use nom::{
    Parser,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, space0},
    combinator::cut,
    multi::separated_list1,
    sequence::{delimited, terminated},
};

use crate::{
    error::{ErrorKind, SpanError},
    parsers::{PResult, Span, end_of_line, expect, lex, parse_integer, parse_reset_time},
};

/// A player line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Player name.
    pub name: String,

    /// Line number of the record in the input file.
    pub line: u32,

    /// Hour of the player's local reset time if the line has a `reset(..)`
    /// command.
    pub reset_hour: Option<u8>,

    /// Best hours in the player's local time, in `0..=24`.
    pub best: Vec<u8>,

    /// Acceptable hours in the player's local time, in `0..=24`.
    pub acceptable: Vec<u8>,
}

/// A `<command>(<arguments>)` entry on a player line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Reset(u8),
    Best(Vec<u8>),
    Acceptable(Vec<u8>),
}

/// Parses a local hour for the hour list named `list`.
fn hour<'a>(list: &'static str) -> impl Parser<Span<'a>, Output = u8, Error = SpanError<'a>> {
    parse_integer.map_res(move |value| {
        u8::try_from(value)
            .ok()
            .filter(|hour| *hour <= 24)
            .ok_or(ErrorKind::Hour { list, value })
    })
}

/// Parses a possibly empty list of hours up to the closing parenthesis.
fn hour_list<'a>(
    list: &'static str,
) -> impl Parser<Span<'a>, Output = Vec<u8>, Error = SpanError<'a>> {
    move |input: Span<'a>| -> PResult<'a, Vec<u8>> {
        let (input, _) = space0::<_, SpanError<'a>>(input)?;
        if input.fragment().starts_with(')') {
            return Ok((input, Vec::new()));
        }

        separated_list1(lex(char(',')), cut(lex(hour(list)))).parse(input)
    }
}

/// Parses a single command.
fn parse_command(input: Span<'_>) -> PResult<'_, (Span<'_>, Command)> {
    let (rest, name) =
        expect("a command name", take_while1(|c: char| c.is_ascii_alphabetic())).parse(input)?;

    let (rest, _) = lex(expect("'('", char('('))).parse(rest)?;

    let (rest, command) = match *name.fragment() {
        "reset" => lex(parse_reset_time).map(Command::Reset).parse(rest)?,
        "best" => hour_list("best").map(Command::Best).parse(rest)?,
        "acceptable" => hour_list("acceptable")
            .map(Command::Acceptable)
            .parse(rest)?,
        other => {
            return Err(nom::Err::Failure(SpanError::new(
                name,
                ErrorKind::UnknownCommand(other.to_string()),
            )));
        }
    };

    let (rest, _) = expect("')'", char(')')).parse(rest)?;
    Ok((rest, (name, command)))
}

/// Parses a player line into a record for line number `line`.
pub(crate) fn parse_player_line(input: Span<'_>, line: u32) -> PResult<'_, PlayerRecord> {
    let (rest, name) = expect("a player name", take_till(|c: char| c == ',')).parse(input)?;
    let trimmed = name.fragment().trim();
    if trimmed.is_empty() {
        return Err(nom::Err::Failure(SpanError::new(name, ErrorKind::MissingName)));
    }

    let (rest, _) = expect("',' after the player name", char(',')).parse(rest)?;
    let (rest, commands) = terminated(
        separated_list1(char(','), cut(delimited(space0, parse_command, space0))),
        end_of_line,
    )
    .parse(rest)?;

    let mut record = PlayerRecord {
        name: trimmed.to_string(),
        line,
        reset_hour: None,
        best: Vec::new(),
        acceptable: Vec::new(),
    };

    let mut seen = [false; 3];
    for (span, command) in commands {
        let (slot, label) = match &command {
            Command::Reset(_) => (0, "reset"),
            Command::Best(_) => (1, "best"),
            Command::Acceptable(_) => (2, "acceptable"),
        };

        let fail = |kind| Err(nom::Err::Failure(SpanError::new(span, kind)));
        if std::mem::replace(&mut seen[slot], true) {
            return fail(ErrorKind::DuplicateCommand(label));
        }

        match command {
            Command::Reset(hour) => record.reset_hour = Some(hour),
            Command::Best(_) | Command::Acceptable(_) if record.reset_hour.is_none() => {
                return fail(ErrorKind::HoursBeforeReset(label));
            }
            Command::Best(hours) => record.best = hours,
            Command::Acceptable(hours) => record.acceptable = hours,
        }
    }

    Ok((rest, record))
}

#[cfg(test)]
mod tests {
    use nom::Finish;

    use super::{PlayerRecord, parse_player_line};
    use crate::{error::ErrorKind, parsers::Span};

    fn parse(line: &str) -> Result<PlayerRecord, (ErrorKind, usize)> {
        parse_player_line(Span::new(line), 1)
            .finish()
            .map(|(_, parsed)| parsed)
            .map_err(|e| (e.kind, e.input.get_utf8_column()))
    }

    #[test]
    fn full_player() {
        let player = parse("Alice , reset( 18:30 ), best(19, 20 ,21), acceptable(22)")
            .expect("Could not parse player");
        assert_eq!(
            player,
            PlayerRecord {
                name: "Alice".into(),
                line: 1,
                reset_hour: Some(18),
                best: vec![19, 20, 21],
                acceptable: vec![22],
            }
        );
    }

    #[test]
    fn empty_lists() {
        let player = parse("bob, reset(0:30), best(), acceptable( )").expect("Could not parse player");
        assert!(player.best.is_empty());
        assert!(player.acceptable.is_empty());
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(
            parse("carol, reset(3:30), best(1, 25)"),
            Err((
                ErrorKind::Hour {
                    list: "best",
                    value: 25
                },
                29
            ))
        );
    }

    #[test]
    fn hours_before_reset() {
        assert_eq!(
            parse("dave, best(1), reset(3:30)"),
            Err((ErrorKind::HoursBeforeReset("best"), 7))
        );
    }

    #[test]
    fn duplicate_command() {
        assert_eq!(
            parse("erin, reset(3:30), reset(4:30)"),
            Err((ErrorKind::DuplicateCommand("reset"), 20))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse("frank, reset(3:30), worst(4)"),
            Err((ErrorKind::UnknownCommand("worst".into()), 21))
        );
    }

    #[test]
    fn missing_name_and_comma() {
        assert_eq!(parse("  , reset(3:30)"), Err((ErrorKind::MissingName, 1)));
        assert_eq!(
            parse("grace reset(3:30)"),
            Err((ErrorKind::Expected("',' after the player name"), 18))
        );
    }

    #[test]
    fn garbage_after_command() {
        assert_eq!(
            parse("heidi, reset(3:30) best(1)"),
            Err((ErrorKind::TrailingInput, 20))
        );
        assert_eq!(
            parse("ivan, reset(3:30),"),
            Err((ErrorKind::Expected("a command name"), 19))
        );
    }
}
