use nom::error::{FromExternalError, ParseError};
use thiserror::Error;

use crate::{header::HEADER_LABELS, parsers::Span};

/// Error type for parsing errors.
#[derive(Debug, Clone, Error)]
pub struct Error {
    /// Line in the file where the error occured.
    line: u32,

    /// Column of the error.
    column: usize,

    /// Text of the line where the error occured.
    fragment: String,

    /// Error kind.
    kind: ErrorKind,
}

/// What went wrong while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unexpected input: {}", .0.description())]
    Syntax(nom::error::ErrorKind),

    #[error("expected {0}")]
    Expected(&'static str),

    #[error("unrecognized header line, expected one of:\n{}", HEADER_LABELS.join("\n"))]
    UnknownHeader,

    #[error("duplicate header line \"{0}\"")]
    DuplicateHeader(&'static str),

    #[error("file ended before the header was complete, missing:\n{}", .0.join("\n"))]
    MissingHeader(Vec<&'static str>),

    #[error("invalid number of raid times to seek {0}, expected at least 1 and at most 23")]
    RaidTimes(i64),

    #[error("invalid reset hour {0}, expected 0..=23")]
    ResetHour(i64),

    #[error("reset time must be at half past the hour but found {0} minutes")]
    ResetMinutes(i64),

    #[error("invalid {list} hour {value}, expected 0..=24")]
    Hour { list: &'static str, value: i64 },

    #[error("missing player name before ','")]
    MissingName,

    #[error("unrecognized command \"{0}\", expected one of: reset, best, acceptable")]
    UnknownCommand(String),

    #[error("duplicate command \"{0}\"")]
    DuplicateCommand(&'static str),

    #[error("list of {0} hours found before the reset time")]
    HoursBeforeReset(&'static str),

    #[error("garbage found at the end of line")]
    TrailingInput,
}

impl Error {
    pub(crate) fn new(line: u32, column: usize, fragment: &str, kind: ErrorKind) -> Error {
        Self {
            line,
            column,
            fragment: fragment.to_string(),
            kind,
        }
    }

    /// Returns the line number where the error occured.
    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line
    }

    /// Returns the column number where the error occured.
    #[inline]
    pub fn column_number(&self) -> usize {
        self.column
    }

    /// Returns the text of the line where the error occured.
    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "at {line_number}:{column}: {msg}\n\
            {line_number: >5} | {fragment}\n\
            {pad: >5} | {caret:>column$}",
            msg = self.kind,
            line_number = self.line,
            fragment = self.fragment,
            pad = ' ',
            caret = '^',
            column = self.column,
        )
    }
}

/// nom error carrying the span where parsing stopped.
#[derive(Debug, Clone)]
pub(crate) struct SpanError<'a> {
    pub input: Span<'a>,
    pub kind: ErrorKind,
}

impl<'a> SpanError<'a> {
    pub fn new(input: Span<'a>, kind: ErrorKind) -> Self {
        Self { input, kind }
    }

    /// Converts the error into an [`Error`] for line `line` with text `fragment`.
    pub fn into_error(self, line: u32, fragment: &str) -> Error {
        Error::new(line, self.input.get_utf8_column(), fragment, self.kind)
    }
}

impl<'a> ParseError<Span<'a>> for SpanError<'a> {
    fn from_error_kind(input: Span<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(input, ErrorKind::Syntax(kind))
    }

    fn append(_input: Span<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<Span<'a>, ErrorKind> for SpanError<'a> {
    fn from_external_error(input: Span<'a>, _kind: nom::error::ErrorKind, e: ErrorKind) -> Self {
        Self::new(input, e)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn caret_under_column() {
        let err = Error::new(7, 14, "alice, best(31)", ErrorKind::TrailingInput);
        let rendered = err.to_string();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("at 7:14: garbage found at the end of line")
        );
        assert_eq!(lines.next(), Some("    7 | alice, best(31)"));
        assert_eq!(lines.next(), Some("      |              ^"));
    }
}
