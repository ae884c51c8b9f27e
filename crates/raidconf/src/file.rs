use nom::Finish;

use crate::{
    error::{Error, ErrorKind},
    header::{Header, HeaderBuilder, parse_header_line},
    parsers::Span,
    player::{PlayerRecord, parse_player_line},
};

/// A parsed raid time preference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// The file header.
    pub header: Header,

    /// Player records in file order.
    pub players: Vec<PlayerRecord>,
}

impl InputFile {
    /// Parses a preference file.
    pub fn parse(data: &str) -> Result<InputFile, Error> {
        let mut builder = HeaderBuilder::default();
        let mut header = None;
        let mut players = Vec::new();
        let mut last_line = 0;

        for (line_number, line) in (1u32..).zip(data.lines()) {
            last_line = line_number;

            let line = line.strip_prefix('\u{feff}').unwrap_or(line);
            if is_comment(line) {
                continue;
            }

            let input = Span::new(line);

            if header.is_some() {
                let (_, player) = parse_player_line(input, line_number)
                    .finish()
                    .map_err(|e| e.into_error(line_number, line))?;
                players.push(player);
                continue;
            }

            let (_, parsed) = parse_header_line(input)
                .finish()
                .map_err(|e| e.into_error(line_number, line))?;

            builder.apply(parsed).map_err(|kind| {
                let column = line.len() - line.trim_start().len() + 1;
                Error::new(line_number, column, line, kind)
            })?;

            if builder.is_complete() {
                header = Some(
                    std::mem::take(&mut builder)
                        .build()
                        .map_err(|kind| Error::new(line_number, 1, line, kind))?,
                );
            }
        }

        let Some(header) = header else {
            return Err(Error::new(
                last_line + 1,
                1,
                "",
                ErrorKind::MissingHeader(builder.missing()),
            ));
        };

        Ok(InputFile { header, players })
    }
}

/// Returns `true` if the line is empty, only whitespace or starts with `#`.
fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}
