use std::{io::Write, sync::Mutex};

use clap::ValueEnum;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Log level message strings.
///
/// The log crate names levels in uppercase which reads poorly in a console
/// next to the program name.
const LEVEL_NAMES: [&str; 6] = ["", "error:", "warning:", "info:", "debug:", "trace:"];

const LEVEL_COLORS: [Color; 6] = [
    Color::White,
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::White,
    Color::Blue,
];

/// The main cli logger implementation
pub struct Logger {
    /// Buffered stderr writer
    stderr: BufferWriter,

    /// Maximum log level
    max_level: log::Level,

    /// Separator written before the next message
    ///
    /// A multiline message is followed by an empty line so that it stands
    /// apart from the messages after it.
    prepend: Mutex<&'static str>,
}

impl Logger {
    /// Creates a new logger with the specified options
    pub fn new(max_level: log::Level, colors: ColorOption) -> Self {
        let choice = if should_use_colors(colors) {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };

        Self {
            stderr: BufferWriter::stderr(choice),
            max_level,
            prepend: Mutex::new(""),
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level() as usize;
        let msg = record.args().to_string();

        let Ok(mut prepend) = self.prepend.lock() else {
            return;
        };

        let mut buffer = self.stderr.buffer();
        let _ = write!(buffer, "{prepend}{CARGO_PKG_NAME}: ");
        let _ = buffer.set_color(
            ColorSpec::new()
                .set_fg(Some(LEVEL_COLORS[level]))
                .set_bold(true),
        );
        let _ = write!(buffer, "{}", LEVEL_NAMES[level]);
        let _ = buffer.reset();
        let _ = writeln!(buffer, " {msg}");
        let _ = self.stderr.print(&buffer);

        *prepend = if msg.contains('\n') { "\n" } else { "" };
    }

    fn flush(&self) {}
}

/// Color options for the logger
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorOption {
    /// Automatically use colors depending on the environment
    #[value(name = "auto")]
    #[default]
    Auto,

    /// Always use colors
    #[value(name = "always")]
    Always,

    /// Never use colors
    #[value(name = "never")]
    Never,
}

impl std::fmt::Display for ColorOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(v) = self.to_possible_value() {
            write!(f, "{}", v.get_name())?;
        }

        Ok(())
    }
}

pub fn init(max_level: log::Level, colors: ColorOption) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(max_level, colors)))
        .map(|()| log::set_max_level(max_level.to_level_filter()))
}

/// Returns `true` if colors should be used in log messages given the specified
/// color option and environment variable values.
fn should_use_colors(color: ColorOption) -> bool {
    match color {
        ColorOption::Always => true,
        ColorOption::Never => false,
        ColorOption::Auto => {
            if env_flag("NO_COLOR") {
                false
            } else if env_flag("CLICOLOR_FORCE") {
                true
            } else if std::env::var_os("CLICOLOR").is_none() || env_flag("CLICOLOR") {
                use std::io::IsTerminal;
                std::io::stderr().is_terminal()
            } else {
                false
            }
        }
    }
}

/// Returns `true` if the environment variable `name` is set to a non-empty
/// value that is not 0.
///
/// Used for following https://no-color.org/ and https://bixense.com/clicolors/
fn env_flag(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty() && v != "0")
}
