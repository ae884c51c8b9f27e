//! Timing of solver phases.

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use log::RecordBuilder;

/// Log target for timing records.
pub const TIMING_TARGET: &str = "raidtimes::timing";

/// Measures the time until it is stopped or dropped and logs it as a
/// [`log::trace!`] record `<msg> took <time>` attributed to the call site.
pub struct ScopedTimer {
    caller: &'static Location<'static>,
    msg: Option<String>,
    start: Instant,
}

impl ScopedTimer {
    #[track_caller]
    pub fn msg(msg: impl Into<String>) -> ScopedTimer {
        Self {
            caller: Location::caller(),
            msg: Some(msg.into()),
            start: Instant::now(),
        }
    }

    /// Stops the timer and returns the elapsed time.
    pub fn stop(mut self) -> Duration {
        let elapsed = self.start.elapsed();
        if let Some(msg) = self.msg.take() {
            emit(self.caller, &msg, elapsed);
        }
        elapsed
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !std::thread::panicking()
            && let Some(msg) = self.msg.take()
        {
            emit(self.caller, &msg, self.start.elapsed());
        }
    }
}

fn emit(caller: &'static Location<'static>, msg: &str, elapsed: Duration) {
    if log::max_level() < log::LevelFilter::Trace {
        return;
    }

    log::logger().log(
        &RecordBuilder::new()
            .args(format_args!("{msg} took {:.3}", elapsed.display()))
            .level(log::Level::Trace)
            .target(TIMING_TARGET)
            .file(Some(caller.file()))
            .line(Some(caller.line()))
            .build(),
    );
}

/// Extension trait for [`std::time::Duration`].
pub trait DurationExt {
    fn display(&self) -> DurationDisplay<'_>;
}

impl DurationExt for Duration {
    fn display(&self) -> DurationDisplay<'_> {
        DurationDisplay { inner: self }
    }
}

/// Displays a [`Duration`] in the largest unit that keeps the value at or
/// above 1, with the unit suffix.
///
/// The precision of the format specifier applies to the converted value.
#[derive(Debug)]
pub struct DurationDisplay<'a> {
    inner: &'a Duration,
}

impl std::fmt::Display for DurationDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = *self.inner;
        if d < Duration::from_micros(1) {
            return write!(f, "{}ns", d.as_nanos());
        }

        let (unit, suffix) = if d < Duration::from_millis(1) {
            (Duration::from_micros(1), "µs")
        } else if d < Duration::from_secs(1) {
            (Duration::from_millis(1), "ms")
        } else {
            (Duration::from_secs(1), "s")
        };

        let value = d.div_duration_f64(unit);
        match f.precision() {
            Some(precision) => write!(f, "{value:.precision$}{suffix}"),
            None => write!(f, "{value}{suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DurationExt, ScopedTimer};

    #[test]
    fn duration_formatting() {
        let tests = [
            (Duration::from_secs(2), None, "2s"),
            (Duration::from_secs(1), Some(3), "1.000s"),
            (Duration::from_nanos(250), None, "250ns"),
            (Duration::from_micros(12), Some(1), "12.0µs"),
            (Duration::from_millis(100), Some(2), "100.00ms"),
            (Duration::new(1, 500_000_000), None, "1.5s"),
        ];

        for (duration, precision, expected) in tests {
            let formatted = match precision {
                Some(precision) => format!("{:.precision$}", duration.display()),
                None => format!("{}", duration.display()),
            };
            assert_eq!(
                formatted, expected,
                "duration = {duration:?}, precision = {precision:?}"
            );
        }
    }

    #[test]
    fn stop_returns_elapsed() {
        let timer = ScopedTimer::msg("sleeping");
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.stop() >= Duration::from_millis(2));
    }
}
