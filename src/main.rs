use std::{
    io::{BufWriter, Write},
    num::NonZeroUsize,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use raidtimes::{Problem, render, solver::Solver, timing::DurationExt};

use crate::cli::CliArgs;

mod cli;
mod logging;

/// cli entrypoint
fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    setup_logging(&args);

    if let Err(e) = try_main(args) {
        log::error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main(args: CliArgs) -> Result<()> {
    let threads = args.threads.unwrap_or_else(default_threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .build()
        .context("cannot create thread pool")?;

    pool.install(|| run_raidtimes(&args))
}

fn run_raidtimes(args: &CliArgs) -> Result<()> {
    let input_name = args.input_name();
    let data = args.read_input()?;
    let problem =
        Problem::parse(&data).with_context(|| format!("cannot load {input_name}"))?;

    log::info!(
        "will try to find {} optimal raid times, reference reset at {}:30",
        problem.config.k(),
        problem.reference_reset_hour
    );
    for participant in &problem.participants {
        log::info!("{participant}");
    }

    let solver = Solver::new(&problem.config, &problem.participants).limits(args.limits());

    let timer = Instant::now();
    let report = solver.solve()?;
    if args.print_timing {
        log::info!("solve time: {}", timer.elapsed().display());
    }

    if let Some(best_score) = report.best_score {
        log::info!(
            "best score {best_score}, reporting {} top tier and {} lower tier solutions of {} candidates",
            report.top_tier().len(),
            report.lower_tier().len(),
            report.evaluated
        );
    }

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    render::write_report(&mut stdout, &report, &solver).context("cannot write report")?;
    stdout.flush().context("cannot write report")?;

    Ok(())
}

/// Number of scoring threads when `--threads` is not given.
fn default_threads() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

fn setup_logging(args: &CliArgs) {
    let mut max_level = log::Level::Info;
    if args.verbose >= 2 {
        max_level = log::Level::Trace;
    } else if args.verbose >= 1 {
        max_level = log::Level::Debug;
    }

    crate::logging::init(max_level, args.color_diagnostics)
        .expect("logging should only be initialized once");
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::default_threads;

    #[test]
    fn at_least_one_thread() {
        assert!(default_threads() >= NonZeroUsize::MIN);
    }
}
