use std::{
    io::Read,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use raidtimes::ranking::{MAX_LOWER_TIER, MAX_SOLUTIONS, RankLimits};

use crate::logging::ColorOption;

/// Finds the best recurring daily raid hours for a guild.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Preference file to read, stdin when absent or '-'
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Maximum number of reported solutions
    #[arg(long, value_name = "N", default_value_t = MAX_SOLUTIONS)]
    pub max_solutions: usize,

    /// Maximum number of reported solutions scoring below the best score
    #[arg(long, value_name = "N", default_value_t = MAX_LOWER_TIER)]
    pub max_lower_tier: usize,

    /// Number of threads to score candidates with [default: available parallelism]
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<NonZeroUsize>,

    /// Print timing information
    #[arg(long)]
    pub print_timing: bool,

    /// Use colors in diagnostic messages
    #[arg(long, value_name = "WHEN", default_value_t = ColorOption::Auto)]
    pub color_diagnostics: ColorOption,

    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn limits(&self) -> RankLimits {
        RankLimits {
            max_solutions: self.max_solutions,
            max_lower_tier: self.max_lower_tier,
        }
    }

    /// Name of the input for diagnostics.
    pub fn input_name(&self) -> String {
        match self.input_path() {
            Some(path) => path.display().to_string(),
            None => "<stdin>".into(),
        }
    }

    fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// Reads the whole input file.
    pub fn read_input(&self) -> anyhow::Result<String> {
        match self.input_path() {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display())),
            None => {
                let mut data = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut data)
                    .context("cannot read standard input")?;
                Ok(data)
            }
        }
    }
}
