//! Search for the best recurring daily raid hours of a guild.
//!
//! Every player names the hours they would like best and the hours they
//! could accept. The solver scores every combination of `k` hours of the day
//! and reports the highest scoring combinations together with how each
//! player contributes to them.
//!
//! ```no_run
//! use raidtimes::{Problem, solver::Solver};
//!
//! let data = std::fs::read_to_string("guild.txt")?;
//! let problem = Problem::parse(&data)?;
//! let solver = Solver::new(&problem.config, &problem.participants);
//! let report = solver.solve()?;
//! raidtimes::render::write_report(std::io::stdout().lock(), &report, &solver)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod combinations;
pub mod config;
pub mod error;
pub mod hourset;
pub mod input;
pub mod participant;
pub mod ranking;
pub mod render;
pub mod scoring;
pub mod solver;
pub mod timezone;
pub mod timing;
pub mod weights;

pub use combinations::{Combinations, binomial};
pub use config::Configuration;
pub use error::{Error, Result};
pub use hourset::{HOURS, HourSet};
pub use input::Problem;
pub use participant::Participant;
pub use ranking::{RankLimits, Report, ScoredSolution};
pub use weights::WeightTable;
