//! Text output of a solver report.
//!
//! Each reported solution is written as a block:
//!
//! ```text
//! 45: 19 20
//! alice(2|0) (16 + 0)
//! bob(1|1) (10 + 3)
//!
//! ```
//!
//! The first line holds the score and the hours of the solution. Every
//! participant follows with the number of their best and acceptable hours in
//! the solution and the reward each of them contributes.

use std::io::Write;

use crate::{
    ranking::{Report, ScoredSolution},
    solver::Solver,
};

/// Writes every solution of `report` to `out`.
pub fn write_report(mut out: impl Write, report: &Report, solver: &Solver<'_>) -> std::io::Result<()> {
    for solution in &report.solutions {
        write_solution(&mut out, solution, solver)?;
    }
    out.flush()
}

/// Writes a single solution block to `out`.
pub fn write_solution(
    out: &mut impl Write,
    solution: &ScoredSolution,
    solver: &Solver<'_>,
) -> std::io::Result<()> {
    writeln!(out, "{}: {}", solution.score, solution.hours)?;
    for (participant, score) in solver.breakdown(solution.hours) {
        writeln!(
            out,
            "{}({}|{}) ({} + {})",
            participant.name(),
            score.best_count,
            score.acceptable_count,
            score.best_reward,
            score.acceptable_reward
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::{write_report, write_solution};
    use crate::{
        Configuration, HourSet, Participant,
        ranking::{RankLimits, ScoredSolution},
        solver::Solver,
    };

    fn hours(list: &[u32]) -> HourSet {
        HourSet::from_hours(list.iter().copied()).unwrap()
    }

    #[test]
    fn solution_block() {
        let config = Configuration::new(2, vec![10, 6], vec![3]).unwrap();
        let participants = [
            Participant::new("alice", hours(&[19, 20]), hours(&[21])),
            Participant::new("bob", hours(&[20]), hours(&[19, 22])),
        ];
        let solver = Solver::new(&config, &participants);

        let mut out = Vec::new();
        let solution = ScoredSolution {
            score: 29,
            hours: hours(&[19, 20]),
        };
        write_solution(&mut out, &solution, &solver).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "29: 19 20\nalice(2|0) (16 + 0)\nbob(1|1) (10 + 3)\n\n"
        );
    }

    #[test]
    fn report_blocks_in_order() {
        let config = Configuration::new(1, vec![4], vec![1]).unwrap();
        let participants = [
            Participant::new("alice", hours(&[3]), hours(&[5])),
            Participant::new("bob", hours(&[5]), HourSet::empty()),
        ];
        let solver = Solver::new(&config, &participants).limits(RankLimits {
            max_solutions: 3,
            max_lower_tier: 2,
        });
        let report = solver.solve().unwrap();

        let mut out = Vec::new();
        write_report(&mut out, &report, &solver).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "5: 5\nalice(0|1) (0 + 1)\nbob(1|0) (4 + 0)\n\n\
             4: 3\nalice(1|0) (4 + 0)\nbob(0|0) (0 + 0)\n\n\
             0: 0\nalice(0|0) (0 + 0)\nbob(0|0) (0 + 0)\n\n"
        );
    }
}
