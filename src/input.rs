//! Loading of preference files into a [`Problem`].

use indexmap::IndexMap;
use raidconf::{InputFile, PlayerRecord};

use crate::{Configuration, Error, HourSet, Participant, Result, timezone::ResetOffset};

/// Everything needed to run the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub config: Configuration,

    /// Hour of the reference reset time. Solution hours are on the clock where
    /// the reset happens at `<reference_reset_hour>:30`.
    pub reference_reset_hour: u32,

    pub participants: Vec<Participant>,
}

impl Problem {
    /// Parses a preference file and normalizes every player's hours into the
    /// reference timezone.
    pub fn parse(data: &str) -> Result<Problem> {
        Self::from_file(InputFile::parse(data)?)
    }

    /// Builds the problem from an already parsed preference file.
    pub fn from_file(file: InputFile) -> Result<Problem> {
        let header = file.header;
        let config = Configuration::new(
            header.raid_times.into(),
            header.best_weights,
            header.acceptable_weights,
        )?;
        let reference_reset_hour = u32::from(header.reset_hour);

        log::debug!(
            "best weights: {:?}, acceptable weights: {:?}",
            config.best_weights(),
            config.acceptable_weights()
        );

        // Every record is scored, in file order. Names only serve to report
        // repeated players.
        let mut first_lines: IndexMap<String, u32> = IndexMap::new();
        let mut participants = Vec::with_capacity(file.players.len());
        for record in file.players {
            let line = record.line;
            if let Some(&first) = first_lines.get(record.name.as_str()) {
                log::warn!(
                    "line {line}: player '{}' was already listed on line {first}, \
                    both entries are scored",
                    record.name
                );
            } else {
                first_lines.insert(record.name.clone(), line);
            }

            participants.push(normalize(record, reference_reset_hour)?);
        }

        Ok(Problem {
            config,
            reference_reset_hour,
            participants,
        })
    }
}

/// Converts a player record into a [`Participant`] in the reference timezone.
fn normalize(record: PlayerRecord, reference_reset_hour: u32) -> Result<Participant> {
    let PlayerRecord {
        name,
        line,
        reset_hour,
        best,
        acceptable,
    } = record;

    let Some(reset_hour) = reset_hour else {
        if !best.is_empty() || !acceptable.is_empty() {
            return Err(Error::MissingReset { name, line });
        }
        log::warn!("line {line}: player '{name}' has no reset time and no hours");
        return Ok(Participant::new(name, HourSet::empty(), HourSet::empty()));
    };

    let offset = ResetOffset::new(reference_reset_hour, reset_hour.into());
    let best = offset.hours_to_reference(best.into_iter().map(u32::from))?;
    let acceptable = offset.hours_to_reference(acceptable.into_iter().map(u32::from))?;

    let overlap = Participant::overlap(best, acceptable);
    if !overlap.is_empty() {
        log::warn!(
            "line {line}: player '{name}' lists hours as both best and acceptable, \
            keeping them as best: {overlap}"
        );
    }

    Ok(Participant::new(name, best, acceptable))
}
