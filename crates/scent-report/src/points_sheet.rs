//! Points sheet export, read back by `scent_ingest::load_points_sheet`.
//!
//! Points are written at full precision so season runs see the same values
//! the round was scored with.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use scent_core::RoundScore;
use scent_model::ParticipantRegistry;

use crate::error::{ReportError, Result};

/// Writes a round's tournament points, one row per team in round-total
/// order. Searches a team did not run are left empty.
pub fn write_points_sheet<W: Write>(
    writer: W,
    round: &RoundScore,
    registry: &ParticipantRegistry,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    let mut header = vec!["Handler".to_string(), "Dog".to_string()];
    header.extend(round.events.iter().map(|event| event.name.clone()));
    header.push("Total".to_string());
    writer.write_record(&header)?;

    for ranked in &round.totals {
        let participant = ranked.total.participant;
        let (handler, animal) = registry
            .get(participant)
            .map(|team| (team.handler.clone(), team.animal.clone()))
            .unwrap_or_else(|| (participant.to_string(), String::new()));
        let mut record = vec![handler, animal];
        record.extend(round.events.iter().map(|event| {
            event
                .tournament_points(participant)
                .map(|points| points.to_string())
                .unwrap_or_default()
        }));
        record.push(ranked.total.tournament_points.to_string());
        writer.write_record(&record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_points_sheet_file(
    path: &Path,
    round: &RoundScore,
    registry: &ParticipantRegistry,
) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_points_sheet(file, round, registry)
}
