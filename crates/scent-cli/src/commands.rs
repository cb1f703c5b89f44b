use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use scent_core::{EventLabel, PointPolicy, round_standings, score_round, season_standings};
use scent_ingest::{RoundFile, discover_round_files, load_points_sheet, load_search_sheet};
use scent_model::{EventIndex, ParticipantRegistry, TournamentPointEntry};
use scent_report::{
    CsvSink, JsonSink, Report, ReportSink, round_reports, round_standings_report,
    season_reports, write_points_sheet_file,
};

use crate::cli::{CommonArgs, OutputFormatArg, ResultsArgs, StandingsArgs};
use crate::settings::{Settings, check_keep};
use crate::summary::render_reports;

pub fn run_results(args: &ResultsArgs) -> Result<()> {
    let settings = Settings::resolve(&args.common)?;
    let results_span = info_span!(
        "results",
        sheet = %args.sheet.display(),
        level = %settings.level
    );
    let _results_guard = results_span.enter();
    let start = Instant::now();

    let fraction = args
        .time_fraction
        .map_or(settings.time_fraction, Into::into);
    let mut registry = ParticipantRegistry::new();
    let sheet = load_search_sheet(&args.sheet, fraction, &mut registry)
        .with_context(|| format!("read {}", args.sheet.display()))?;
    let round = score_round(&sheet.events, PointPolicy::for_level(settings.level))
        .with_context(|| format!("score {}", args.sheet.display()))?;
    info!(
        event_count = round.events.len(),
        participant_count = registry.len(),
        duration_ms = start.elapsed().as_millis(),
        "round scored"
    );

    if let Some(path) = &args.export {
        write_points_sheet_file(path, &round, &registry)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "points sheet exported");
    }

    let reports = round_reports(&round, &registry)?;
    emit(&reports, &args.common)
}

/// Points sheets of one level loaded into a shared registry.
struct LoadedRounds {
    registry: ParticipantRegistry,
    events: Vec<EventLabel>,
    search_entries: Vec<TournamentPointEntry>,
    rounds: Vec<EventLabel>,
    round_entries: Vec<TournamentPointEntry>,
}

fn load_rounds(dir: &Path, prefix: &str, settings: &Settings) -> Result<LoadedRounds> {
    let files = discover_round_files(dir, prefix)
        .with_context(|| format!("find round files in {}", dir.display()))?;
    if files.is_empty() {
        bail!("no {prefix}*.csv round files in {}", dir.display());
    }

    let mut loaded = LoadedRounds {
        registry: ParticipantRegistry::new(),
        events: Vec::new(),
        search_entries: Vec::new(),
        rounds: Vec::new(),
        round_entries: Vec::new(),
    };
    let searches_per_round = settings.level.searches_per_round();
    for RoundFile { round, path } in &files {
        let sheet = info_span!("round", round = *round).in_scope(|| {
            load_points_sheet(path, *round, searches_per_round, &mut loaded.registry)
                .with_context(|| format!("read {}", path.display()))
        })?;
        debug!(
            round = *round,
            path = %path.display(),
            search_count = sheet.events.len(),
            team_count = sheet.rows.len(),
            "points sheet loaded"
        );
        loaded.events.extend(
            sheet
                .events
                .iter()
                .map(|column| EventLabel::new(column.index, column.name.clone())),
        );
        loaded.search_entries.extend(sheet.search_entries());
        loaded
            .rounds
            .push(EventLabel::new(EventIndex::new(*round), format!("Round {round}")));
        loaded.round_entries.extend(sheet.round_entries());
    }
    info!(
        round_count = files.len(),
        participant_count = loaded.registry.len(),
        "round files loaded"
    );
    Ok(loaded)
}

pub fn run_season(args: &StandingsArgs) -> Result<()> {
    let settings = Settings::resolve(&args.common)?;
    let prefix = args.prefix.as_deref().unwrap_or(&settings.file_prefix);
    let season_span = info_span!(
        "season",
        dir = %args.dir.display(),
        level = %settings.level,
        prefix = %prefix
    );
    let _season_guard = season_span.enter();
    let start = Instant::now();

    let loaded = load_rounds(&args.dir, prefix, &settings)?;
    let keep = check_keep(args.keep.unwrap_or(settings.keep_searches))?;
    let season = season_standings(
        loaded.events,
        &loaded.search_entries,
        keep,
        &settings.categories,
    )
    .context("build season standings")?;
    info!(
        keep,
        team_count = season.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "season complete"
    );

    let reports = season_reports(&season, &loaded.registry)?;
    emit(&reports, &args.common)
}

pub fn run_rounds(args: &StandingsArgs) -> Result<()> {
    let settings = Settings::resolve(&args.common)?;
    let prefix = args.prefix.as_deref().unwrap_or(&settings.file_prefix);
    let rounds_span = info_span!(
        "rounds",
        dir = %args.dir.display(),
        level = %settings.level,
        prefix = %prefix
    );
    let _rounds_guard = rounds_span.enter();
    let start = Instant::now();

    let loaded = load_rounds(&args.dir, prefix, &settings)?;
    let keep = check_keep(args.keep.unwrap_or(settings.keep_rounds))?;
    let standings = round_standings(loaded.rounds, &loaded.round_entries, keep)
        .context("build round standings")?;
    info!(
        keep,
        team_count = standings.placements.len(),
        duration_ms = start.elapsed().as_millis(),
        "round standings complete"
    );

    let report = round_standings_report(&standings, &loaded.registry)?;
    emit(&[report], &args.common)
}

/// Writes reports in the requested format to the output file or stdout.
fn emit(reports: &[Report], common: &CommonArgs) -> Result<()> {
    let mut writer: Box<dyn Write> = match &common.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match common.format {
        OutputFormatArg::Table => {
            writeln!(writer, "{}", render_reports(reports)).context("write report")?;
            writer.flush().context("write report")?;
        }
        OutputFormatArg::Csv => write_all(&mut CsvSink::new(writer), reports)?,
        OutputFormatArg::Json => write_all(&mut JsonSink::new(writer), reports)?,
    }
    Ok(())
}

fn write_all(sink: &mut dyn ReportSink, reports: &[Report]) -> Result<()> {
    for report in reports {
        sink.write_report(report)
            .with_context(|| format!("write report '{}'", report.title))?;
    }
    sink.finish().context("finish report output")?;
    Ok(())
}
