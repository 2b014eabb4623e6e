use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use season_core::{AliasResolver, aggregate_season, process_table};
use season_ingest::{collect_table_paths, load_roster, read_table_source, read_table_sources};
use season_model::{AggregationOptions, RosterEntry};

use crate::cli::{InspectArgs, StandingsArgs};
use crate::types::{InspectRun, StandingsRun};

pub fn run_standings(args: &StandingsArgs) -> Result<StandingsRun> {
    let span = info_span!("standings", inputs = args.inputs.len());
    let _guard = span.enter();
    let start = Instant::now();

    let paths = collect_table_paths(&args.inputs).context("collect race tables")?;
    let sources = read_table_sources(&paths).context("read race tables")?;
    let roster = read_roster(args.roster.as_deref())?;
    let resolver = AliasResolver::from_entries(&roster);
    let options = AggregationOptions::new()
        .with_parallel_parse(!args.sequential)
        .with_skip_blank_rows(args.skip_blank_rows);

    let report = aggregate_season(&sources, &resolver, &options);

    if let Some(output) = &args.output {
        let json = report.to_json(true).context("serialize result document")?;
        std::fs::write(output, json)
            .with_context(|| format!("write result document to {}", output.display()))?;
        info!(path = %output.display(), "wrote result document");
    }

    info!(
        tables = sources.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "standings complete"
    );

    Ok(StandingsRun {
        tables: sources.iter().map(|source| source.label()).collect(),
        roster_entries: roster.len(),
        report,
        output: args.output.clone(),
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectRun> {
    let source = read_table_source(&args.table).context("read race table")?;
    let roster = read_roster(args.roster.as_deref())?;
    let resolver = AliasResolver::from_entries(&roster);
    let options = AggregationOptions::sequential().with_skip_blank_rows(args.skip_blank_rows);
    let result = process_table(1, &source.text, &resolver, &options);
    Ok(InspectRun {
        table: source.label(),
        result,
    })
}

fn read_roster(path: Option<&Path>) -> Result<Vec<RosterEntry>> {
    match path {
        Some(path) => {
            load_roster(path).with_context(|| format!("load roster {}", path.display()))
        }
        None => Ok(Vec::new()),
    }
}
