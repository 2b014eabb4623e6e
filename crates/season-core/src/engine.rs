//! End-to-end season aggregation over raw table texts.

use rayon::prelude::*;
use season_model::{AggregationOptions, RaceResult, SeasonReport};
use tracing::{debug, info, info_span};

use crate::aggregate::SeasonAggregator;
use crate::alias::AliasResolver;
use crate::extract::extract_race;
use crate::table::read_race_table;

/// Parses and extracts one race table. `race` is its 1-based upload index.
pub fn process_table(
    race: usize,
    text: &str,
    resolver: &AliasResolver,
    options: &AggregationOptions,
) -> RaceResult {
    let span = info_span!("race", race);
    let _guard = span.enter();
    let rows = read_race_table(text, resolver, options);
    let result = extract_race(race, rows);
    debug!(
        rows = result.rows.len(),
        winners = result.winners.len(),
        fastest_lap = result.fastest_lap.is_some(),
        biggest_gain = result.biggest_gain.is_some(),
        "extracted race"
    );
    result
}

/// Aggregates every table, in the order given, into a season report.
///
/// Tables are independent until the final fold, so with
/// [`AggregationOptions::parallel_parse`] they are parsed on the rayon pool;
/// the fold itself always runs in upload order.
pub fn aggregate_season<T>(
    tables: &[T],
    resolver: &AliasResolver,
    options: &AggregationOptions,
) -> SeasonReport
where
    T: AsRef<str> + Sync,
{
    let span = info_span!("season", tables = tables.len());
    let _guard = span.enter();

    let results: Vec<RaceResult> = if options.parallel_parse {
        tables
            .par_iter()
            .enumerate()
            .map(|(idx, text)| process_table(idx + 1, text.as_ref(), resolver, options))
            .collect()
    } else {
        tables
            .iter()
            .enumerate()
            .map(|(idx, text)| process_table(idx + 1, text.as_ref(), resolver, options))
            .collect()
    };

    let mut aggregator = SeasonAggregator::new();
    for result in results {
        aggregator.fold(result);
    }
    let report = aggregator.finish();
    info!(
        races = report.race_count(),
        drivers = report.standings.len(),
        teams = report.team_standings.len(),
        "aggregated season"
    );
    report
}
