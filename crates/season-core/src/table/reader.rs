//! Race table reading from raw CSV text.

use csv::{ReaderBuilder, StringRecord};
use season_model::{AggregationOptions, RaceRow};
use tracing::{debug, warn};

use crate::alias::AliasResolver;
use crate::numeric::{parse_lap_time, parse_points, positions_gained};

use super::header::RaceColumns;

/// Returns the first block of a table text.
///
/// The text is trimmed and cut at the first empty line; anything after it
/// (qualifying tables, notes) is not part of the race table.
pub fn first_block(text: &str) -> &str {
    let text = text.trim();
    let mut end = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        if content.is_empty() {
            break;
        }
        end += line.len();
    }
    text[..end].trim_end()
}

/// Parses the race table in `text` into canonicalized rows.
///
/// Malformed records are skipped with a warning; missing or unparseable
/// fields degrade to their defaults.
pub fn read_race_table(
    text: &str,
    resolver: &AliasResolver,
    options: &AggregationOptions,
) -> Vec<RaceRow> {
    let block = first_block(text);
    if block.is_empty() {
        debug!("race table is empty");
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(block.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => RaceColumns::from_headers(headers.iter()),
        Err(error) => {
            warn!(%error, "could not read race table header");
            return Vec::new();
        }
    };
    let missing = columns.missing();
    if !missing.is_empty() {
        debug!(?missing, "race table lacks recognized columns");
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(line = line + 2, %error, "skipping malformed race table record");
                continue;
            }
        };
        let row = read_row(&record, &columns, resolver);
        if options.skip_blank_rows && row.identity().is_blank() {
            debug!(line = line + 2, "skipping row without driver and team");
            continue;
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "parsed race table");
    rows
}

fn read_row(record: &StringRecord, columns: &RaceColumns, resolver: &AliasResolver) -> RaceRow {
    let field = |idx: Option<usize>| idx.and_then(|idx| record.get(idx)).unwrap_or("");
    let with_fallback = |primary: Option<usize>, fallback: Option<usize>| {
        let value = field(primary);
        if value.trim().is_empty() {
            field(fallback)
        } else {
            value
        }
    };

    let driver = field(columns.driver).trim();
    let team = field(columns.team).trim();
    let position = with_fallback(columns.position, columns.position_fallback).trim();
    let grid = field(columns.grid).trim();
    let points = parse_points(with_fallback(columns.points, columns.points_fallback));
    let best_lap = field(columns.best).trim();

    let canonical = resolver.resolve(driver, team);
    RaceRow {
        driver: canonical.name,
        team: canonical.team,
        position: position.to_string(),
        grid: grid.to_string(),
        points,
        best_lap: best_lap.to_string(),
        lap_seconds: parse_lap_time(best_lap),
        positions_gained: positions_gained(grid, position),
    }
}
