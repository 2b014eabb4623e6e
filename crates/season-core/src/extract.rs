//! Per-race extraction: winners, podium, fastest lap and biggest gain.

use season_model::{FastestLap, Identity, PodiumEntry, PositionGain, RaceResult, RaceRow};

use crate::numeric::podium_position;

/// Derives everything the season needs from one race's rows.
pub fn extract_race(race: usize, rows: Vec<RaceRow>) -> RaceResult {
    RaceResult {
        race,
        fastest_lap: fastest_lap(&rows),
        biggest_gain: biggest_gain(&rows),
        winners: winners(&rows),
        podium: podium(&rows),
        rows,
    }
}

/// The row with the strictly smallest lap time; the first one wins ties.
pub fn fastest_lap(rows: &[RaceRow]) -> Option<FastestLap> {
    let mut best: Option<(&RaceRow, f64)> = None;
    for row in rows {
        let Some(seconds) = row.lap_seconds else {
            continue;
        };
        if best.is_none_or(|(_, current)| seconds < current) {
            best = Some((row, seconds));
        }
    }
    best.map(|(row, seconds)| FastestLap {
        identity: row.identity(),
        lap_time: row.best_lap.clone(),
        lap_seconds: seconds,
    })
}

/// The row with the strictly largest position gain; the first one wins ties.
pub fn biggest_gain(rows: &[RaceRow]) -> Option<PositionGain> {
    let mut best: Option<(&RaceRow, i64)> = None;
    for row in rows {
        let Some(gained) = row.positions_gained else {
            continue;
        };
        if best.is_none_or(|(_, current)| gained > current) {
            best = Some((row, gained));
        }
    }
    best.map(|(row, gained)| PositionGain {
        identity: row.identity(),
        gained,
    })
}

/// Every identity classified in position `"1"`.
pub fn winners(rows: &[RaceRow]) -> Vec<Identity> {
    rows.iter()
        .filter(|row| row.is_winner())
        .map(RaceRow::identity)
        .collect()
}

/// The top three rows by numeric finishing position.
///
/// Rows without a purely numeric position are left out. Rows sharing a
/// position keep their table order.
pub fn podium(rows: &[RaceRow]) -> Vec<PodiumEntry> {
    let mut classified: Vec<(u64, &RaceRow)> = rows
        .iter()
        .filter_map(|row| podium_position(&row.position).map(|pos| (pos, row)))
        .collect();
    classified.sort_by_key(|(pos, _)| *pos);
    classified
        .into_iter()
        .take(3)
        .map(|(_, row)| PodiumEntry {
            driver: row.driver.clone(),
            team: row.team.clone(),
            pos: row.position.clone(),
            grid: row.grid.clone(),
        })
        .collect()
}
