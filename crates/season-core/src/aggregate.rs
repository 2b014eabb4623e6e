//! Season aggregation across races.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

use season_model::{
    DriverPoints, FastestLapCount, FastestLapEntry, Identity, PodiumEntry, PositionGainEntry,
    RaceResult, SeasonReport, TeamPoints, WinCount,
};
use tracing::trace;

/// Running totals that remember the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Tally<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: AddAssign + Default + Copy + PartialOrd,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K, amount: V) {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 += amount;
            return;
        }
        let mut total = V::default();
        total += amount;
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, total));
    }

    /// Entries sorted descending by total. Equal totals keep first-seen order.
    pub fn into_ranked(self) -> Vec<(K, V)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }
}

/// Folds per-race results into season totals.
///
/// Standings and tallies do not depend on fold order apart from how ties are
/// listed. Per-race lists are put in race order by each result's own sequence
/// number, then numbered by their position in that list: a race without an
/// entry does not consume an index.
#[derive(Debug, Default)]
pub struct SeasonAggregator {
    driver_points: Tally<Identity, f64>,
    team_points: Tally<String, f64>,
    wins: Tally<Identity, u32>,
    fastest_lap_counts: Tally<Identity, u32>,
    podiums: Vec<(usize, Vec<PodiumEntry>)>,
    fastest_laps: Vec<FastestLapEntry>,
    position_gains: Vec<PositionGainEntry>,
}

impl SeasonAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, result: RaceResult) {
        let race = result.race;
        for row in &result.rows {
            self.driver_points.add(row.identity(), row.points);
            self.team_points.add(row.team.clone(), row.points);
        }
        for winner in result.winners {
            self.wins.add(winner, 1);
        }
        if let Some(fastest) = result.fastest_lap {
            trace!(race, holder = %fastest.identity, lap = %fastest.lap_time, "fastest lap");
            self.fastest_lap_counts.add(fastest.identity.clone(), 1);
            self.fastest_laps.push(FastestLapEntry {
                driver: fastest.identity.name,
                team: fastest.identity.team,
                lap_time: fastest.lap_time,
                race,
            });
        }
        if let Some(gain) = result.biggest_gain {
            trace!(race, holder = %gain.identity, gained = gain.gained, "biggest gain");
            self.position_gains.push(PositionGainEntry {
                driver: gain.identity.name,
                team: gain.identity.team,
                gained: gain.gained,
                race,
            });
        }
        self.podiums.push((race, result.podium));
    }

    pub fn finish(self) -> SeasonReport {
        let mut podiums = self.podiums;
        podiums.sort_by_key(|(race, _)| *race);
        let mut fastest_laps = self.fastest_laps;
        fastest_laps.sort_by_key(|entry| entry.race);
        for (idx, entry) in fastest_laps.iter_mut().enumerate() {
            entry.race = idx + 1;
        }
        let mut position_gains = self.position_gains;
        position_gains.sort_by_key(|entry| entry.race);
        for (idx, entry) in position_gains.iter_mut().enumerate() {
            entry.race = idx + 1;
        }

        SeasonReport {
            standings: self
                .driver_points
                .into_ranked()
                .into_iter()
                .map(|(identity, points)| DriverPoints {
                    driver: identity.name,
                    team: identity.team,
                    points,
                })
                .collect(),
            team_standings: self
                .team_points
                .into_ranked()
                .into_iter()
                .map(|(team, points)| TeamPoints { team, points })
                .collect(),
            most_wins: self
                .wins
                .into_ranked()
                .into_iter()
                .map(|(identity, wins)| WinCount {
                    driver: identity.name,
                    team: identity.team,
                    wins,
                })
                .collect(),
            podiums: podiums.into_iter().map(|(_, podium)| podium).collect(),
            fastest_lap_per_race: fastest_laps,
            positions_gained: position_gains,
            most_fastest_laps: self
                .fastest_lap_counts
                .into_ranked()
                .into_iter()
                .map(|(identity, count)| FastestLapCount {
                    driver: identity.name,
                    team: identity.team,
                    count,
                })
                .collect(),
            ..SeasonReport::default()
        }
    }
}
