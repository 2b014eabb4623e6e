//! Parsed race rows and per-race extraction results.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::report::PodiumEntry;

/// One competitor's line in one race table, after alias resolution.
///
/// Display strings are kept as they appeared in the table (trimmed); the
/// numeric interpretations are derived once at parse time and are `None`
/// when the source value could not be interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRow {
    pub driver: String,
    pub team: String,
    pub position: String,
    pub grid: String,
    pub points: f64,
    pub best_lap: String,
    /// Best lap in seconds; `None` means the row can never hold the fastest lap.
    pub lap_seconds: Option<f64>,
    /// Grid minus finishing position; `None` when either is non-numeric.
    pub positions_gained: Option<i64>,
}

impl RaceRow {
    pub fn identity(&self) -> Identity {
        Identity::new(self.driver.clone(), self.team.clone())
    }

    /// True when the finishing position is exactly `"1"`.
    pub fn is_winner(&self) -> bool {
        self.position == "1"
    }
}

/// Holder of a race's fastest lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestLap {
    pub identity: Identity,
    /// Lap time as displayed in the table.
    pub lap_time: String,
    pub lap_seconds: f64,
}

/// Holder of a race's largest position gain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionGain {
    pub identity: Identity,
    pub gained: i64,
}

/// Everything derived from one race table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// 1-based position of the table in upload order.
    pub race: usize,
    pub rows: Vec<RaceRow>,
    pub fastest_lap: Option<FastestLap>,
    pub biggest_gain: Option<PositionGain>,
    /// Identities classified in position `"1"`; may hold more than one.
    pub winners: Vec<Identity>,
    /// Up to three rows ordered by numeric finishing position.
    pub podium: Vec<PodiumEntry>,
}

impl RaceResult {
    /// A race with no rows and no extractions.
    pub fn empty(race: usize) -> Self {
        Self {
            race,
            rows: Vec::new(),
            fastest_lap: None,
            biggest_gain: None,
            winners: Vec::new(),
            podium: Vec::new(),
        }
    }
}
