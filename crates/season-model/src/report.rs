//! The season result document.
//!
//! Field names match the JSON document consumed by clients, so renaming a
//! field here is a breaking change.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPoints {
    pub driver: String,
    pub team: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCount {
    pub driver: String,
    pub team: String,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumEntry {
    pub driver: String,
    pub team: String,
    pub pos: String,
    pub grid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastestLapEntry {
    pub driver: String,
    pub team: String,
    pub lap_time: String,
    pub race: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionGainEntry {
    pub driver: String,
    pub team: String,
    pub gained: i64,
    pub race: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastestLapCount {
    pub driver: String,
    pub team: String,
    pub count: u32,
}

/// Season-level aggregates over every supplied race table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub status: ReportStatus,
    /// Driver standings, descending by points.
    pub standings: Vec<DriverPoints>,
    /// Constructor standings, descending by points.
    pub team_standings: Vec<TeamPoints>,
    pub most_wins: Vec<WinCount>,
    /// One podium per race, in upload order.
    pub podiums: Vec<Vec<PodiumEntry>>,
    pub fastest_lap_per_race: Vec<FastestLapEntry>,
    pub positions_gained: Vec<PositionGainEntry>,
    pub most_fastest_laps: Vec<FastestLapCount>,
}

impl SeasonReport {
    /// Number of races folded into this report.
    pub fn race_count(&self) -> usize {
        self.podiums.len()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
