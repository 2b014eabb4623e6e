use std::path::PathBuf;

use season_model::{RaceResult, SeasonReport};

#[derive(Debug)]
pub struct StandingsRun {
    /// Table labels in race order.
    pub tables: Vec<String>,
    pub roster_entries: usize,
    pub report: SeasonReport,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InspectRun {
    pub table: String,
    pub result: RaceResult,
}
