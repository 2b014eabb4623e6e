//! Race table header cleaning and column resolution.

use std::collections::HashMap;

pub const DRIVER: &str = "Driver";
pub const TEAM: &str = "Team";
pub const POSITION: &str = "Pos.";
pub const POSITION_FALLBACK: &str = "Position";
pub const GRID: &str = "Grid";
pub const POINTS: &str = "Pts.";
pub const POINTS_FALLBACK: &str = "Points";
pub const BEST: &str = "Best";

/// Cleans a header value: byte-order marks and quote characters are removed
/// anywhere in the name, then surrounding whitespace is trimmed.
pub fn clean_header(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\u{feff}' && *c != '"')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Column positions of the recognized race table fields.
///
/// Names are matched case-sensitively after cleaning. When a name occurs
/// more than once, the last column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceColumns {
    pub driver: Option<usize>,
    pub team: Option<usize>,
    pub position: Option<usize>,
    pub position_fallback: Option<usize>,
    pub grid: Option<usize>,
    pub points: Option<usize>,
    pub points_fallback: Option<usize>,
    pub best: Option<usize>,
}

impl RaceColumns {
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index: HashMap<String, usize> = headers
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (clean_header(name.as_ref()), idx))
            .collect();
        let find = |name: &str| index.get(name).copied();
        Self {
            driver: find(DRIVER),
            team: find(TEAM),
            position: find(POSITION),
            position_fallback: find(POSITION_FALLBACK),
            grid: find(GRID),
            points: find(POINTS),
            points_fallback: find(POINTS_FALLBACK),
            best: find(BEST),
        }
    }

    /// Names of recognized fields that have no column.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.driver.is_none() {
            missing.push(DRIVER);
        }
        if self.team.is_none() {
            missing.push(TEAM);
        }
        if self.position.is_none() && self.position_fallback.is_none() {
            missing.push(POSITION);
        }
        if self.grid.is_none() {
            missing.push(GRID);
        }
        if self.points.is_none() && self.points_fallback.is_none() {
            missing.push(POINTS);
        }
        if self.best.is_none() {
            missing.push(BEST);
        }
        missing
    }
}
