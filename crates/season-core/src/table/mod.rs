//! Race table parsing.

mod header;
mod reader;

pub use header::{
    BEST, DRIVER, GRID, POINTS, POINTS_FALLBACK, POSITION, POSITION_FALLBACK, RaceColumns, TEAM,
    clean_header,
};
pub use reader::{first_block, read_race_table};
