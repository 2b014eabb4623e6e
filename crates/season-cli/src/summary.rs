use std::collections::HashMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use season_model::{PodiumEntry, RaceRow, SeasonReport};

use crate::types::{InspectRun, StandingsRun};

pub fn print_standings(run: &StandingsRun) {
    let report = &run.report;
    println!("Races: {}", run.tables.len());
    println!("Roster entries: {}", run.roster_entries);
    if let Some(path) = &run.output {
        println!("Result document: {}", path.display());
    }
    println!();
    println!("Drivers:");
    println!("{}", driver_table(report));
    println!();
    println!("Constructors:");
    println!("{}", constructor_table(report));
    println!();
    println!("Races:");
    println!("{}", race_table(run));
    println!();
    println!("Fastest laps:");
    println!("{}", fastest_lap_table(report));
    println!();
    println!("Position gains:");
    println!("{}", position_gain_table(report));
}

pub fn print_race(run: &InspectRun) {
    let result = &run.result;
    println!("Table: {}", run.table);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pos"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Grid"),
        header_cell("Points"),
        header_cell("Best"),
        header_cell("Gained"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for row in &result.rows {
        table.add_row(row_cells(row));
    }
    println!("{table}");
    println!("Winners: {}", winners_line(&result.winners));
    println!("Podium: {}", podium_line(&result.podium));
    match &result.fastest_lap {
        Some(fastest) => println!("Fastest lap: {} {}", fastest.identity, fastest.lap_time),
        None => println!("Fastest lap: -"),
    }
    match &result.biggest_gain {
        Some(gain) => println!("Biggest gain: {} {:+}", gain.identity, gain.gained),
        None => println!("Biggest gain: -"),
    }
}

fn driver_table(report: &SeasonReport) -> Table {
    let wins: HashMap<(&str, &str), u32> = report
        .most_wins
        .iter()
        .map(|w| ((w.driver.as_str(), w.team.as_str()), w.wins))
        .collect();
    let fastest: HashMap<(&str, &str), u32> = report
        .most_fastest_laps
        .iter()
        .map(|f| ((f.driver.as_str(), f.team.as_str()), f.count))
        .collect();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Points"),
        header_cell("Wins"),
        header_cell("Fastest laps"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (idx, entry) in report.standings.iter().enumerate() {
        let key = (entry.driver.as_str(), entry.team.as_str());
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&entry.driver)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.team),
            Cell::new(format_points(entry.points)).add_attribute(Attribute::Bold),
            count_cell(wins.get(&key).copied(), Color::Green),
            count_cell(fastest.get(&key).copied(), Color::Magenta),
        ]);
    }
    table
}

fn constructor_table(report: &SeasonReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Team"), header_cell("Points")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, entry) in report.team_standings.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&entry.team),
            Cell::new(format_points(entry.points)),
        ]);
    }
    table
}

fn race_table(run: &StandingsRun) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Race"),
        header_cell("Table"),
        header_cell("Podium"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, podium) in run.report.podiums.iter().enumerate() {
        let label = run.tables.get(idx).map_or("-", String::as_str);
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(label),
            Cell::new(podium_line(podium)),
        ]);
    }
    table
}

/// Per-race fastest laps, numbered as they appear in the result document.
fn fastest_lap_table(report: &SeasonReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Lap"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in &report.fastest_lap_per_race {
        table.add_row(vec![
            Cell::new(entry.race),
            Cell::new(&entry.driver),
            Cell::new(&entry.team),
            Cell::new(&entry.lap_time).fg(Color::Magenta),
        ]);
    }
    table
}

fn position_gain_table(report: &SeasonReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Gained"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in &report.positions_gained {
        table.add_row(vec![
            Cell::new(entry.race),
            Cell::new(&entry.driver),
            Cell::new(&entry.team),
            Cell::new(format!("{:+}", entry.gained)),
        ]);
    }
    table
}

fn row_cells(row: &RaceRow) -> Vec<Cell> {
    vec![
        Cell::new(&row.position),
        Cell::new(&row.driver),
        Cell::new(&row.team),
        Cell::new(&row.grid),
        Cell::new(format_points(row.points)),
        match row.lap_seconds {
            Some(_) => Cell::new(&row.best_lap),
            None => dim_cell(if row.best_lap.is_empty() {
                "-"
            } else {
                row.best_lap.as_str()
            }),
        },
        match row.positions_gained {
            Some(gained) => Cell::new(format!("{gained:+}")),
            None => dim_cell("-"),
        },
    ]
}

/// Formats points without a trailing `.0` for whole numbers.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{points:.0}")
    } else {
        points.to_string()
    }
}

/// One-line podium, e.g. `1. A (Red), 2. B (Blue)`.
pub fn podium_line(podium: &[PodiumEntry]) -> String {
    if podium.is_empty() {
        return "-".to_string();
    }
    podium
        .iter()
        .map(|entry| format!("{}. {} ({})", entry.pos, entry.driver, entry.team))
        .collect::<Vec<_>>()
        .join(", ")
}

fn winners_line(winners: &[season_model::Identity]) -> String {
    if winners.is_empty() {
        return "-".to_string();
    }
    winners
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: Option<u32>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
