// Property-based tests for alias resolution and season folding.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::BTreeMap;

use proptest::prelude::*;
use season_core::{AliasResolver, aggregate_season};
use season_model::{AggregationOptions, Identity, RosterEntry, SeasonReport};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

const DRIVERS: [&str; 5] = ["Ann", "Bo", "Cy", "Di", "Ed"];
const TEAMS: [&str; 3] = ["Red", "Blue", "Green"];

#[derive(Debug, Clone)]
struct Row {
    driver: usize,
    team: usize,
    pos: String,
    grid: String,
    points: u8,
    best: String,
}

fn arb_position() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (1u8..=20).prop_map(|p| p.to_string()),
        1 => Just("DNF".to_string()),
        1 => Just("DSQ".to_string()),
        1 => Just(String::new()),
    ]
}

fn arb_lap() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (1u8..=2, 0u8..60, 0u16..1000)
            .prop_map(|(m, s, ms)| format!("{m}:{s:02}.{ms:03}")),
        1 => Just("abc".to_string()),
        1 => Just(String::new()),
    ]
}

fn arb_invalid_lap() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("abc".to_string()),
        Just(String::new()),
        Just("90.5".to_string()),
        Just("1:02:03.4".to_string()),
        r"[a-z]{1,5}",
    ]
}

fn arb_row() -> impl Strategy<Value = Row> {
    (
        0..DRIVERS.len(),
        0..TEAMS.len(),
        arb_position(),
        arb_position(),
        0u8..=26,
        arb_lap(),
    )
        .prop_map(|(driver, team, pos, grid, points, best)| Row {
            driver,
            team,
            pos,
            grid,
            points,
            best,
        })
}

fn arb_race() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(arb_row(), 0..12)
}

fn arb_word() -> impl Strategy<Value = String> {
    r"[A-Za-z]{1,8}( [A-Za-z]{1,8})?"
}

fn render(rows: &[Row]) -> String {
    let mut text = String::from("Pos.,Driver,Team,Grid,Pts.,Best\n");
    for row in rows {
        text.push_str(&format!(
            "{},{},{},{},{},{}\n",
            row.pos, DRIVERS[row.driver], TEAMS[row.team], row.grid, row.points, row.best
        ));
    }
    text
}

fn run(tables: &[String]) -> SeasonReport {
    aggregate_season(
        tables,
        &AliasResolver::empty(),
        &AggregationOptions::sequential(),
    )
}

fn driver_totals(report: &SeasonReport) -> BTreeMap<(String, String), f64> {
    report
        .standings
        .iter()
        .map(|s| ((s.driver.clone(), s.team.clone()), s.points))
        .collect()
}

fn team_totals(report: &SeasonReport) -> BTreeMap<String, f64> {
    report
        .team_standings
        .iter()
        .map(|t| (t.team.clone(), t.points))
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn standings_independent_of_race_order(first in arb_race(), second in arb_race()) {
        let forward = run(&[render(&first), render(&second)]);
        let backward = run(&[render(&second), render(&first)]);

        prop_assert_eq!(driver_totals(&forward), driver_totals(&backward));
        prop_assert_eq!(team_totals(&forward), team_totals(&backward));
    }

    #[test]
    fn standings_are_sorted_descending(races in prop::collection::vec(arb_race(), 0..4)) {
        let tables: Vec<String> = races.iter().map(|race| render(race)).collect();
        let report = run(&tables);

        for pair in report.standings.windows(2) {
            prop_assert!(pair[0].points >= pair[1].points);
        }
        for pair in report.team_standings.windows(2) {
            prop_assert!(pair[0].points >= pair[1].points);
        }
        for pair in report.most_wins.windows(2) {
            prop_assert!(pair[0].wins >= pair[1].wins);
        }
        prop_assert_eq!(report.podiums.len(), tables.len());
    }

    #[test]
    fn team_total_equals_sum_of_its_drivers(race in arb_race()) {
        let report = run(&[render(&race)]);
        for team in &report.team_standings {
            let drivers: f64 = report
                .standings
                .iter()
                .filter(|s| s.team == team.team)
                .map(|s| s.points)
                .sum();
            prop_assert_eq!(team.points, drivers);
        }
    }

    #[test]
    fn podium_only_holds_numeric_positions(race in arb_race()) {
        let report = run(&[render(&race)]);
        let podium = &report.podiums[0];

        prop_assert!(podium.len() <= 3);
        for entry in podium {
            prop_assert!(!entry.pos.is_empty());
            prop_assert!(entry.pos.bytes().all(|b| b.is_ascii_digit()));
        }
        for pair in podium.windows(2) {
            let a: u64 = pair[0].pos.parse().unwrap();
            let b: u64 = pair[1].pos.parse().unwrap();
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn invalid_lap_times_never_fastest(
        race in arb_race(),
        laps in prop::collection::vec(arb_invalid_lap(), 1..12),
    ) {
        let rows: Vec<Row> = race
            .into_iter()
            .zip(laps)
            .map(|(row, best)| Row { best, ..row })
            .collect();
        let report = run(&[render(&rows)]);

        prop_assert!(report.fastest_lap_per_race.is_empty());
        prop_assert!(report.most_fastest_laps.is_empty());
    }

    #[test]
    fn every_alias_resolves_to_the_canonical_pair(
        name in arb_word(),
        team in arb_word(),
        aliases in prop::collection::vec((arb_word(), arb_word()), 1..6),
    ) {
        let mut entry = RosterEntry::new(name.clone(), team.clone());
        for (alias_name, alias_team) in &aliases {
            entry = entry.with_alias(alias_name.clone(), alias_team.clone());
        }
        let resolver = AliasResolver::from_entries(&[entry]);
        let canonical = Identity::new(name, team);

        prop_assert_eq!(resolver.resolve(&canonical.name, &canonical.team), canonical.clone());
        for (alias_name, alias_team) in &aliases {
            let shouted = resolver.resolve(&alias_name.to_uppercase(), &format!(" {alias_team} "));
            prop_assert_eq!(resolver.resolve(alias_name, alias_team), canonical.clone());
            prop_assert_eq!(shouted, canonical.clone());
        }
    }
}
