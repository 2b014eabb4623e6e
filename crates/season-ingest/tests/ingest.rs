//! Integration tests for loading a season folder.

use std::path::PathBuf;

use season_ingest::{collect_table_paths, load_roster, read_table_sources};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_season_folder_in_name_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "r2.csv", "Pos.,Driver\n1,B\n");
    write(&dir, "r1.csv", "Pos.,Driver\n1,A\n");
    write(&dir, "roster.json", "[]");

    let paths = collect_table_paths(&[dir.path().to_path_buf()]).unwrap();
    let sources = read_table_sources(&paths).unwrap();

    let labels: Vec<String> = sources.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["r1", "r2"]);
    assert!(sources[0].text.contains("1,A"));

    let roster = load_roster(&dir.path().join("roster.json")).unwrap();
    assert!(roster.is_empty());
}

#[test]
fn one_bad_file_fails_the_read() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.csv", "Pos.,Driver\n1,A\n");
    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, [0xFE, 0xFF, 0, b'P']).unwrap();

    assert!(read_table_sources(&[good, bad]).is_err());
}
