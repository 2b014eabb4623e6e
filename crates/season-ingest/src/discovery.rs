//! Race table file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Expands the given inputs into the ordered list of race table files.
///
/// Files are kept in argument order; a directory contributes its CSV files
/// sorted by name at its position. Fails with [`IngestError::NoTables`] when
/// nothing is left.
pub fn collect_table_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let files = list_csv_files(input)?;
            debug!(dir = %input.display(), files = files.len(), "discovered race tables");
            paths.extend(files);
        } else if input.is_file() {
            paths.push(input.clone());
        } else {
            return Err(IngestError::FileNotFound {
                path: input.clone(),
            });
        }
    }
    if paths.is_empty() {
        return Err(IngestError::NoTables);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["02_imola.csv", "01_bahrain.CSV", "notes.txt"] {
            std::fs::write(dir.path().join(name), "Driver\nA\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.csv")).unwrap();
        dir
    }

    #[test]
    fn test_list_csv_files_sorted() {
        let dir = create_test_dir();
        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["01_bahrain.CSV", "02_imola.csv"]);
    }

    #[test]
    fn test_list_csv_files_not_a_directory() {
        let dir = create_test_dir();
        let result = list_csv_files(&dir.path().join("02_imola.csv"));
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_collect_keeps_argument_order() {
        let dir = create_test_dir();
        let extra = dir.path().join("notes.txt");
        let paths = collect_table_paths(&[extra.clone(), dir.path().to_path_buf()]).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], extra);
        assert!(paths[1].ends_with("01_bahrain.CSV"));
    }

    #[test]
    fn test_collect_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = collect_table_paths(&[dir.path().join("missing.csv")]);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_collect_nothing_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(collect_table_paths(&[]), Err(IngestError::NoTables)));
        assert!(matches!(
            collect_table_paths(&[dir.path().to_path_buf()]),
            Err(IngestError::NoTables)
        ));
    }
}
