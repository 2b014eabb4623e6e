//! Season input loading.
//!
//! This crate hands the aggregation engine its inputs: race table texts read
//! from CSV files and the roster (alias) document.
//!
//! # Features
//!
//! - **Discovery**: Expand files and directories into an ordered table list
//! - **Table Sources**: Read table texts with size and encoding checks
//! - **Roster Loading**: Parse the alias document, falling back to an empty
//!   roster when it is malformed
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use season_ingest::{collect_table_paths, load_roster, read_table_sources};
//!
//! let paths = collect_table_paths(&[PathBuf::from("season/2024")])?;
//! let sources = read_table_sources(&paths)?;
//! let roster = load_roster(Path::new("roster.json"))?;
//! ```

mod discovery;
mod error;
mod roster;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{collect_table_paths, list_csv_files};

// === Table Sources ===
pub use source::{
    MAX_TABLE_FILE_SIZE, TableSource, check_file_size, check_file_size_with_limit,
    read_table_source, read_table_sources, validate_encoding,
};

// === Roster ===
pub use roster::{load_roster, parse_roster_lenient};
