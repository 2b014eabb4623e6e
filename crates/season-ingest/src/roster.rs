//! Roster (alias) document loading.

use std::path::Path;

use season_model::RosterEntry;
use tracing::{debug, warn};

use crate::error::{Result, file_error};

/// Parses a roster document, treating a malformed document as empty.
///
/// A roster that cannot be parsed disables alias resolution rather than
/// failing the run; identities then pass through as written.
pub fn parse_roster_lenient(text: &str) -> Vec<RosterEntry> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    match RosterEntry::parse_document(text) {
        Ok(entries) => {
            debug!(entries = entries.len(), "parsed roster document");
            entries
        }
        Err(error) => {
            warn!(%error, "ignoring unparseable roster document");
            Vec::new()
        }
    }
}

/// Loads the roster document at `path`.
///
/// Only I/O failures are errors; malformed content yields an empty roster.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let text = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    Ok(parse_roster_lenient(&text))
}
