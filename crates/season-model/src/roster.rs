//! Roster (alias) document types.
//!
//! The document is a JSON array of entries:
//!
//! ```json
//! [{ "currentName": "A. Smith", "currentTeam": "Red",
//!    "aliases": [{ "name": "Alex Smith", "team": "Red" }] }]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identity::Identity;

/// A competitor's canonical identity and the spellings that resolve to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterEntry {
    pub current_name: String,
    pub current_team: String,
    pub aliases: Vec<AliasName>,
}

/// One historical `(name, team)` spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasName {
    pub name: String,
    pub team: String,
}

impl RosterEntry {
    pub fn new(current_name: impl Into<String>, current_team: impl Into<String>) -> Self {
        Self {
            current_name: current_name.into(),
            current_team: current_team.into(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>, team: impl Into<String>) -> Self {
        self.aliases.push(AliasName {
            name: name.into(),
            team: team.into(),
        });
        self
    }

    /// Canonical identity with surrounding whitespace removed.
    pub fn canonical(&self) -> Identity {
        Identity::new(self.current_name.trim(), self.current_team.trim())
    }

    /// Parses a roster document strictly.
    pub fn parse_document(text: &str) -> Result<Vec<RosterEntry>> {
        Ok(serde_json::from_str(text)?)
    }
}
