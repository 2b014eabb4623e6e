//! Competitor identities and their normalized lookup keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalizes a name or team for matching: surrounding whitespace is trimmed
/// and the text is lowercased. Never used for display.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A competitor-in-a-team as it is displayed and aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub team: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }

    /// Returns the normalized `(name, team)` key used for alias lookup.
    pub fn key(&self) -> IdentityKey {
        IdentityKey::new(&self.name, &self.team)
    }

    /// True when both the name and the team are blank.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.team.trim().is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

/// Normalized `(name, team)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    name: String,
    team: String,
}

impl IdentityKey {
    pub fn new(name: &str, team: &str) -> Self {
        Self {
            name: normalize(name),
            team: normalize(team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Max VERSTAPPEN "), "max verstappen");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Identity::new("A. Smith", "Red").to_string(), "A. Smith (Red)");
    }

    #[test]
    fn test_is_blank() {
        assert!(Identity::new(" ", "").is_blank());
        assert!(!Identity::new("", "Red").is_blank());
    }
}
