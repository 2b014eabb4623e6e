//! Alias resolution from normalized `(name, team)` pairs to canonical
//! identities.

use std::collections::HashMap;

use season_model::{Identity, IdentityKey, RosterEntry};
use tracing::debug;

/// Lookup from normalized spellings to the canonical identity they belong to.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    lookup: HashMap<IdentityKey, Identity>,
}

impl AliasResolver {
    /// A resolver that passes every identity through unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the lookup from roster entries.
    ///
    /// Aliases with a blank name or team are ignored, as is the canonical
    /// self-mapping of an entry whose canonical name or team is blank. When
    /// two entries claim the same normalized pair, the later entry wins.
    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        let mut resolver = Self::default();
        for entry in entries {
            let canonical = entry.canonical();
            for alias in &entry.aliases {
                let name = alias.name.trim();
                let team = alias.team.trim();
                if name.is_empty() || team.is_empty() {
                    continue;
                }
                resolver.insert(IdentityKey::new(name, team), &canonical);
            }
            if !canonical.name.is_empty() && !canonical.team.is_empty() {
                resolver.insert(canonical.key(), &canonical);
            }
        }
        debug!(
            entries = entries.len(),
            keys = resolver.lookup.len(),
            "built alias lookup"
        );
        resolver
    }

    fn insert(&mut self, key: IdentityKey, canonical: &Identity) {
        if let Some(previous) = self.lookup.insert(key, canonical.clone())
            && previous != *canonical
        {
            debug!(
                previous = %previous,
                current = %canonical,
                "alias claimed by a later roster entry"
            );
        }
    }

    /// Resolves a `(name, team)` pair to its canonical identity.
    ///
    /// Unknown pairs are returned exactly as given.
    pub fn resolve(&self, name: &str, team: &str) -> Identity {
        self.lookup
            .get(&IdentityKey::new(name, team))
            .cloned()
            .unwrap_or_else(|| Identity::new(name, team))
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smith() -> RosterEntry {
        RosterEntry::new("A. Smith", "Red")
            .with_alias("Alex Smith", "Red")
            .with_alias("Alexander Smith", "Blue")
    }

    #[test]
    fn test_resolves_alias_case_insensitively() {
        let resolver = AliasResolver::from_entries(&[smith()]);
        assert_eq!(
            resolver.resolve("  ALEX smith ", "red"),
            Identity::new("A. Smith", "Red")
        );
    }

    #[test]
    fn test_canonical_resolves_to_itself() {
        let resolver = AliasResolver::from_entries(&[smith()]);
        assert_eq!(
            resolver.resolve("A. Smith", "Red"),
            Identity::new("A. Smith", "Red")
        );
    }

    #[test]
    fn test_unknown_passes_through_verbatim() {
        let resolver = AliasResolver::from_entries(&[smith()]);
        assert_eq!(
            resolver.resolve(" Someone ", "Green"),
            Identity::new(" Someone ", "Green")
        );
    }

    #[test]
    fn test_blank_alias_parts_are_ignored() {
        let entry = RosterEntry::new("A. Smith", "Red").with_alias("Alex Smith", "  ");
        let resolver = AliasResolver::from_entries(&[entry]);
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve("Alex Smith", ""), Identity::new("Alex Smith", ""));
    }

    #[test]
    fn test_blank_canonical_is_not_self_mapped() {
        let entry = RosterEntry::new("A. Smith", "").with_alias("Alex Smith", "Red");
        let resolver = AliasResolver::from_entries(&[entry]);
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve("Alex Smith", "Red"), Identity::new("A. Smith", ""));
    }

    #[test]
    fn test_last_entry_wins_on_conflict() {
        let first = RosterEntry::new("A. Smith", "Red").with_alias("Smith", "Red");
        let second = RosterEntry::new("B. Smith", "Red").with_alias("smith", "RED");
        let resolver = AliasResolver::from_entries(&[first, second]);
        assert_eq!(resolver.resolve("Smith", "Red"), Identity::new("B. Smith", "Red"));
    }

    #[test]
    fn test_empty_resolver() {
        let resolver = AliasResolver::empty();
        assert!(resolver.is_empty());
        assert_eq!(resolver.resolve("x", "y"), Identity::new("x", "y"));
    }
}
