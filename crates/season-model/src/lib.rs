//! Data model for season standings aggregation.
//!
//! Everything here is plain data: competitor identities, roster (alias)
//! documents, parsed race rows, per-race extractions and the season result
//! document. The logic that produces these lives in `season-core`.

pub mod error;
pub mod identity;
pub mod options;
pub mod race;
pub mod report;
pub mod roster;

pub use error::{ModelError, Result};
pub use identity::{Identity, IdentityKey, normalize};
pub use options::AggregationOptions;
pub use race::{FastestLap, PositionGain, RaceResult, RaceRow};
pub use report::{
    DriverPoints, FastestLapCount, FastestLapEntry, PodiumEntry, PositionGainEntry, ReportStatus,
    SeasonReport, TeamPoints, WinCount,
};
pub use roster::{AliasName, RosterEntry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_ignores_case_and_padding() {
        let a = Identity::new("  Alex Smith ", "RED");
        let b = Identity::new("alex smith", " red");
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[test]
    fn empty_report_serializes_with_status() {
        let report = SeasonReport::default();
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["status"], "success");
        assert!(json["standings"].as_array().expect("array").is_empty());
    }
}
