use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemberRecord;

/// Where the live roster came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterSource {
    /// Fetched and ingested from the published sheet.
    Sheet,
    /// The embedded fallback dataset.
    Seed,
}

impl std::fmt::Display for RosterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterSource::Sheet => write!(f, "sheet"),
            RosterSource::Seed => write!(f, "seed"),
        }
    }
}

/// The complete, currently-active member set plus provenance.
///
/// Exactly one roster is live at a time. Every load attempt produces a
/// whole new value; nothing is merged or mutated in place, so readers
/// always see a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub members: Vec<MemberRecord>,
    pub source: RosterSource,
    /// Time of the last successful fetch. Carried over unchanged when a
    /// reload fails, since no sync happened.
    #[serde(rename = "syncedAt")]
    pub synced_at: Option<DateTime<Utc>>,
    /// Short diagnostic from the most recent failed load.
    #[serde(rename = "lastError", skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Human-readable sync timestamp for the info bar.
    pub fn synced_display(&self) -> String {
        match self.synced_at {
            Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => "never".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synced_display_never_when_unsynced() {
        let roster = Roster {
            members: Vec::new(),
            source: RosterSource::Seed,
            synced_at: None,
            last_error: None,
        };
        assert_eq!(roster.synced_display(), "never");
    }

    #[test]
    fn test_synced_display_formats_timestamp() {
        let roster = Roster {
            members: Vec::new(),
            source: RosterSource::Sheet,
            synced_at: Some("2025-10-11T08:30:00Z".parse().unwrap()),
            last_error: None,
        };
        assert_eq!(roster.synced_display(), "2025-10-11 08:30:00 UTC");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(RosterSource::Sheet.to_string(), "sheet");
        assert_eq!(RosterSource::Seed.to_string(), "seed");
    }
}
