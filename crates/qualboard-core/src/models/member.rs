use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::{month_key_of, parse_qualified_date};
use crate::utils::format::{format_date_id, initials};

/// Rank applied when the sheet has no rank column or the cell is blank.
pub const DEFAULT_RANK: &str = "Manager";

/// Rank tier for badge icons, derived from the free-text rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankTier {
    Standard = 0,
    Gold = 1,
    Diamond = 2,
    Crown = 3,
}

impl RankTier {
    /// Classify a rank string. Handles variations like "Crown Manager",
    /// "Gold Manager", etc.
    pub fn from_rank(rank: &str) -> Self {
        let lower = rank.to_lowercase();
        if lower.contains("crown") {
            RankTier::Crown
        } else if lower.contains("diamond") {
            RankTier::Diamond
        } else if lower.contains("gold") {
            RankTier::Gold
        } else {
            RankTier::Standard
        }
    }

    /// Icon name for this tier.
    pub fn icon(&self) -> &'static str {
        match self {
            RankTier::Crown => "Crown",
            RankTier::Diamond => "Gem",
            RankTier::Gold => "Trophy",
            RankTier::Standard => "Star",
        }
    }
}

/// One qualifying member.
///
/// `id` and `name` are non-empty for any record that survives ingestion;
/// every other field may be an empty string. `qualified_at` keeps the raw
/// cell text so an unparseable date still displays as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub promo: String,
    pub reward: String,
    #[serde(rename = "qualifiedAt")]
    pub qualified_at: String,
    pub rank: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl MemberRecord {
    /// Parse the qualified-at cell. `None` when unrecognized.
    pub fn qualified_date(&self) -> Option<NaiveDate> {
        parse_qualified_date(&self.qualified_at)
    }

    /// `YYYY-MM` key of the qualified date, used for month filtering and
    /// faceting. `None` when the date cannot be parsed.
    pub fn month_key(&self) -> Option<String> {
        self.qualified_date().map(month_key_of)
    }

    /// Qualified date formatted for display ("11 Oktober 2025"), falling
    /// back to the raw cell text.
    pub fn qualified_display(&self) -> String {
        format_date_id(&self.qualified_at)
    }

    /// Up to two uppercased initials, for avatar fallbacks.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Rank tier for badge icons.
    pub fn rank_tier(&self) -> RankTier {
        RankTier::from_rank(&self.rank)
    }

    /// Most-recent-first ordering by qualified date. Records without a
    /// parseable date sort after every dated record; ties keep input
    /// order under a stable sort.
    pub fn cmp_recent(a: &Self, b: &Self) -> Ordering {
        b.qualified_date().cmp(&a.qualified_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, qualified_at: &str) -> MemberRecord {
        MemberRecord {
            id: id.to_string(),
            name: name.to_string(),
            city: String::new(),
            promo: String::new(),
            reward: String::new(),
            qualified_at: qualified_at.to_string(),
            rank: DEFAULT_RANK.to_string(),
            photo: None,
        }
    }

    #[test]
    fn test_rank_tier_from_rank() {
        assert_eq!(RankTier::from_rank("Crown Manager"), RankTier::Crown);
        assert_eq!(RankTier::from_rank("Diamond Manager"), RankTier::Diamond);
        assert_eq!(RankTier::from_rank("GOLD manager"), RankTier::Gold);
        assert_eq!(RankTier::from_rank("Manager"), RankTier::Standard);
        assert_eq!(RankTier::from_rank(""), RankTier::Standard);
    }

    #[test]
    fn test_rank_tier_icons() {
        assert_eq!(RankTier::Crown.icon(), "Crown");
        assert_eq!(RankTier::Diamond.icon(), "Gem");
        assert_eq!(RankTier::Gold.icon(), "Trophy");
        assert_eq!(RankTier::Standard.icon(), "Star");
    }

    #[test]
    fn test_month_key_follows_parsed_date() {
        assert_eq!(
            member("MTS-001", "Aulia", "2025-09-10").month_key(),
            Some("2025-09".to_string())
        );
        assert_eq!(member("MTS-001", "Aulia", "nanti").month_key(), None);
    }

    #[test]
    fn test_cmp_recent_orders_descending_with_unparsed_last() {
        let newer = member("a", "A", "2025-10-11");
        let older = member("b", "B", "2025-09-10");
        let undated = member("c", "C", "???");

        assert_eq!(MemberRecord::cmp_recent(&newer, &older), Ordering::Less);
        assert_eq!(MemberRecord::cmp_recent(&older, &newer), Ordering::Greater);
        assert_eq!(MemberRecord::cmp_recent(&newer, &undated), Ordering::Less);
        assert_eq!(MemberRecord::cmp_recent(&undated, &undated), Ordering::Equal);
    }

    #[test]
    fn test_serializes_with_sheet_field_names() {
        let m = member("MTS-001", "Aulia Rahman", "2025-09-10");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["qualifiedAt"], "2025-09-10");
        // Absent photo is omitted, not null
        assert!(json.get("photo").is_none());
    }

    #[test]
    fn test_deserializes_without_photo_field() {
        let m: MemberRecord = serde_json::from_str(
            r#"{"id":"MTS-9","name":"Nadia","city":"","promo":"","reward":"","qualifiedAt":"2025-10-09","rank":"Gold Manager"}"#,
        )
        .unwrap();
        assert_eq!(m.photo, None);
        assert_eq!(m.qualified_at, "2025-10-09");
    }

    #[test]
    fn test_qualified_display_falls_back_to_raw() {
        assert_eq!(member("a", "A", "2025-10-05").qualified_display(), "5 Oktober 2025");
        assert_eq!(member("a", "A", "segera").qualified_display(), "segera");
    }
}
