//! Projection of raw cell rows into typed member records.

use tracing::debug;

use super::schema::ColumnMapping;
use crate::models::{MemberRecord, DEFAULT_RANK};

/// Build member records from data rows (header excluded) and a resolved
/// column mapping.
///
/// Rows whose projected `id` or `name` is empty are dropped without
/// error; sparse sheets routinely carry half-filled rows and a partial
/// roster beats no roster. The drop count is logged at debug level.
pub fn build(data_rows: &[Vec<String>], mapping: &ColumnMapping) -> Vec<MemberRecord> {
    let mut members = Vec::with_capacity(data_rows.len());
    let mut skipped = 0usize;

    for row in data_rows {
        let cell = |idx: Option<usize>| -> &str {
            idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
        };

        let id = cell(mapping.id);
        let name = cell(mapping.name);
        if id.is_empty() || name.is_empty() {
            skipped += 1;
            continue;
        }

        let rank = match cell(mapping.rank) {
            "" => DEFAULT_RANK,
            r => r,
        };
        let photo = match cell(mapping.photo) {
            "" => None,
            p => Some(p.to_string()),
        };

        members.push(MemberRecord {
            id: id.to_string(),
            name: name.to_string(),
            city: cell(mapping.city).to_string(),
            promo: cell(mapping.promo).to_string(),
            reward: cell(mapping.reward).to_string(),
            qualified_at: cell(mapping.qualified_at).to_string(),
            rank: rank.to_string(),
            photo,
        });
    }

    if skipped > 0 {
        debug!(skipped, "Dropped rows missing id or name");
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::schema;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn full_mapping() -> ColumnMapping {
        let header: Vec<String> = ["id", "name", "city", "promo", "reward", "date", "rank", "photo"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        schema::resolve(&header)
    }

    #[test]
    fn test_builds_complete_record() {
        let data = rows(&[&[
            "MTS-001",
            "Aulia Rahman",
            "Yogyakarta",
            "Promo Pribadi",
            "Termos",
            "2025-09-10",
            "Gold Manager",
            "https://example.com/a.jpg",
        ]]);
        let members = build(&data, &full_mapping());
        assert_eq!(members.len(), 1);
        let m = &members[0];
        assert_eq!(m.id, "MTS-001");
        assert_eq!(m.rank, "Gold Manager");
        assert_eq!(m.photo.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_drops_rows_missing_name_or_id() {
        let data = rows(&[
            &["MTS-001", "Aulia", "Kota", "P", "R", "2025-09-10", "", ""],
            &["MTS-002", "", "Kota", "P", "R", "2025-09-11", "", ""],
            &["", "Dewi", "Kota", "P", "R", "2025-09-12", "", ""],
        ]);
        let members = build(&data, &full_mapping());
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "MTS-001");
    }

    #[test]
    fn test_blank_rank_defaults_to_manager() {
        let data = rows(&[&["MTS-001", "Aulia", "", "", "", "", "", ""]]);
        let members = build(&data, &full_mapping());
        assert_eq!(members[0].rank, DEFAULT_RANK);
    }

    #[test]
    fn test_absent_columns_use_defaults() {
        // Mapping from a header carrying only the required columns
        let header: Vec<String> = ["id", "name", "city", "promo", "reward", "date"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mapping = schema::resolve(&header);

        let data = rows(&[&["MTS-001", "Aulia", "Bantul", "P", "R", "2025-09-10"]]);
        let members = build(&data, &mapping);
        assert_eq!(members[0].rank, DEFAULT_RANK);
        assert_eq!(members[0].photo, None);
    }

    #[test]
    fn test_short_rows_project_to_defaults() {
        // Row ends before the rank/photo columns
        let data = rows(&[&["MTS-001", "Aulia", "Bantul"]]);
        let members = build(&data, &full_mapping());
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].city, "Bantul");
        assert_eq!(members[0].promo, "");
        assert_eq!(members[0].rank, DEFAULT_RANK);
        assert_eq!(members[0].photo, None);
    }
}
