//! Header-alias resolution for the qualification sheet.
//!
//! Operators rename columns freely ("name" today, "Nama Member" next
//! month), so each canonical field carries the list of header spellings
//! seen in the wild, English and Indonesian. Resolution is positional:
//! first column left-to-right whose lowercased, trimmed text matches any
//! alias for the field.

/// Alias spellings per canonical field. Order within a list is cosmetic;
/// column order decides ties.
const ID_ALIASES: &[&str] = &["id", "kode", "agent id", "agen id"];
const NAME_ALIASES: &[&str] = &["name", "nama", "nama member", "namaagen"];
const CITY_ALIASES: &[&str] = &["city", "kota", "kota domisili", "domisili"];
const PROMO_ALIASES: &[&str] = &["promo", "program", "promo name", "nama promo", "program promo"];
const REWARD_ALIASES: &[&str] = &["reward", "hadiah", "reward name", "reward / hadiah", "hadiah/reward"];
const QUALIFIED_AT_ALIASES: &[&str] = &[
    "qualifiedat",
    "qualified_at",
    "tanggal",
    "tgl",
    "date",
    "tanggal qualified",
    "tgl qualified",
    "tanggal memenuhi syarat",
];
const RANK_ALIASES: &[&str] = &["rank", "level", "peringkat"];
const PHOTO_ALIASES: &[&str] = &["photo", "foto", "gambar", "image", "avatar", "url"];

/// Resolved column index per canonical field; `None` means the sheet has
/// no column for it. Local to one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub id: Option<usize>,
    pub name: Option<usize>,
    pub city: Option<usize>,
    pub promo: Option<usize>,
    pub reward: Option<usize>,
    pub qualified_at: Option<usize>,
    pub rank: Option<usize>,
    pub photo: Option<usize>,
}

/// Map a header row onto the canonical schema.
pub fn resolve(header_row: &[String]) -> ColumnMapping {
    let header: Vec<String> = header_row
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    ColumnMapping {
        id: find_column(&header, ID_ALIASES),
        name: find_column(&header, NAME_ALIASES),
        city: find_column(&header, CITY_ALIASES),
        promo: find_column(&header, PROMO_ALIASES),
        reward: find_column(&header, REWARD_ALIASES),
        qualified_at: find_column(&header, QUALIFIED_AT_ALIASES),
        rank: find_column(&header, RANK_ALIASES),
        photo: find_column(&header, PHOTO_ALIASES),
    }
}

/// Every required field the mapping failed to resolve. Ingestion fails
/// fast when this is non-empty, reporting all names at once so a broken
/// sheet is fixed in one round trip.
pub fn missing_required(mapping: &ColumnMapping) -> Vec<&'static str> {
    let required = [
        ("id", mapping.id),
        ("name", mapping.name),
        ("city", mapping.city),
        ("promo", mapping.promo),
        ("reward", mapping.reward),
        ("qualifiedAt", mapping.qualified_at),
    ];
    required
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(field, _)| *field)
        .collect()
}

fn find_column(header: &[String], aliases: &[&str]) -> Option<usize> {
    header.iter().position(|h| aliases.contains(&h.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolve_indonesian_header_any_order() {
        let mapping = resolve(&header(&[
            "Nama",
            "Kota",
            "Nama Promo",
            "Hadiah",
            "Tanggal Qualified",
            "ID",
        ]));
        assert_eq!(mapping.name, Some(0));
        assert_eq!(mapping.city, Some(1));
        assert_eq!(mapping.promo, Some(2));
        assert_eq!(mapping.reward, Some(3));
        assert_eq!(mapping.qualified_at, Some(4));
        assert_eq!(mapping.id, Some(5));
        assert!(missing_required(&mapping).is_empty());
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trims() {
        let mapping = resolve(&header(&["  AGEN ID ", "NamaAgen", "DOMISILI"]));
        assert_eq!(mapping.id, Some(0));
        assert_eq!(mapping.name, Some(1));
        assert_eq!(mapping.city, Some(2));
    }

    #[test]
    fn test_first_matching_column_wins() {
        // "promo" and "program" both alias the promo field; leftmost wins
        let mapping = resolve(&header(&["program", "promo"]));
        assert_eq!(mapping.promo, Some(0));
    }

    #[test]
    fn test_missing_reward_reported_exactly() {
        let mapping = resolve(&header(&["id", "nama", "kota", "promo", "tanggal"]));
        assert_eq!(missing_required(&mapping), vec!["reward"]);
    }

    #[test]
    fn test_missing_required_reports_all() {
        let mapping = resolve(&header(&["foto", "level"]));
        assert_eq!(
            missing_required(&mapping),
            vec!["id", "name", "city", "promo", "reward", "qualifiedAt"]
        );
    }

    #[test]
    fn test_optional_fields_absent_is_fine() {
        let mapping = resolve(&header(&["id", "name", "city", "promo", "reward", "date"]));
        assert_eq!(mapping.rank, None);
        assert_eq!(mapping.photo, None);
        assert!(missing_required(&mapping).is_empty());
    }
}
