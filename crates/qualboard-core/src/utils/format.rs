//! String formatting and the fixed Indonesian locale table.

use std::cmp::Ordering;

use crate::utils::dates::parse_qualified_date;

/// Indonesian month names, indexed by zero-based month.
pub const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Sentinel facet value meaning "no filter".
pub const ALL_KEY: &str = "All";

/// Label for a `YYYY-MM` month key, e.g. `"2025-10"` -> `"Oktober 2025"`.
/// The `All` sentinel gets its fixed label; unrecognized keys pass through.
pub fn month_label(key: &str) -> String {
    if key == ALL_KEY {
        return "Semua Bulan".to_string();
    }
    let mut parts = key.splitn(2, '-');
    let year = parts.next().and_then(|y| y.parse::<i32>().ok());
    let month = parts.next().and_then(|m| m.parse::<usize>().ok());
    match (year, month) {
        (Some(y), Some(m)) if (1..=12).contains(&m) => {
            format!("{} {}", MONTHS_ID[m - 1], y)
        }
        _ => key.to_string(),
    }
}

/// Format a raw qualified-at cell for display, e.g. `"11 Oktober 2025"`.
/// Unparseable input is shown as-is.
pub fn format_date_id(raw: &str) -> String {
    match parse_qualified_date(raw) {
        Some(d) => {
            use chrono::Datelike;
            format!("{} {} {}", d.day(), MONTHS_ID[d.month0() as usize], d.year())
        }
        None => raw.to_string(),
    }
}

/// Up to two uppercased initials from a full name, for avatar fallbacks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Case-insensitive substring check.
/// The needle must already be lowercased.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive string comparison without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2025-10"), "Oktober 2025");
        assert_eq!(month_label("2025-01"), "Januari 2025");
        assert_eq!(month_label("All"), "Semua Bulan");
        // Unrecognized keys pass through untouched
        assert_eq!(month_label("not-a-month"), "not-a-month");
        assert_eq!(month_label("2025-13"), "2025-13");
    }

    #[test]
    fn test_format_date_id() {
        assert_eq!(format_date_id("2025-10-11"), "11 Oktober 2025");
        assert_eq!(format_date_id("2025-09-04"), "4 September 2025");
        assert_eq!(format_date_id("kapan-kapan"), "kapan-kapan");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Aulia Rahman"), "AR");
        assert_eq!(initials("Siti Nurhaliza"), "SN");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("  dewi   kartika  "), "DK");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Yogyakarta", "yogya"));
        assert!(contains_ignore_case("BANTUL", "bantul"));
        assert!(!contains_ignore_case("Sleman", "bantul"));
    }

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("aulia", "Aulia"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("Aulia", "Dewi"), Ordering::Less);
        assert_eq!(cmp_ignore_case("rizky", "Dewi"), Ordering::Greater);
    }
}
