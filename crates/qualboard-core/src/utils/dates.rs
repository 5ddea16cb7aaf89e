//! Qualification-date parsing.
//!
//! Sheet operators type dates by hand, so the column arrives in a handful
//! of formats. Everything that needs a real date (recency sort, month
//! filter, month facets) goes through `parse_qualified_date` so the three
//! never disagree about what a cell means.

use chrono::{Datelike, NaiveDate};

/// Date formats accepted in the qualified-at column, tried in order.
/// ISO first since that is what the published sheet exports.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Parse a qualified-at cell into a date.
///
/// Returns `None` for anything unrecognized; callers keep the raw string
/// for display and treat `None` as the oldest possible date when sorting.
pub fn parse_qualified_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Sheets sometimes append a time component ("2025-10-11 08:30:00").
    // Retry on the leading date portion only.
    if s.len() > 10 && s.is_char_boundary(10) {
        let head = &s[..10];
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(head, fmt) {
                return Some(d);
            }
        }
    }

    None
}

/// Derive the `YYYY-MM` key used by both the month facet list and the
/// month filter comparison.
pub fn month_key_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
