//! Filtering, sorting, and faceting over the live roster.
//!
//! `query` is a pure function of `(Roster, FilterSpec)`. The
//! presentation layer owns the `FilterSpec` and passes it by value;
//! nothing here mutates the roster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{MemberRecord, Roster};
use crate::utils::format::{cmp_ignore_case, contains_ignore_case};
pub use crate::utils::format::ALL_KEY;

/// Display ordering for the member grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently qualified first.
    #[default]
    Recent,
    /// Alphabetical by member name.
    Name,
}

/// The current search/filter/sort selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name, city, rank,
    /// reward, promo, and id.
    pub search_text: String,
    pub sort_key: SortKey,
    /// `"All"` or a `YYYY-MM` month key.
    pub month_key: String,
    /// `"All"` or an exact promo name.
    pub promo_key: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::Recent,
            month_key: ALL_KEY.to_string(),
            promo_key: ALL_KEY.to_string(),
        }
    }
}

/// Aggregates for the filter controls, always derived from the full
/// roster so tab counts stay put while the user narrows the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets {
    /// `"All"` followed by distinct promos in first-seen order.
    pub promo_list: Vec<String>,
    /// `"All"` followed by distinct month keys, most recent first.
    pub month_list: Vec<String>,
    /// Member count per promo across the unfiltered roster.
    pub total_per_promo: HashMap<String, usize>,
}

/// The ordered display subset plus facets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput {
    pub members: Vec<MemberRecord>,
    pub facets: Facets,
}

/// Apply `spec` to `roster`: free-text search, then promo equality,
/// then month equality, then the selected sort.
pub fn query(roster: &Roster, spec: &FilterSpec) -> QueryOutput {
    let needle = spec.search_text.trim().to_lowercase();

    let mut members: Vec<MemberRecord> = roster
        .members
        .iter()
        .filter(|m| needle.is_empty() || matches_search(m, &needle))
        .filter(|m| spec.promo_key == ALL_KEY || m.promo == spec.promo_key)
        .filter(|m| {
            spec.month_key == ALL_KEY || m.month_key().as_deref() == Some(spec.month_key.as_str())
        })
        .cloned()
        .collect();

    match spec.sort_key {
        SortKey::Recent => members.sort_by(MemberRecord::cmp_recent),
        SortKey::Name => members.sort_by(|a, b| cmp_ignore_case(&a.name, &b.name)),
    }

    QueryOutput {
        members,
        facets: facets_of(roster),
    }
}

/// Facets over the unfiltered roster.
pub fn facets_of(roster: &Roster) -> Facets {
    let mut promo_list: Vec<String> = vec![ALL_KEY.to_string()];
    let mut months: Vec<String> = Vec::new();
    let mut total_per_promo: HashMap<String, usize> = HashMap::new();

    for m in &roster.members {
        if !promo_list[1..].contains(&m.promo) {
            promo_list.push(m.promo.clone());
        }
        *total_per_promo.entry(m.promo.clone()).or_insert(0) += 1;

        // Undatable records have no month to facet under
        if let Some(key) = m.month_key() {
            if !months.contains(&key) {
                months.push(key);
            }
        }
    }

    months.sort();
    months.reverse();

    let mut month_list = Vec::with_capacity(months.len() + 1);
    month_list.push(ALL_KEY.to_string());
    month_list.extend(months);

    Facets {
        promo_list,
        month_list,
        total_per_promo,
    }
}

/// A match on any one field qualifies the record; no scoring.
/// The needle must already be lowercased.
fn matches_search(m: &MemberRecord, needle: &str) -> bool {
    contains_ignore_case(&m.name, needle)
        || contains_ignore_case(&m.city, needle)
        || contains_ignore_case(&m.rank, needle)
        || contains_ignore_case(&m.reward, needle)
        || contains_ignore_case(&m.promo, needle)
        || contains_ignore_case(&m.id, needle)
}
