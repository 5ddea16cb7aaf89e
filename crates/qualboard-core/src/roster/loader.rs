//! Roster loading: fetch, ingest, and fall back.
//!
//! A load attempt always terminates in a fully-populated `Roster`.
//! Success means the sheet was fetched and ingested; any failure along
//! the way (transport, HTTP status, empty body, unresolvable schema)
//! answers with the embedded seed dataset and a short diagnostic. The
//! distinction reaches the presentation layer only through
//! `Roster::source` and `Roster::last_error`.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::csv::{self, tokenize};
use crate::models::{MemberRecord, Roster, RosterSource};
use crate::sheet::{LoadError, SheetClient};

use super::seed::seed_members;

/// Loads the roster from a fixed sheet URL.
///
/// Re-invocation is safe: each call produces a whole new `Roster` that
/// replaces the previous one, never a merge.
pub struct RosterLoader {
    client: SheetClient,
    url: String,
}

impl RosterLoader {
    pub fn new(client: SheetClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch and ingest the sheet, falling back to seed data on failure.
    ///
    /// `previous_synced_at` is carried into the result when the load
    /// fails, so a stale-but-real sync time is not erased by an outage.
    pub async fn load(&self, previous_synced_at: Option<DateTime<Utc>>) -> Roster {
        let fetched = self.client.fetch_csv(&self.url).await;
        roster_from_fetch(fetched, previous_synced_at)
    }
}

/// Turn a fetch result into the terminal `Roster`. Pure apart from the
/// `Utc::now()` sync stamp, which keeps the failure path testable.
pub fn roster_from_fetch(
    fetched: Result<String, LoadError>,
    previous_synced_at: Option<DateTime<Utc>>,
) -> Roster {
    match fetched.and_then(|text| ingest(&text)) {
        Ok(members) => {
            info!(count = members.len(), "Roster loaded from sheet");
            Roster {
                members,
                source: RosterSource::Sheet,
                synced_at: Some(Utc::now()),
                last_error: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "Roster load failed, falling back to seed data");
            Roster {
                members: seed_members(),
                source: RosterSource::Seed,
                synced_at: previous_synced_at,
                last_error: Some(err.to_string()),
            }
        }
    }
}

/// A roster built directly from the seed dataset, for offline use.
/// Not an error path, so `last_error` stays empty.
pub fn seed_roster() -> Roster {
    Roster {
        members: seed_members(),
        source: RosterSource::Seed,
        synced_at: None,
        last_error: None,
    }
}

/// Tokenize, validate, and project a CSV body into member records,
/// sorted most recent first.
pub fn ingest(text: &str) -> Result<Vec<MemberRecord>, LoadError> {
    // Rows with no non-empty cell carry nothing worth validating
    let rows: Vec<Vec<String>> = tokenize(text)
        .into_iter()
        .filter(|r| r.iter().any(|c| !c.is_empty()))
        .collect();

    if rows.len() <= 1 {
        return Err(LoadError::EmptyData);
    }

    let mapping = csv::resolve(&rows[0]);
    let missing = csv::missing_required(&mapping);
    if !missing.is_empty() {
        return Err(LoadError::Schema { missing });
    }

    let mut members = csv::record::build(&rows[1..], &mapping);
    members.sort_by(MemberRecord::cmp_recent);
    Ok(members)
}
