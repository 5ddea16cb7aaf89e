//! Roster loading and the embedded seed fallback.
//!
//! `RosterLoader` drives fetch -> tokenize -> resolve -> build -> sort
//! and always terminates in a fully-populated `Roster`, substituting
//! the seed dataset when anything fails.

pub mod loader;
pub mod seed;

pub use loader::{ingest, roster_from_fetch, seed_roster, RosterLoader};
pub use seed::seed_members;
