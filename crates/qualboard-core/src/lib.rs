//! Core library for qualboard, a member-recognition roster.
//!
//! The pipeline: `RosterLoader` fetches a published spreadsheet CSV,
//! tokenizes it, resolves the header against the canonical schema,
//! builds typed `MemberRecord`s, and sorts them by recency. Any failure
//! falls back to the embedded seed dataset, so a load always terminates
//! in a usable `Roster`. `query` then answers search/filter/sort
//! requests over that roster and derives the facets that drive the
//! filter controls.
//!
//! The crate exposes plain values at its boundary - `Roster` out,
//! `FilterSpec` in - and carries no rendering, CLI, or environment
//! dependencies of its own.

pub mod csv;
pub mod models;
pub mod query;
pub mod roster;
pub mod sheet;
pub mod utils;

pub use models::{MemberRecord, RankTier, Roster, RosterSource};
pub use query::{facets_of, query, Facets, FilterSpec, QueryOutput, SortKey, ALL_KEY};
pub use roster::{seed_roster, RosterLoader};
pub use sheet::{LoadError, SheetClient, SHEET_CSV_URL};
