//! Data models for the member-recognition roster.
//!
//! - `MemberRecord`: one qualifying member, immutable after ingestion
//! - `Roster`: the live member set plus provenance (source, sync time,
//!   last load error)
//! - `RankTier`: badge-icon classification of the free-text rank

pub mod member;
pub mod roster;

pub use member::{MemberRecord, RankTier, DEFAULT_RANK};
pub use roster::{Roster, RosterSource};
