//! Remote sheet access.
//!
//! This module provides the `SheetClient` for fetching the published
//! CSV export and the `LoadError` taxonomy the roster loader collapses
//! into its seed fallback.

pub mod client;
pub mod error;

pub use client::{SheetClient, SHEET_CSV_URL};
pub use error::LoadError;
