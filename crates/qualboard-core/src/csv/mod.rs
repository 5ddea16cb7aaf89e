//! CSV ingestion: tokenizer, header-alias schema resolution, and record
//! projection.
//!
//! The pipeline is `tokenize` -> `schema::resolve` -> `record::build`;
//! the roster loader drives it and owns the failure handling.

pub mod record;
pub mod schema;
pub mod tokenize;

pub use schema::{missing_required, resolve, ColumnMapping};
pub use tokenize::tokenize;
