//! Utility functions for date parsing and string formatting.

pub mod dates;
pub mod format;

// Re-export commonly used functions at module level
pub use dates::{month_key_of, parse_qualified_date};
pub use format::{cmp_ignore_case, contains_ignore_case, format_date_id, initials, month_label, ALL_KEY};
