use thiserror::Error;

/// Everything that can go wrong between issuing the fetch and holding a
/// usable member list. All variants are handled the same way by the
/// roster loader: converted to a short message and answered with the
/// seed fallback. None of them escape the loader.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Transport failure or non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// Body tokenized to a header row at most.
    #[error("CSV is empty or header-only")]
    EmptyData,

    /// One or more required columns could not be resolved. Carries every
    /// missing field so a broken sheet is fixed in one pass.
    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<&'static str> },
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

impl LoadError {
    /// Build the error for a non-success HTTP response.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        LoadError::Network(format!("HTTP {}", status))
    }
}
