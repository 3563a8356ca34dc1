//! Error types for a scrape run.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can abort a scrape run. None of these are retried.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Bad dates, unknown category or missing parameters; raised before any request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-200 response or transport failure
    #[error("Failed to retrieve URL: {url} ({cause})")]
    Connectivity { url: String, cause: String },

    /// The page did not have the structure an extraction step expects
    #[error("Unexpected page structure while extracting {step}: {detail}")]
    Parse { step: &'static str, detail: String },

    /// The first page reported no results, or the count could not be read
    #[error("No results found or unable to parse the number of results")]
    NoResults,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn parse(step: &'static str, detail: impl Into<String>) -> Self {
        ScrapeError::Parse {
            step,
            detail: detail.into(),
        }
    }

    pub(crate) fn connectivity(url: &str, cause: impl ToString) -> Self {
        ScrapeError::Connectivity {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }
}
