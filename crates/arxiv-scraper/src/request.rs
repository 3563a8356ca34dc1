//! Keyed scrape parameters for programmatic use.
//!
//! The CLI and library callers both end up here: a [`ScrapeRequest`] is
//! validated into a [`SearchQuery`], scraped, and written to CSV.

use crate::error::{Result, ScrapeError};
use crate::fetch::{ArxivClient, FixedDelay};
use crate::output::{prepare_output_path, write_csv};
use crate::query::SearchQuery;
use crate::scraper::{ArxivScraper, ScrapeReport};
use indicatif::ProgressBar;
use serde::Deserialize;
use serde_json::Value;
use shared::{CategoryTable, Config};
use std::path::PathBuf;

const REQUIRED_KEYS: [&str; 3] = ["start_date", "end_date", "category"];

fn default_output() -> PathBuf {
    PathBuf::from("arxiv_data.csv")
}

/// Parameters of one scrape run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapeRequest {
    /// First announcement date, `YYYY-MM-DD`
    pub start_date: String,
    /// Last announcement date, `YYYY-MM-DD`
    pub end_date: String,
    /// Top-level category code, e.g. `cs` or `gr-qc`
    pub category: String,
    #[serde(default)]
    pub cross_list: bool,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl ScrapeRequest {
    /// Build a request from a JSON object such as
    /// `{"start_date": "2025-09-01", "end_date": "2025-09-02", "category": "cs"}`.
    pub fn from_map(value: Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            ScrapeError::InvalidInput("Expected a map of scrape arguments".to_string())
        })?;

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| map.get(*key).map_or(true, Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(ScrapeError::InvalidInput(format!(
                "Missing required arguments: {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ScrapeError::InvalidInput(format!("Invalid scrape arguments: {}", e)))
    }

    /// Validate dates and category into a query
    pub fn query(&self, categories: &CategoryTable) -> Result<SearchQuery> {
        SearchQuery::new(
            categories,
            &self.start_date,
            &self.end_date,
            &self.category,
            self.cross_list,
        )
    }

    /// Validate, scrape against arXiv and write the CSV.
    ///
    /// Inputs and the output directory are checked before any request is made.
    pub async fn run(&self, config: &Config, progress: ProgressBar) -> Result<ScrapeReport> {
        let query = self.query(&config.arxiv.categories)?;
        prepare_output_path(&self.output)?;

        let client = ArxivClient::new(&config.arxiv)?;
        let delay = FixedDelay::from_secs(config.arxiv.page_delay_secs);
        let scraper =
            ArxivScraper::new(client, delay, config.arxiv.base_url.clone()).with_progress(progress);

        let report = scraper.scrape(&query).await?;
        write_csv(&self.output, &report.records)?;

        Ok(report)
    }
}
