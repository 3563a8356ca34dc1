//! Main scraper orchestrator.
//!
//! Fetches the first page to learn the total hit count, then walks every
//! page offset in order, extracting one record per result block.

use crate::error::{Result, ScrapeError};
use crate::extract::ResultPage;
use crate::fetch::{PageDelay, PageSource};
use crate::query::{page_count, page_offsets, SearchQuery};
use indicatif::ProgressBar;
use shared::PaperRecord;
use tracing::{debug, info, warn};

/// Outcome of a successful scrape run
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Hit count reported by the first page
    pub total_results: usize,
    /// Pages fetched
    pub pages: usize,
    /// Every record, in page order then block order
    pub records: Vec<PaperRecord>,
}

/// Drives the fetch/extract loop for one query at a time
pub struct ArxivScraper<S, D> {
    source: S,
    delay: D,
    base_url: String,
    progress: ProgressBar,
}

impl<S: PageSource, D: PageDelay> ArxivScraper<S, D> {
    /// Create a new scraper; progress is hidden until [`Self::with_progress`] is used
    pub fn new(source: S, delay: D, base_url: impl Into<String>) -> Self {
        Self {
            source,
            delay,
            base_url: base_url.into(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Report one tick per page on the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Scrape every page of the query.
    ///
    /// The first page is fetched once and used both for the hit count and
    /// for the records at offset 0. Any failure aborts the run and no
    /// partial records are returned.
    pub async fn scrape(&self, query: &SearchQuery) -> Result<ScrapeReport> {
        let result = self.scrape_pages(query).await;
        match &result {
            Ok(_) => self.progress.finish(),
            Err(_) => self.progress.abandon(),
        }
        result
    }

    async fn scrape_pages(&self, query: &SearchQuery) -> Result<ScrapeReport> {
        info!(
            category = query.category(),
            start_date = %query.start_date(),
            end_date = %query.end_date(),
            cross_list = query.include_cross_list(),
            "Starting arXiv scrape"
        );

        let first_url = query.with_offset(0).url(&self.base_url);
        let body = self.source.fetch(&first_url).await?;

        let (total_results, first_records) = {
            let page = ResultPage::parse(&body);
            let total = page
                .total_results()?
                .filter(|&total| total > 0)
                .ok_or(ScrapeError::NoResults)?;
            (total, page.records()?)
        };

        let pages = page_count(total_results);
        info!(
            total_results = total_results,
            pages = pages,
            "Total results found"
        );

        self.progress.set_length(pages as u64);
        self.progress.inc(1);

        // Not sized from the reported total, which comes from the remote page
        let mut records = Vec::new();
        debug!(offset = 0, records = first_records.len(), "Extracted page");
        records.extend(first_records);

        for offset in page_offsets(total_results).skip(1) {
            self.delay.pause().await;

            let url = query.with_offset(offset).url(&self.base_url);
            let body = self.source.fetch(&url).await?;
            let page_records = ResultPage::parse(&body).records()?;

            debug!(offset = offset, records = page_records.len(), "Extracted page");
            records.extend(page_records);
            self.progress.inc(1);
        }

        if records.len() != total_results {
            warn!(
                expected = total_results,
                scraped = records.len(),
                "Record count differs from reported total"
            );
        }

        info!(
            records = records.len(),
            pages = pages,
            "arXiv scrape complete"
        );

        Ok(ScrapeReport {
            total_results,
            pages,
            records,
        })
    }
}
