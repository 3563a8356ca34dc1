//! arXiv scraper library for collecting paper metadata from search pages.
//!
//! This library builds arXiv advanced-search URLs for a category and an
//! announcement date range, pages through the results and extracts one
//! [`PaperRecord`](shared::PaperRecord) per paper, ready to be written as CSV.

pub mod category;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod query;
pub mod request;
pub mod scraper;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::category::Classification;
pub use crate::error::{Result, ScrapeError};
pub use crate::extract::ResultPage;
pub use crate::fetch::{ArxivClient, FixedDelay, NoDelay, PageDelay, PageSource};
pub use crate::query::{build_search_url, page_count, page_offsets, SearchQuery, PAGE_SIZE};
pub use crate::request::ScrapeRequest;
pub use crate::scraper::{ArxivScraper, ScrapeReport};
