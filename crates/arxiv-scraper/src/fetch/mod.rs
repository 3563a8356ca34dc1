//! Page retrieval.
//!
//! [`PageSource`] is the seam between the scraper and the network: the
//! reqwest-backed [`ArxivClient`] in production, canned pages in tests.
//! [`PageDelay`] is the politeness pause taken between two pages.

pub mod client;
pub mod delay;

pub use client::ArxivClient;
pub use delay::{FixedDelay, NoDelay, PageDelay};

use crate::error::Result;
use async_trait::async_trait;

/// Anything that can turn a search URL into an HTML body
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page. Any failure is fatal to the run.
    async fn fetch(&self, url: &str) -> Result<String>;
}
