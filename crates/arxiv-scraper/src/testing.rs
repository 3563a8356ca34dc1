//! Canned arXiv pages and a stub page source for tests.

use crate::error::{Result, ScrapeError};
use crate::fetch::{PageDelay, PageSource};
use async_trait::async_trait;
use shared::PaperRecord;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One `li.arxiv-result` block
#[derive(Debug, Clone)]
pub struct BlockFixture {
    pub id: String,
    pub list_title: String,
    pub title: String,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
    pub abstract_text: String,
}

impl BlockFixture {
    pub fn numbered(n: usize) -> Self {
        let id = format!("2509.{:05}v1", n);
        Self {
            list_title: format!("arXiv:{} [cs.LG]", id),
            id,
            title: format!("Paper number {}", n),
            tags: vec!["cs.LG".to_string(), "stat.ML".to_string()],
            authors: vec![format!("First Author {}", n), "Second Author".to_string()],
            abstract_text: format!("Abstract of paper {}.", n),
        }
    }

    pub fn render(&self) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|t| format!(r#"<span class="tag is-small is-link tooltip is-tooltip-top">{}</span>"#, t))
            .collect();
        let authors: String = self
            .authors
            .iter()
            .map(|a| format!(r#"<a href="/a/{}">{}</a>, "#, a.replace(' ', "_"), a))
            .collect();

        format!(
            r#"<li class="arxiv-result">
  <div class="is-marginless">
    <p class="list-title is-inline-block">{list_title}</p>
    <div class="tags is-inline-block">{tags}</div>
  </div>
  <p class="title is-5 mathjax">{title}</p>
  <p class="authors"><span class="search-hit">Authors:</span> {authors}</p>
  <p class="abstract mathjax">
    <span class="search-hit">Abstract</span>:
    <span class="abstract-short has-text-grey-dark mathjax">{short} <a class="is-size-7">&#9661; More</a></span>
    <span class="abstract-full has-text-grey-dark mathjax" style="display: none;">
      {abstract_text}
      <a class="is-size-7">&#9651; Less</a>
    </span>
  </p>
</li>"#,
            list_title = self.list_title,
            tags = tags,
            title = self.title,
            authors = authors,
            short = self.abstract_text.split(' ').next().unwrap_or_default(),
            abstract_text = self.abstract_text,
        )
    }

    /// The record the extractors should produce for this block
    pub fn record(&self) -> PaperRecord {
        PaperRecord {
            identifier: self.id.clone(),
            title: self.title.clone(),
            tags: self.tags.clone(),
            authors: self.authors.clone(),
            abstract_text: self.abstract_text.clone(),
        }
    }
}

/// A full results page with the given heading text and blocks
pub fn results_page(heading: &str, blocks: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>Search | arXiv e-print repository</title></head>
<body>
  <main>
    <div class="level is-marginless">
      <h1 class="title is-clearfix">{}</h1>
    </div>
    <ol class="breathe-horizontal" start="1">
{}
    </ol>
  </main>
</body>
</html>"#,
        heading,
        blocks.join("\n")
    )
}

/// Pages for `total` results, split by the given page size, numbered in order
pub fn paged_fixtures(total: usize, page_size: usize) -> Vec<Vec<BlockFixture>> {
    (0..total)
        .step_by(page_size)
        .map(|start| {
            (start..(start + page_size).min(total))
                .map(BlockFixture::numbered)
                .collect()
        })
        .collect()
}

/// Serves canned HTML keyed by the `start=` offset of the requested URL
#[derive(Default)]
pub struct StubSource {
    pages: HashMap<usize, String>,
    requests: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, offset: usize, html: String) -> Self {
        self.pages.insert(offset, html);
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn start_offset(url: &str) -> Option<usize> {
    url.split('&')
        .find_map(|pair| pair.strip_prefix("start="))
        .and_then(|v| v.parse().ok())
}

#[async_trait]
impl PageSource for StubSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());

        start_offset(url)
            .and_then(|offset| self.pages.get(&offset).cloned())
            .ok_or_else(|| ScrapeError::connectivity(url, "status code 404 Not Found"))
    }
}

/// Delay that only counts how often it was asked to pause
#[derive(Default)]
pub struct CountingDelay {
    pauses: AtomicUsize,
}

impl CountingDelay {
    pub fn count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageDelay for CountingDelay {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}
