//! Search query validation and URL construction.

use crate::category::Classification;
use crate::error::{Result, ScrapeError};
use chrono::NaiveDate;
use shared::CategoryTable;

/// Results per page requested from arXiv
pub const PAGE_SIZE: usize = 200;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated search for one category and announcement date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
    category: String,
    classification: Classification,
    include_cross_list: bool,
    offset: usize,
}

impl SearchQuery {
    /// Validate raw parameters into a query at offset 0.
    ///
    /// Dates must be `YYYY-MM-DD` calendar dates with start <= end, and the
    /// category must be part of the vocabulary.
    pub fn new(
        categories: &CategoryTable,
        start_date: &str,
        end_date: &str,
        category: &str,
        include_cross_list: bool,
    ) -> Result<Self> {
        let start = parse_date("start_date", start_date)?;
        let end = parse_date("end_date", end_date)?;

        if start > end {
            return Err(ScrapeError::InvalidInput(format!(
                "Invalid date range: start_date {} is after end_date {}",
                start_date, end_date
            )));
        }

        let classification = Classification::resolve(categories, category).ok_or_else(|| {
            ScrapeError::InvalidInput(format!(
                "Invalid category '{}', expected one of: {}",
                category,
                categories.codes().join(", ")
            ))
        })?;

        Ok(Self {
            start_date: start,
            end_date: end,
            category: category.to_string(),
            classification,
            include_cross_list,
            offset: 0,
        })
    }

    /// Same query, positioned at another result offset
    pub fn with_offset(&self, offset: usize) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn include_cross_list(&self) -> bool {
        self.include_cross_list
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Search URL for this query against the given site root
    pub fn url(&self, base_url: &str) -> String {
        build_search_url(
            base_url,
            &self.start_date.format(DATE_FORMAT).to_string(),
            &self.end_date.format(DATE_FORMAT).to_string(),
            &self.classification,
            self.offset,
            self.include_cross_list,
        )
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        ScrapeError::InvalidInput(format!(
            "Invalid {} '{}', expected YYYY-MM-DD: {}",
            field, value, e
        ))
    })
}

/// Build the advanced-search URL.
///
/// Dates are inserted verbatim; validating them is the caller's job.
pub fn build_search_url(
    base_url: &str,
    start_date: &str,
    end_date: &str,
    classification: &Classification,
    offset: usize,
    include_cross_list: bool,
) -> String {
    let cross_list = if include_cross_list { "include" } else { "exclude" };

    format!(
        "{}/search/advanced?advanced=1&terms-0-operator=AND&terms-0-term=&terms-0-field=title&\
         {}&classification-include_cross_list={}&\
         date-year=&date-filter_by=date_range&date-from_date={}&date-to_date={}&\
         date-date_type=announced_date_first&\
         abstracts=show&size={}&order=-announced_date_first&start={}",
        base_url.trim_end_matches('/'),
        classification.query_fragment(),
        cross_list,
        start_date,
        end_date,
        PAGE_SIZE,
        offset
    )
}

/// Offsets of every page needed to cover `total_results`, ascending.
///
/// Lazy: the total comes from the remote page and may be arbitrarily large.
pub fn page_offsets(total_results: usize) -> impl Iterator<Item = usize> {
    (0..total_results).step_by(PAGE_SIZE)
}

/// Number of pages needed to cover `total_results`
pub fn page_count(total_results: usize) -> usize {
    total_results.div_ceil(PAGE_SIZE)
}
