//! Field extraction from arXiv search result pages.
//!
//! A results page has one `h1.title.is-clearfix` heading ("Showing 1–200 of
//! 1,254 results for ...") and one `li.arxiv-result` block per paper.

use crate::error::{Result, ScrapeError};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use shared::PaperRecord;

static RESULT_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"of ([0-9,]+) results").unwrap());

static HEADING: Lazy<Selector> = Lazy::new(|| selector("h1.title.is-clearfix"));
static RESULT_BLOCK: Lazy<Selector> = Lazy::new(|| selector("li.arxiv-result"));
static LIST_TITLE: Lazy<Selector> = Lazy::new(|| selector("p.list-title"));
static TITLE: Lazy<Selector> = Lazy::new(|| selector("p.title"));
static TAG: Lazy<Selector> = Lazy::new(|| selector("span.tag"));
static AUTHORS: Lazy<Selector> = Lazy::new(|| selector("p.authors"));
static AUTHOR_LINK: Lazy<Selector> = Lazy::new(|| selector("a"));
static ABSTRACT_FULL: Lazy<Selector> = Lazy::new(|| selector("p.abstract span.abstract-full"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// A parsed search results page
pub struct ResultPage {
    document: Html,
}

impl ResultPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Total hit count from the page heading.
    ///
    /// `Ok(None)` when the heading exists but does not read "of N results";
    /// only meaningful on the first page of a query.
    pub fn total_results(&self) -> Result<Option<usize>> {
        let heading = self
            .document
            .select(&HEADING)
            .next()
            .ok_or_else(|| ScrapeError::parse("result count", "missing h1.title.is-clearfix"))?;

        Ok(parse_result_count(&collapsed_text(heading)))
    }

    /// Every paper on the page, in document order
    pub fn records(&self) -> Result<Vec<PaperRecord>> {
        let records = self
            .document
            .select(&RESULT_BLOCK)
            .map(extract_record)
            .collect::<Result<Vec<_>>>()?;

        if records.is_empty() {
            return Err(ScrapeError::parse("results", "no li.arxiv-result blocks on page"));
        }

        Ok(records)
    }
}

/// Read N from "... of N results ...", thousands separators allowed
pub fn parse_result_count(heading: &str) -> Option<usize> {
    RESULT_COUNT
        .captures(heading)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
}

/// Run every field extractor on one result block
pub fn extract_record(block: ElementRef<'_>) -> Result<PaperRecord> {
    Ok(PaperRecord {
        identifier: identifier(block)?,
        title: title(block)?,
        tags: tags(block),
        authors: authors(block)?,
        abstract_text: abstract_text(block)?,
    })
}

/// Accession number from the list-title line, e.g. `arXiv:2507.08819v1 [cs.CV]`
pub fn identifier(block: ElementRef<'_>) -> Result<String> {
    let line = block
        .select(&LIST_TITLE)
        .next()
        .ok_or_else(|| ScrapeError::parse("identifier", "missing p.list-title"))?;
    let text = collapsed_text(line);

    let (_, rest) = text
        .split_once(':')
        .ok_or_else(|| ScrapeError::parse("identifier", format!("no ':' in {:?}", text)))?;
    let id = rest.split('[').next().unwrap_or_default().trim();

    if id.is_empty() {
        return Err(ScrapeError::parse("identifier", format!("empty identifier in {:?}", text)));
    }
    Ok(id.to_string())
}

pub fn title(block: ElementRef<'_>) -> Result<String> {
    block
        .select(&TITLE)
        .next()
        .map(collapsed_text)
        .ok_or_else(|| ScrapeError::parse("title", "missing p.title"))
}

/// Category tags, without the DOI tokens arXiv sometimes renders as tags
pub fn tags(block: ElementRef<'_>) -> Vec<String> {
    block
        .select(&TAG)
        .map(collapsed_text)
        .filter(|tag| !is_doi_token(tag))
        .collect()
}

/// `doi` itself or anything shaped like a DOI (`10.xxxx/...`)
pub fn is_doi_token(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("doi") || tag.starts_with("10.")
}

pub fn authors(block: ElementRef<'_>) -> Result<Vec<String>> {
    let line = block
        .select(&AUTHORS)
        .next()
        .ok_or_else(|| ScrapeError::parse("authors", "missing p.authors"))?;

    Ok(line.select(&AUTHOR_LINK).map(collapsed_text).collect())
}

/// Full abstract without the "▽ More" / "△ Less" toggle links
pub fn abstract_text(block: ElementRef<'_>) -> Result<String> {
    let full = block
        .select(&ABSTRACT_FULL)
        .next()
        .ok_or_else(|| ScrapeError::parse("abstract", "missing p.abstract span.abstract-full"))?;

    let mut text = String::new();
    text_without_links(full, &mut text);
    Ok(collapse_whitespace(&text))
}

fn text_without_links(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() != "a" => {
                if let Some(child) = ElementRef::wrap(child) {
                    text_without_links(child, out);
                }
            }
            _ => {}
        }
    }
}

fn collapsed_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{results_page, BlockFixture};

    fn first_block(html: &Html) -> ElementRef<'_> {
        html.select(&RESULT_BLOCK).next().unwrap()
    }

    #[test]
    fn test_parse_result_count() {
        assert_eq!(parse_result_count("Showing 1–200 of 1,254 results for all: cs"), Some(1254));
        assert_eq!(parse_result_count("Showing 1–50 of 50 results"), Some(50));
        assert_eq!(parse_result_count("Showing 1–200 of 1,002,003 results"), Some(1_002_003));
        assert_eq!(parse_result_count("Sorry, your query returned no results"), None);
        assert_eq!(parse_result_count("0 results"), None);
    }

    #[test]
    fn test_total_results_from_heading() {
        let page = ResultPage::parse(&results_page(
            "Showing 1&ndash;200 of\n   12,345 results for all",
            &[],
        ));
        assert_eq!(page.total_results().unwrap(), Some(12345));
    }

    #[test]
    fn test_total_results_without_match() {
        let page = ResultPage::parse(&results_page("Sorry, your query returned no results", &[]));
        assert_eq!(page.total_results().unwrap(), None);
    }

    #[test]
    fn test_total_results_missing_heading() {
        let page = ResultPage::parse("<html><body><h1 class=\"title\">Search</h1></body></html>");
        assert!(matches!(
            page.total_results(),
            Err(ScrapeError::Parse { step: "result count", .. })
        ));
    }

    #[test]
    fn test_identifier_strips_prefix_and_annotation() {
        let html = Html::parse_document(&results_page(
            "of 1 results",
            &[BlockFixture {
                list_title: "arXiv:2507.08819v1 [cs.CV]".to_string(),
                ..BlockFixture::numbered(0)
            }
            .render()],
        ));
        assert_eq!(identifier(first_block(&html)).unwrap(), "2507.08819v1");
    }

    #[test]
    fn test_identifier_with_link_markup() {
        let block = r##"<li class="arxiv-result"><div class="is-marginless">
            <p class="list-title is-inline-block"><a href="https://arxiv.org/abs/2509.00123">arXiv:2509.00123</a>
              <span>&nbsp;[<a href="https://arxiv.org/pdf/2509.00123">pdf</a>, <a href="#">other</a>]&nbsp;</span>
            </p></div></li>"##;
        let html = Html::parse_document(&results_page("of 1 results", &[block.to_string()]));
        assert_eq!(identifier(first_block(&html)).unwrap(), "2509.00123");
    }

    #[test]
    fn test_identifier_without_colon() {
        let html = Html::parse_document(&results_page(
            "of 1 results",
            &[BlockFixture {
                list_title: "2507.08819v1".to_string(),
                ..BlockFixture::numbered(0)
            }
            .render()],
        ));
        assert!(matches!(
            identifier(first_block(&html)),
            Err(ScrapeError::Parse { step: "identifier", .. })
        ));
    }

    #[test]
    fn test_title_is_whitespace_collapsed() {
        let html = Html::parse_document(&results_page(
            "of 1 results",
            &[BlockFixture {
                title: "\n   Deep   <span class=\"search-hit\">Learning</span>\n  for Everything ".to_string(),
                ..BlockFixture::numbered(0)
            }
            .render()],
        ));
        assert_eq!(title(first_block(&html)).unwrap(), "Deep Learning for Everything");
    }

    #[test]
    fn test_tags_filter_doi_tokens() {
        let html = Html::parse_document(&results_page(
            "of 1 results",
            &[BlockFixture {
                tags: vec!["cs.CV".into(), "doi".into(), "10.1000/xyz".into()],
                ..BlockFixture::numbered(0)
            }
            .render()],
        ));
        assert_eq!(tags(first_block(&html)), vec!["cs.CV".to_string()]);
    }

    #[test]
    fn test_is_doi_token() {
        assert!(is_doi_token("doi"));
        assert!(is_doi_token("DOI"));
        assert!(is_doi_token("10.1103/PhysRevD.1.1"));
        assert!(!is_doi_token("cs.CV"));
        assert!(!is_doi_token("math.10"));
    }

    #[test]
    fn test_authors_in_order() {
        let html = Html::parse_document(&results_page(
            "of 1 results",
            &[BlockFixture {
                authors: vec!["Zoe Zed".into(), "Adam Aa".into(), "Mia Em".into()],
                ..BlockFixture::numbered(0)
            }
            .render()],
        ));
        assert_eq!(
            authors(first_block(&html)).unwrap(),
            vec!["Zoe Zed", "Adam Aa", "Mia Em"]
        );
    }

    #[test]
    fn test_abstract_drops_toggle_links() {
        let block = r#"<li class="arxiv-result">
            <p class="abstract mathjax">
              <span class="abstract-short">We show that &hellip; <a class="is-size-7">&#9661; More</a></span>
              <span class="abstract-full has-text-grey-dark mathjax" style="display: none;">
                We show that <em>everything</em>   works.
                <a class="is-size-7">&#9651; Less</a>
              </span>
            </p></li>"#;
        let html = Html::parse_document(&results_page("of 1 results", &[block.to_string()]));
        let text = abstract_text(first_block(&html)).unwrap();
        assert_eq!(text, "We show that everything works.");
        assert!(!text.contains("More"));
        assert!(!text.contains("Less"));
    }

    #[test]
    fn test_missing_abstract_is_parse_error() {
        let html = Html::parse_document(&results_page(
            "of 1 results",
            &[r#"<li class="arxiv-result"><p class="title">x</p></li>"#.to_string()],
        ));
        assert!(matches!(
            abstract_text(first_block(&html)),
            Err(ScrapeError::Parse { step: "abstract", .. })
        ));
    }

    #[test]
    fn test_records_in_block_order() {
        let blocks: Vec<String> = (0..3).map(|i| BlockFixture::numbered(i).render()).collect();
        let page = ResultPage::parse(&results_page("of 3 results", &blocks));
        let records = page.records().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], BlockFixture::numbered(0).record());
        assert_eq!(records[2].identifier, "2509.00002v1");
    }

    #[test]
    fn test_records_fail_on_malformed_block() {
        let blocks = vec![
            BlockFixture::numbered(0).render(),
            r#"<li class="arxiv-result"><p class="authors">nobody</p></li>"#.to_string(),
        ];
        let page = ResultPage::parse(&results_page("of 2 results", &blocks));
        assert!(matches!(page.records(), Err(ScrapeError::Parse { .. })));
    }

    #[test]
    fn test_records_fail_on_empty_page() {
        let page = ResultPage::parse(&results_page("of 2 results", &[]));
        assert!(matches!(
            page.records(),
            Err(ScrapeError::Parse { step: "results", .. })
        ));
    }
}
