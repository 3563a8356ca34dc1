//! Data models for the project.
//!
//! A [`PaperRecord`] is one row of scraped output; a run produces an ordered
//! `Vec<PaperRecord>` in page order, then block order within a page.

use serde::{Deserialize, Serialize};

/// Metadata for one paper on an arXiv search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// arXiv accession number as listed, e.g. `2507.08819v1`
    pub identifier: String,
    pub title: String,
    /// Category tags in page order, DOI tokens removed
    pub tags: Vec<String>,
    /// Author names in page order
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl PaperRecord {
    /// Tags rendered as a JSON array, the form stored in the CSV `tags` column
    pub fn tags_json(&self) -> String {
        render_list(&self.tags)
    }

    /// Authors rendered as a JSON array, the form stored in the CSV `authors` column
    pub fn authors_json(&self) -> String {
        render_list(&self.authors)
    }
}

fn render_list(items: &[String]) -> String {
    // Serializing a slice of strings cannot fail
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
