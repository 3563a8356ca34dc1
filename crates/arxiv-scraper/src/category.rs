//! Category code to search classification.
//!
//! arXiv's advanced search filters physics archives through a shared
//! `physics` classification plus an archive name, while every other subject
//! area has its own named classification.

use shared::CategoryTable;

/// How a category code is expressed in the search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// `classification-physics=y&classification-physics_archives=<archive>`
    Physics { archive: String },
    /// `classification-<name>=y`
    Named { name: String },
}

impl Classification {
    /// Look up a code in the vocabulary.
    ///
    /// Returns `None` for codes the table does not know, so an unknown code
    /// can never reach the URL builder.
    pub fn resolve(table: &CategoryTable, code: &str) -> Option<Self> {
        if table.is_physics(code) {
            return Some(Classification::Physics {
                archive: code.to_string(),
            });
        }

        table.named(code).map(|name| Classification::Named {
            name: name.to_string(),
        })
    }

    /// Query-string fragment selecting this classification
    pub fn query_fragment(&self) -> String {
        match self {
            Classification::Physics { archive } => {
                format!("classification-physics=y&classification-physics_archives={}", archive)
            }
            Classification::Named { name } => format!("classification-{}=y", name),
        }
    }
}
