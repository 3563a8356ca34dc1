//! CSV output.
//!
//! Columns are `index,title,tags,authors,abstract`. The two list columns hold
//! JSON arrays of strings, e.g. `["cs.CV","cs.AI"]`.

use crate::error::Result;
use shared::PaperRecord;
use std::io;
use std::path::Path;
use tracing::info;

pub const HEADER: [&str; 5] = ["index", "title", "tags", "authors", "abstract"];

/// Make sure the directory that will hold the output file exists
pub fn prepare_output_path(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            std::fs::create_dir_all(dir)?;
            info!(dir = %dir.display(), "Created output directory");
        }
    }
    Ok(())
}

/// Write the header and one row per record
pub fn write_records<W: io::Write>(writer: W, records: &[PaperRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record([
            record.identifier.as_str(),
            record.title.as_str(),
            record.tags_json().as_str(),
            record.authors_json().as_str(),
            record.abstract_text.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write records to a CSV file, creating its directory if needed
pub fn write_csv(path: &Path, records: &[PaperRecord]) -> Result<()> {
    prepare_output_path(path)?;
    let file = std::fs::File::create(path)?;
    write_records(io::BufWriter::new(file), records)?;

    info!(path = %path.display(), records = records.len(), "Data saved");
    Ok(())
}
