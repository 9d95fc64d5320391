//! Tabular input: CSV with a header row, from a path or an open reader.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::CatalogResult;
use crate::record::RawRow;

/// Where catalog rows come from. Callers hand over either form through
/// `Into<CatalogSource>`.
pub enum CatalogSource {
    Path(PathBuf),
    Reader(Box<dyn Read>),
}

impl CatalogSource {
    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }
}

impl fmt::Debug for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<PathBuf> for CatalogSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for CatalogSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&PathBuf> for CatalogSource {
    fn from(path: &PathBuf) -> Self {
        Self::Path(path.clone())
    }
}

/// Read every data row as `(header, value)` pairs.
///
/// Header names are trimmed. Short rows only yield the columns they have.
pub fn read_rows(source: CatalogSource) -> CatalogResult<Vec<RawRow>> {
    match source {
        CatalogSource::Path(path) => {
            let file = std::fs::File::open(&path)?;
            log::debug!("reading catalog rows from {}", path.display());
            rows_from_reader(file)
        }
        CatalogSource::Reader(reader) => rows_from_reader(reader),
    }
}

/// Parse CSV content already held in memory.
pub fn rows_from_str(content: &str) -> CatalogResult<Vec<RawRow>> {
    rows_from_reader(content.as_bytes())
}

fn rows_from_reader<R: Read>(reader: R) -> CatalogResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
