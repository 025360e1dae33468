//! CSV job sources
//!
//! Reads a header row plus records into string-keyed rows and derives the
//! source label from the file name.

use crate::error::{CompassError, Result};
use csv::ReaderBuilder;
use log::{debug, warn};
use std::path::Path;
use tokio::fs;

/// One source record keyed by its (raw) CSV header, in column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pairs: Vec<(String, String)>,
}

impl RawRow {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when every value is blank
    pub fn is_blank(&self) -> bool {
        self.pairs.iter().all(|(_, v)| v.trim().is_empty())
    }
}

/// Rows of one CSV document plus the count of records that could not be read
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub rows: Vec<RawRow>,
    pub unreadable: usize,
}

/// Source label for a file name: a trailing `.csv` or `.txt` is dropped
pub fn source_label(file_name: &str) -> String {
    let bytes = file_name.as_bytes();
    if bytes.len() >= 4 {
        let tail = &bytes[bytes.len() - 4..];
        if tail.eq_ignore_ascii_case(b".csv") || tail.eq_ignore_ascii_case(b".txt") {
            return file_name[..file_name.len() - 4].to_string();
        }
    }
    file_name.to_string()
}

/// Source label for a path, from its final component
pub fn source_label_for_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    source_label(&name)
}

/// Parse CSV text with a header row. Blank records are skipped.
pub fn parse_csv(text: &str) -> Result<ParsedCsv> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut parsed = ParsedCsv::default();

    for (idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping unreadable CSV record {}: {}", idx + 1, e);
                parsed.unreadable += 1;
                continue;
            }
        };

        let row = RawRow::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string())),
        );

        if !row.is_blank() {
            parsed.rows.push(row);
        }
    }

    Ok(parsed)
}

/// Read and parse one CSV file
pub async fn read_csv_file(path: &Path) -> Result<ParsedCsv> {
    if !path.exists() {
        return Err(CompassError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let bytes = fs::read(path).await?;
    let text = String::from_utf8_lossy(&bytes);
    let parsed = parse_csv(&text)?;
    if parsed.unreadable > 0 {
        warn!("{}: skipped {} unreadable records", path.display(), parsed.unreadable);
    }
    Ok(parsed)
}
