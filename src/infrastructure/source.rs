//! Record sources

use crate::domain::Record;
use crate::error::{ArchiveError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Somewhere newsletter records can be read from
pub trait RecordSource {
    /// Read every valid record. Malformed rows are skipped, not reported.
    fn load(&self) -> Result<Vec<Record>>;

    /// Location shown in messages
    fn location(&self) -> &Path;
}

/// Delimited text export of the newsletter spreadsheet.
///
/// Columns are taken by position (month, day, weekday, title, body); any
/// header row fails validation and is dropped like other bad rows.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }

    fn delimiter(&self) -> u8 {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        }
    }
}

impl RecordSource for CsvSource {
    fn load(&self) -> Result<Vec<Record>> {
        log::info!("Loading newsletter records from {}", self.path.display());

        let to_source_error = |e: ArchiveError| ArchiveError::DataSource {
            path: self.path.clone(),
            reason: match e {
                ArchiveError::Io(io) => io.to_string(),
                ArchiveError::Csv(csv) => csv.to_string(),
                other => other.to_string(),
            },
        };

        let file = File::open(&self.path).map_err(|e| to_source_error(e.into()))?;
        let records = read_records(file, self.delimiter()).map_err(to_source_error)?;

        log::info!("Loaded {} records", records.len());
        Ok(records)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Read records from any delimited reader
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in rdr.records() {
        let row = row?;
        match parse_row(&row) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
                log::debug!("Dropping malformed row {:?}", row.position().map(|p| p.line()));
            }
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} rows missing required fields", dropped);
    }
    Ok(records)
}

/// Convenience wrapper: load records from a file path
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    CsvSource::new(path).load()
}

fn parse_row(row: &StringRecord) -> Option<Record> {
    let field = |i: usize| row.get(i).filter(|s| !s.is_empty());

    let month = parse_number(field(0)?).filter(|m| (1..=12).contains(m))?;
    let day = parse_number(field(1)?).filter(|d| (1..=31).contains(d))?;

    Some(Record::new(month, day, field(2)?, field(3)?, field(4)?))
}

/// Whole numbers, including spreadsheet exports such as `4.0`
fn parse_number(text: &str) -> Option<u32> {
    if let Ok(n) = text.parse::<u32>() {
        return Some(n);
    }
    let value: f64 = text.parse().ok()?;
    if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}
