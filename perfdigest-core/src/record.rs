//! Record Store
//!
//! Parses latency tables of the form
//!
//! ```text
//! Implementation,Min_ms,Max_ms,Avg_ms
//! RocSOLVER,2.1,2.4,2.3
//! Hybrid,1.5,1.8,1.6
//! ```
//!
//! Extra columns are ignored. Rows are kept in file order; duplicate
//! implementation names are preserved here and resolved downstream with a
//! first-occurrence-wins rule (no aggregation across duplicates).

use crate::error::{DigestError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Columns the primary table must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["Implementation", "Min_ms", "Max_ms", "Avg_ms"];

/// One row of the primary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Name of the benchmarked variant
    #[serde(rename = "Implementation")]
    pub implementation_name: String,
    /// Fastest observed run (ms)
    #[serde(rename = "Min_ms")]
    pub min_ms: f64,
    /// Slowest observed run (ms)
    #[serde(rename = "Max_ms")]
    pub max_ms: f64,
    /// Mean run time (ms)
    #[serde(rename = "Avg_ms")]
    pub avg_ms: f64,
}

impl MeasurementRecord {
    /// Create a record from its four fields
    pub fn new(name: impl Into<String>, min_ms: f64, max_ms: f64, avg_ms: f64) -> Self {
        Self {
            implementation_name: name.into(),
            min_ms,
            max_ms,
            avg_ms,
        }
    }
}

/// Parsed primary table
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    source: Option<PathBuf>,
    records: Vec<MeasurementRecord>,
}

impl RecordStore {
    /// Load a table from a CSV file.
    ///
    /// # Errors
    /// - [`DigestError::InputNotFound`] if `path` is not an existing file
    /// - [`DigestError::MissingColumn`] if a required header is absent
    /// - [`DigestError::Parse`] on malformed rows (non-numeric latency etc.)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = open_input(path)?;
        let records = parse_records(file, path)?;

        tracing::debug!(
            path = %path.display(),
            rows = records.len(),
            "loaded measurement table"
        );

        Ok(Self {
            source: Some(path.to_path_buf()),
            records,
        })
    }

    /// Build a store from records already in memory
    pub fn from_records(records: Vec<MeasurementRecord>) -> Self {
        Self {
            source: None,
            records,
        }
    }

    /// File the records were loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All rows in file order
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Number of rows (duplicates included)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows grouped by implementation name, in order of first appearance
    pub fn group_by_implementation(&self) -> IndexMap<&str, Vec<&MeasurementRecord>> {
        let mut groups: IndexMap<&str, Vec<&MeasurementRecord>> = IndexMap::new();
        for record in &self.records {
            groups
                .entry(record.implementation_name.as_str())
                .or_default()
                .push(record);
        }
        groups
    }

    /// The first row of each implementation, in order of first appearance
    pub fn first_per_implementation(&self) -> Vec<&MeasurementRecord> {
        self.group_by_implementation()
            .into_values()
            .filter_map(|rows| rows.first().copied())
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a MeasurementRecord;
    type IntoIter = std::slice::Iter<'a, MeasurementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Optional, more granular measurement table (e.g. per-kernel profiler dump).
///
/// Loaded verbatim as strings and carried alongside the analysis; it is not
/// interpreted.
#[derive(Debug, Clone, Default)]
pub struct SecondaryTable {
    /// Header row
    pub headers: Vec<String>,
    /// Data rows, one string per cell
    pub rows: Vec<Vec<String>>,
}

impl SecondaryTable {
    /// Load a table from a CSV file.
    ///
    /// # Errors
    /// [`DigestError::InputNotFound`] if `path` is not an existing file,
    /// [`DigestError::Parse`] on malformed CSV.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = open_input(path)?;
        let mut reader = csv_reader(file);

        let headers = reader
            .headers()
            .map_err(|source| DigestError::Parse {
                path: path.to_path_buf(),
                row: 0,
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|source| DigestError::Parse {
                path: path.to_path_buf(),
                row: idx + 1,
                source,
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn open_input(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(DigestError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DigestError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => DigestError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn parse_records<R: Read>(reader: R, path: &Path) -> Result<Vec<MeasurementRecord>> {
    let mut reader = csv_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| DigestError::Parse {
            path: path.to_path_buf(),
            row: 0,
            source,
        })?
        .clone();

    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(DigestError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<MeasurementRecord>().enumerate() {
        let record = result.map_err(|source| DigestError::Parse {
            path: path.to_path_buf(),
            row: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}
