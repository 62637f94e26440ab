//! The endpoint report and its comma-delimited form.
//!
//! Fields are written as-is: a value containing `,` or a newline shifts
//! the columns of its row.

use std::fs;
use std::iter;
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::routes::types::RouteRecord;

/// Column titles, always the first row.
pub const HEADER: [&str; 5] = ["Class Name", "Method Name", "HTTP Method", "Path", "Description"];

/// Ordered route records behind a fixed header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<RouteRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RouteRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Number of records, header excluded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row, then one row per record in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = [&str; 5]> + '_ {
        let header: [&str; 5] = HEADER;
        iter::once(header).chain(self.records.iter().map(RouteRecord::fields))
    }

    pub fn to_delimited(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_delimited()).map_err(|source| ScanError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Extend<RouteRecord> for Report {
    fn extend<I: IntoIterator<Item = RouteRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<RouteRecord> for Report {
    fn from_iter<I: IntoIterator<Item = RouteRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
