use std::collections::BTreeMap;
use std::io::Read;

use csv::ReaderBuilder;

/// One data row keyed by (normalized) column header.
///
/// Values are kept as they appear in the source; cleaning happens in the
/// normalizer. Columns missing from a short row are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a header-bearing CSV table into raw records, in row order.
///
/// Blank lines are skipped. When a header appears more than once the first
/// column with that name wins.
pub fn read_records<R: Read>(source: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRecord::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            if header.is_empty() || row.get(header).is_some() {
                continue;
            }
            row.insert(header.clone(), value);
        }
        records.push(row);
    }
    Ok(records)
}
