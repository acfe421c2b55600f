//! In-memory index of the reference file

use std::io::BufRead;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::model::{CompositeKey, HeaderRow, KeyBuilder, KeyedRow};
use crate::parser::DelimitedReader;

/// Comparable values of one reference row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRow {
    pub values: Vec<String>,
    /// Source line in the reference file (1-indexed)
    pub line: u64,
}

/// Mapping from composite key to reference row values
///
/// A key seen twice keeps only its last row.
#[derive(Debug, Default)]
pub struct RowIndex {
    rows: FxHashMap<CompositeKey, IndexedRow>,
    row_count: usize,
    duplicate_count: usize,
}

impl RowIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every data row of a reader whose header was already consumed
    pub fn build<R: BufRead>(
        reader: &mut DelimitedReader<R>,
        header: &HeaderRow,
        keys: &KeyBuilder,
    ) -> Result<Self> {
        let mut index = Self::new();
        while let Some((line, record)) = reader.next_record()? {
            let row = keys.split_row(header, record);
            index.insert(row, line);
        }

        log::debug!(
            "indexed {} rows ({} distinct keys) from {}",
            index.row_count,
            index.len(),
            reader.path().display()
        );
        Ok(index)
    }

    /// Insert a row, replacing any earlier row with the same key
    pub fn insert(&mut self, row: KeyedRow, line: u64) {
        self.row_count += 1;
        let KeyedRow { key, values } = row;
        if let Some(previous) = self.rows.get(&key) {
            log::warn!(
                "duplicate key ({}) on line {}; replacing row from line {}",
                key,
                line,
                previous.line
            );
            self.duplicate_count += 1;
        }
        self.rows.insert(key, IndexedRow { values, line });
    }

    pub fn get(&self, key: &CompositeKey) -> Option<&IndexedRow> {
        self.rows.get(key)
    }

    pub fn remove(&mut self, key: &CompositeKey) -> Option<IndexedRow> {
        self.rows.remove(key)
    }

    /// Number of distinct keys still indexed
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows inserted, duplicates included
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of rows that replaced an earlier row with the same key
    pub fn duplicate_count(&self) -> usize {
        self.duplicate_count
    }

    /// Remove and return all remaining entries in reference line order
    pub fn drain_remaining(&mut self) -> Vec<(CompositeKey, IndexedRow)> {
        let mut remaining: Vec<_> = self.rows.drain().collect();
        remaining.sort_by_key(|(_, row)| row.line);
        remaining
    }
}
