//! Reconciliation engine for comparing two keyed files

mod index;
mod row_diff;

use std::io::BufRead;

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::model::{CompositeKey, HeaderRow, KeyBuilder};
use crate::output::OutputFormatter;
use crate::parser::{load_header, match_header, DelimitedReader};

pub use index::{IndexedRow, RowIndex};
pub use row_diff::{join_mismatches, ColumnMismatch, RowDiffer};

/// A single reconciliation finding
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// Key present in both files with differing values
    Mismatch {
        key: CompositeKey,
        columns: Vec<ColumnMismatch>,
        reference_line: u64,
        subject_line: u64,
    },
    /// Key present only in the streamed file
    OnlyInSubject { key: CompositeKey, subject_line: u64 },
    /// Key present only in the indexed file
    OnlyInReference { key: CompositeKey, reference_line: u64 },
}

impl Finding {
    /// Get the key for this finding
    pub fn key(&self) -> &CompositeKey {
        match self {
            Finding::Mismatch { key, .. } => key,
            Finding::OnlyInSubject { key, .. } => key,
            Finding::OnlyInReference { key, .. } => key,
        }
    }
}

/// Statistics about a reconciliation run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub reference_rows: usize,
    pub subject_rows: usize,
    pub matched_keys: usize,
    pub mismatched_keys: usize,
    pub only_in_reference: usize,
    pub only_in_subject: usize,
    pub duplicate_reference_keys: usize,
}

/// Streams subject rows against a reference index
pub struct Reconciler<'a> {
    header: &'a HeaderRow,
    keys: KeyBuilder,
    differ: RowDiffer,
}

impl<'a> Reconciler<'a> {
    pub fn new(header: &'a HeaderRow, keys: KeyBuilder, differ: RowDiffer) -> Self {
        Self { header, keys, differ }
    }

    /// Reconcile every data row of `reader` against `index`
    ///
    /// Matched keys are removed from the index as they are seen; whatever
    /// remains afterwards is reported as present only in the reference file.
    pub fn reconcile<R, F>(
        &self,
        reader: &mut DelimitedReader<R>,
        index: &mut RowIndex,
        out: &mut F,
    ) -> Result<ReconcileStats>
    where
        R: BufRead,
        F: OutputFormatter + ?Sized,
    {
        let mut stats = ReconcileStats {
            reference_rows: index.row_count(),
            duplicate_reference_keys: index.duplicate_count(),
            ..Default::default()
        };

        while let Some((subject_line, record)) = reader.next_record()? {
            stats.subject_rows += 1;
            let row = self.keys.split_row(self.header, record);

            match index.remove(&row.key) {
                Some(reference) => {
                    stats.matched_keys += 1;
                    let columns = self.differ.diff(self.header, &row.values, &reference.values);
                    if !columns.is_empty() {
                        stats.mismatched_keys += 1;
                        out.write_finding(&Finding::Mismatch {
                            key: row.key,
                            columns,
                            reference_line: reference.line,
                            subject_line,
                        })?;
                    }
                }
                None => {
                    stats.only_in_subject += 1;
                    out.write_finding(&Finding::OnlyInSubject {
                        key: row.key,
                        subject_line,
                    })?;
                }
            }
        }

        for (key, reference) in index.drain_remaining() {
            stats.only_in_reference += 1;
            out.write_finding(&Finding::OnlyInReference {
                key,
                reference_line: reference.line,
            })?;
        }

        Ok(stats)
    }
}

/// Compare the two files named in `config`, writing findings to `out`
///
/// Both headers are validated before any data row is read. The reference
/// file is indexed in memory; the subject file is streamed.
pub fn compare<F>(config: &Config, out: &mut F) -> Result<ReconcileStats>
where
    F: OutputFormatter + ?Sized,
{
    let mut reference = DelimitedReader::open(&config.reference_file, config.delimiter)?;
    let header = load_header(&mut reference, &config.key_columns, &config.exclude_columns)?;

    let mut subject = DelimitedReader::open(&config.subject_file, config.delimiter)?;
    match_header(&mut subject, &header, &config.reference_file)?;

    let keys = KeyBuilder::new().with_separator(config.key_separator());
    let mut index = RowIndex::build(&mut reference, &header, &keys)?;
    drop(reference);

    let reconciler = Reconciler::new(&header, keys, RowDiffer::new(config.precision));
    let stats = reconciler.reconcile(&mut subject, &mut index, out)?;

    log::debug!(
        "reconciled {} subject rows against {} reference rows: \
         {} mismatched, {} only in reference, {} only in subject",
        stats.subject_rows,
        stats.reference_rows,
        stats.mismatched_keys,
        stats.only_in_reference,
        stats.only_in_subject
    );

    out.finish(&stats)?;
    Ok(stats)
}
