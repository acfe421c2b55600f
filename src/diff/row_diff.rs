//! Column-by-column comparison of aligned rows

use std::fmt;

use serde::Serialize;

use crate::model::{parse_numeric, HeaderRow};

/// A column whose values differ between the two files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMismatch {
    pub column: String,
    /// 1-based column position
    pub position: usize,
    pub reference_value: String,
    pub subject_value: String,
}

impl fmt::Display for ColumnMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.position)
    }
}

/// Row differ with a numeric tolerance
#[derive(Debug, Clone, Copy)]
pub struct RowDiffer {
    precision: f64,
}

impl RowDiffer {
    pub fn new(precision: f64) -> Self {
        Self { precision }
    }

    /// Compare two values
    ///
    /// Numeric pairs are equal when they differ by strictly less than the
    /// precision; anything else needs exact string equality.
    pub fn values_equal(&self, a: &str, b: &str) -> bool {
        match (parse_numeric(a), parse_numeric(b)) {
            (Some(x), Some(y)) => (x - y).abs() < self.precision,
            _ => a == b,
        }
    }

    /// List the mismatched columns of two rows aligned to `header`
    pub fn diff(
        &self,
        header: &HeaderRow,
        subject: &[String],
        reference: &[String],
    ) -> Vec<ColumnMismatch> {
        header
            .iter()
            .zip(subject.iter().zip(reference))
            .enumerate()
            .filter(|(_, (_, (s, r)))| !self.values_equal(s, r))
            .map(|(i, (column, (s, r)))| ColumnMismatch {
                column: column.name().to_string(),
                position: i + 1,
                reference_value: r.clone(),
                subject_value: s.clone(),
            })
            .collect()
    }
}

/// Join mismatches for display, e.g. `score:3,name:2`
pub fn join_mismatches(mismatches: &[ColumnMismatch]) -> String {
    mismatches
        .iter()
        .map(ColumnMismatch::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
