//! Configuration handling for keydiff

use std::path::PathBuf;

use indexmap::IndexSet;
use termcolor::ColorChoice;

use crate::error::{ReconError, Result};
use crate::model::parse_numeric;

/// Tolerance used for numeric columns when none is given
pub const DEFAULT_PRECISION: f64 = 0.01;

/// Output format for the comparison report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// File indexed into memory (the first file given)
    pub reference_file: PathBuf,
    /// File streamed against the index (the second file given)
    pub subject_file: PathBuf,
    /// Columns forming the composite key, in request order
    pub key_columns: Vec<String>,
    /// Columns ignored during comparison
    pub exclude_columns: Vec<String>,
    /// Numeric pairs differing by at least this much are mismatches
    pub precision: f64,
    /// Field delimiter, also used to join composite key components
    pub delimiter: u8,
    /// Output format
    pub output_format: OutputFormat,
    /// Color choice for text output
    pub color: ColorChoice,
    /// Append reconciliation totals to the report
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_file: PathBuf::new(),
            subject_file: PathBuf::new(),
            key_columns: Vec::new(),
            exclude_columns: Vec::new(),
            precision: DEFAULT_PRECISION,
            delimiter: b',',
            output_format: OutputFormat::default(),
            color: ColorChoice::Never,
            summary: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(reference_file: PathBuf, subject_file: PathBuf) -> Self {
        Self {
            reference_file,
            subject_file,
            ..Default::default()
        }
    }

    /// Build a Config from the raw comma-separated argument lists
    ///
    /// Checks run in a fixed order and the first failure wins: file names,
    /// key names, precision, exclude names, key/exclude overlap, file count.
    pub fn from_lists(
        files: &str,
        keys: Option<&str>,
        precision: Option<&str>,
        exclude: Option<&str>,
    ) -> Result<Self> {
        let files = split_list(files, ReconError::InvalidFileName)?;
        let keys: IndexSet<String> = keys
            .map(|k| split_list(k, ReconError::InvalidKeyName))
            .transpose()?
            .unwrap_or_default()
            .into_iter()
            .collect();
        let precision = match precision {
            Some(raw) => parse_numeric(raw)
                .ok_or_else(|| ReconError::InvalidPrecisionValue(raw.to_string()))?,
            None => DEFAULT_PRECISION,
        };
        let exclude: IndexSet<String> = exclude
            .map(|x| split_list(x, ReconError::InvalidExcludeName))
            .transpose()?
            .unwrap_or_default()
            .into_iter()
            .collect();

        if let Some(overlap) = keys.iter().find(|k| exclude.contains(*k)) {
            return Err(ReconError::KeyExcludeOverlap(overlap.clone()));
        }

        let [reference, subject]: [String; 2] = files
            .try_into()
            .map_err(|files: Vec<String>| ReconError::WrongFileCount(files.len()))?;

        Ok(Self::new(reference.into(), subject.into())
            .with_key_columns(keys.into_iter().collect())
            .with_exclude_columns(exclude.into_iter().collect())
            .with_precision(precision))
    }

    /// Set key columns for row matching
    pub fn with_key_columns(mut self, keys: Vec<String>) -> Self {
        self.key_columns = keys;
        self
    }

    /// Set columns to ignore
    pub fn with_exclude_columns(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Set numeric tolerance
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set color choice for text output
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Enable the totals block
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Separator joining composite key components
    pub fn key_separator(&self) -> char {
        char::from(self.delimiter)
    }
}

/// Parse a single-character delimiter argument
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw.as_bytes() {
        [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => Err(ReconError::InvalidArgumentShape(format!(
            "delimiter must be a single ASCII character, got '{}'",
            raw
        ))),
    }
}

/// Split a comma-separated list, rejecting empty names and names starting with '-'
fn split_list(raw: &str, invalid: fn(String) -> ReconError) -> Result<Vec<String>> {
    raw.split(',')
        .map(|item| {
            if item.is_empty() || item.starts_with('-') {
                Err(invalid(item.to_string()))
            } else {
                Ok(item.to_string())
            }
        })
        .collect()
}
