//! Output formatting for reconciliation findings

mod json;
mod text;

use std::io::{self, BufWriter};

use anyhow::Result;
use termcolor::BufferedStandardStream;

use crate::config::{Config, OutputFormat};
use crate::diff::{Finding, ReconcileStats};

pub use json::JsonOutput;
pub use text::TextOutput;

/// Trait for output formatters
///
/// Findings arrive one at a time while the subject file is streamed.
pub trait OutputFormatter {
    /// Write a single finding
    fn write_finding(&mut self, finding: &Finding) -> Result<()>;

    /// Called once after the last finding
    fn finish(&mut self, stats: &ReconcileStats) -> Result<()>;
}

/// Display names of the compared files
#[derive(Debug, Clone)]
pub struct FileNames {
    pub reference: String,
    pub subject: String,
}

impl FileNames {
    pub fn new(reference: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            subject: subject.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.reference_file.display().to_string(),
            config.subject_file.display().to_string(),
        )
    }
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create a formatter writing to stdout
    pub fn stdout(config: &Config) -> Box<dyn OutputFormatter> {
        let names = FileNames::from_config(config);
        match config.output_format {
            OutputFormat::Text => Box::new(
                TextOutput::new(BufferedStandardStream::stdout(config.color), names)
                    .with_summary(config.summary),
            ),
            OutputFormat::Json => Box::new(
                JsonOutput::new(BufWriter::new(io::stdout()), names).with_summary(config.summary),
            ),
        }
    }
}
