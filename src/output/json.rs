//! JSON lines output format

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::diff::{ColumnMismatch, Finding, ReconcileStats};

use super::{FileNames, OutputFormatter};

/// JSON output formatter writing one object per line
pub struct JsonOutput<W> {
    writer: W,
    names: FileNames,
    summary: bool,
}

/// Serializable finding for JSON output
#[derive(Serialize)]
struct JsonFinding<'a> {
    #[serde(rename = "type")]
    finding_type: &'static str,
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject_line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    columns: Option<&'a [ColumnMismatch]>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    reference_file: &'a str,
    subject_file: &'a str,
    #[serde(flatten)]
    stats: &'a ReconcileStats,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W, names: FileNames) -> Self {
        Self {
            writer,
            names,
            summary: false,
        }
    }

    /// Emit a final summary record
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn write_line<W: Write, T: Serialize>(writer: &mut W, record: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, record)?;
    writeln!(writer)?;
    Ok(())
}

impl<W: Write> OutputFormatter for JsonOutput<W> {
    fn write_finding(&mut self, finding: &Finding) -> Result<()> {
        let record = match finding {
            Finding::Mismatch {
                key,
                columns,
                reference_line,
                subject_line,
            } => JsonFinding {
                finding_type: "mismatch",
                key: key.as_str(),
                file: None,
                reference_line: Some(*reference_line),
                subject_line: Some(*subject_line),
                columns: Some(columns.as_slice()),
            },
            Finding::OnlyInSubject { key, subject_line } => JsonFinding {
                finding_type: "only_in_subject",
                key: key.as_str(),
                file: Some(self.names.subject.as_str()),
                reference_line: None,
                subject_line: Some(*subject_line),
                columns: None,
            },
            Finding::OnlyInReference {
                key,
                reference_line,
            } => JsonFinding {
                finding_type: "only_in_reference",
                key: key.as_str(),
                file: Some(self.names.reference.as_str()),
                reference_line: Some(*reference_line),
                subject_line: None,
                columns: None,
            },
        };
        write_line(&mut self.writer, &record)
    }

    fn finish(&mut self, stats: &ReconcileStats) -> Result<()> {
        if self.summary {
            let record = JsonSummary {
                record_type: "summary",
                reference_file: &self.names.reference,
                subject_file: &self.names.subject,
                stats,
            };
            write_line(&mut self.writer, &record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
