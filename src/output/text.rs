//! Line-oriented text report

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::{join_mismatches, Finding, ReconcileStats};

use super::{FileNames, OutputFormatter};

/// Width the parenthesised key is padded to
const KEY_WIDTH: usize = 30;

/// Text report, one `KEY: (...) => ...` line per finding
pub struct TextOutput<W> {
    writer: W,
    names: FileNames,
    summary: bool,
}

impl<W: WriteColor> TextOutput<W> {
    pub fn new(writer: W, names: FileNames) -> Self {
        Self {
            writer,
            names,
            summary: false,
        }
    }

    /// Append a totals block after the findings
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_summary(&mut self, stats: &ReconcileStats) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(
            w,
            "Summary: {} rows in {}, {} rows in {}",
            stats.reference_rows, self.names.reference, stats.subject_rows, self.names.subject
        )?;
        writeln!(w, "  Matched keys:    {}", stats.matched_keys)?;
        writeln!(w, "  Mismatched keys: {}", stats.mismatched_keys)?;
        writeln!(w, "  Only in {}: {}", self.names.reference, stats.only_in_reference)?;
        writeln!(w, "  Only in {}: {}", self.names.subject, stats.only_in_subject)?;
        if stats.duplicate_reference_keys > 0 {
            writeln!(w, "  Duplicate keys:  {}", stats.duplicate_reference_keys)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> OutputFormatter for TextOutput<W> {
    fn write_finding(&mut self, finding: &Finding) -> Result<()> {
        let (color, detail) = match finding {
            Finding::Mismatch { columns, .. } => (
                Color::Yellow,
                format!("Mismatched columns = {}", join_mismatches(columns)),
            ),
            Finding::OnlyInSubject { .. } => {
                (Color::Green, format!("Found only in {}", self.names.subject))
            }
            Finding::OnlyInReference { .. } => {
                (Color::Red, format!("Found only in {}", self.names.reference))
            }
        };

        let key = format!("({})", finding.key());
        write!(self.writer, "KEY: {:<width$} => ", key, width = KEY_WIDTH)?;
        self.writer.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.writer, "{}", detail)?;
        self.writer.reset()?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, stats: &ReconcileStats) -> Result<()> {
        if self.summary {
            self.write_summary(stats)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
