//! Markdown output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs a two-column table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        if self.record_count == 0 {
            writeln!(self.writer, "| Input | Output |")?;
            writeln!(self.writer, "|-------|--------|")?;
        }
        self.record_count += 1;
        writeln!(
            self.writer,
            "| {} | {} |",
            escape_cell(&record.input),
            escape_cell(&record.output)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total entries: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
