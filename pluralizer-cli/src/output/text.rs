//! Plain text output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one result per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{}", record.output)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{record, SharedBuffer};

    #[test]
    fn test_one_line_per_record() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());

        formatter.format_record(&record("sword", "swords", 1)).unwrap();
        formatter.format_record(&record("knife", "knives", 2)).unwrap();
        formatter.finish().unwrap();

        assert_eq!(buffer.contents(), "swords\nknives\n");
    }
}
