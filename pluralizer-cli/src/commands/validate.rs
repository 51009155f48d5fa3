//! Validate command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use pluralizer_core::IrregularTable;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dictionary files to check (`singular plural` per line)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: Vec<PathBuf>,
}

impl ValidateArgs {
    /// Strictly parse every dictionary, stopping at the first bad one
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        for path in &self.dictionary {
            writeln!(out, "Validating dictionary: {}", path.display())?;

            let content = FileReader::read_text(path)?;
            match IrregularTable::parse_strict(&content) {
                Ok(table) => {
                    writeln!(out, "✓ Dictionary is valid!")?;
                    writeln!(out, "  Entries: {}", table.len())?;
                }
                Err(e) => {
                    writeln!(out, "✗ Dictionary is invalid!")?;
                    writeln!(out, "  Error: {e}")?;
                    return Err(CliError::InvalidDictionary(format!("{}: {e}", path.display()))
                        .into());
                }
            }
        }
        Ok(())
    }
}
