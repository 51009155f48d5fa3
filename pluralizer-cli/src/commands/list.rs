//! Listing of rule cascades and output formats

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use pluralizer_core::{SuffixRule, NOUN_RULES, VERB_RULES};
use std::io::Write;

use super::process::OutputFormat;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the noun and verb rule cascades in evaluation order
    Rules,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            ListCommands::Rules => {
                write_rules(out, "Noun rules", NOUN_RULES)?;
                writeln!(out)?;
                write_rules(out, "Verb rules", VERB_RULES)?;
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        writeln!(
                            out,
                            "  {:<10} {}",
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_rules(out: &mut dyn Write, title: &str, rules: &[SuffixRule]) -> Result<()> {
    writeln!(out, "{title} (dictionary first, then first match wins):")?;
    for (position, rule) in rules.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<14} {}",
            position + 1,
            rule.name,
            rule.description
        )?;
    }
    Ok(())
}
