//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use pluralizer_core::Config;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Write a commented template seeded from `config`
    pub fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        std::fs::write(&self.output, generate_template(config))
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        writeln!(out, "✓ Configuration template written to {}", self.output.display())?;
        writeln!(out)?;
        writeln!(out, "Use it with:")?;
        writeln!(
            out,
            "   pluralize --config {} noun sword",
            self.output.display()
        )?;
        Ok(())
    }
}

fn path_line(key: &str, path: Option<&Path>, example: &str) -> String {
    match path {
        Some(path) => format!(
            "{key} = {}",
            toml::Value::String(path.display().to_string())
        ),
        None => format!("# {key} = \"{example}\""),
    }
}

/// Template configuration content
pub fn generate_template(config: &Config) -> String {
    format!(
        r#"# Pluralizer configuration

[lexicon]
# Seed the tables with the built-in irregular forms
builtin = {builtin}

# Extra dictionaries: one `singular plural` pair per line, `#` starts a
# comment. Entries override the built-in ones. Relative paths are resolved
# against this file's directory.
{nouns}
{verbs}

[limits]
# Capacity of the noun-phrase output; longer results are truncated
max_phrase_len = {max_phrase_len}

# Capacity used when selecting a choice from an alternatives expression
option_capacity = {option_capacity}
"#,
        builtin = config.lexicon.builtin,
        nouns = path_line("nouns", config.lexicon.nouns.as_deref(), "plural_nouns.txt"),
        verbs = path_line("verbs", config.lexicon.verbs.as_deref(), "plural_verbs.txt"),
        max_phrase_len = config.limits.max_phrase_len,
        option_capacity = config.limits.option_capacity,
    )
}
