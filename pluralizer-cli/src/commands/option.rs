//! Alternatives expressions such as `is:are` or `(eats)`

use anyhow::Result;
use clap::Args;
use pluralizer_core::{Gender, Pluralizer, Selection};
use std::io::Write;

/// Arguments for the option command
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// Expression followed by any remaining text
    pub expr: String,

    /// Choice to select, starting at 0
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Buffer capacity (defaults to the configured option capacity)
    #[arg(long, value_name = "K")]
    pub capacity: Option<usize>,
}

impl OptionArgs {
    /// Print the selected choice and the bytes consumed
    pub fn run(&self, engine: &Pluralizer, out: &mut dyn Write) -> Result<()> {
        let capacity = self.capacity.unwrap_or(engine.limits().option_capacity);
        let selection = pluralizer_core::parse_option(&self.expr, self.index, capacity);
        write_selection(out, &self.expr, &selection)
    }
}

/// Arguments for the verb-option command
#[derive(Debug, Args)]
pub struct VerbOptionArgs {
    /// Expression followed by any remaining text, e.g. "(eats) with gusto"
    pub expr: String,

    /// Grammatical gender of the subject (neutral, masculine, feminine, plural or 0-3)
    #[arg(short, long, conflicts_with = "plurality")]
    pub gender: Option<Gender>,

    /// Choice index to request directly (0 singular, 1 plural)
    #[arg(short, long, default_value_t = 1)]
    pub plurality: usize,
}

impl VerbOptionArgs {
    /// Print the verb form and the bytes consumed
    pub fn run(&self, engine: &Pluralizer, out: &mut dyn Write) -> Result<()> {
        let selection = match self.gender {
            Some(gender) => engine.verb_option_for(&self.expr, gender),
            None => engine.verb_option(&self.expr, self.plurality),
        };
        write_selection(out, &self.expr, &selection)
    }
}

fn write_selection(out: &mut dyn Write, src: &str, selection: &Selection) -> Result<()> {
    writeln!(out, "{}", selection.text)?;
    writeln!(out, "consumed: {}", selection.consumed)?;
    log::debug!("remainder: {:?}", selection.remainder(src));
    Ok(())
}
