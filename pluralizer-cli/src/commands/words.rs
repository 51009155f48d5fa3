//! Single-shot transformations of words, phrases and numbers

use anyhow::Result;
use clap::Args;
use pluralizer_core::Pluralizer;
use std::io::Write;

/// Arguments for the noun command
#[derive(Debug, Args)]
pub struct NounArgs {
    /// Singular nouns
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Count the plural must agree with
    #[arg(short = 'n', long, default_value_t = 2, allow_negative_numbers = true)]
    pub count: i64,

    /// Also print the dictionary entry or rule that produced each form
    #[arg(short, long)]
    pub explain: bool,
}

impl NounArgs {
    /// Print the plural of each word
    pub fn run(&self, engine: &Pluralizer, out: &mut dyn Write) -> Result<()> {
        for word in &self.words {
            let inflection = engine.inflect_noun(word, self.count);
            if self.explain {
                writeln!(out, "{}\t{:?}", inflection.text, inflection.source)?;
            } else {
                writeln!(out, "{}", inflection.text)?;
            }
        }
        Ok(())
    }
}

/// Arguments for the phrase command
#[derive(Debug, Args)]
pub struct PhraseArgs {
    /// Singular noun phrase, e.g. "a bag of holding"
    pub phrase: String,

    /// Count to spell out in front of the phrase (negative omits it)
    #[arg(short = 'n', long, default_value_t = 2, allow_negative_numbers = true)]
    pub count: i64,
}

impl PhraseArgs {
    /// Print the counted plural phrase
    pub fn run(&self, engine: &Pluralizer, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", engine.noun_phrase(&self.phrase, self.count))?;
        Ok(())
    }
}

/// Arguments for the verb command
#[derive(Debug, Args)]
pub struct VerbArgs {
    /// Third-person singular verbs
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Also print the dictionary entry or rule that produced each form
    #[arg(short, long)]
    pub explain: bool,
}

impl VerbArgs {
    /// Print the agreement form of each verb
    pub fn run(&self, engine: &Pluralizer, out: &mut dyn Write) -> Result<()> {
        for word in &self.words {
            let inflection = engine.inflect_verb(word);
            if inflection.is_unmatched() {
                log::warn!("'{word}' matched no rule; consider adding it to a verb dictionary");
            }
            if self.explain {
                writeln!(out, "{}\t{:?}", inflection.text, inflection.source)?;
            } else {
                writeln!(out, "{}", inflection.text)?;
            }
        }
        Ok(())
    }
}

/// Arguments for the number command
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Integers to spell out
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}

impl NumberArgs {
    /// Print each number in words
    pub fn run(&self, engine: &Pluralizer, out: &mut dyn Write) -> Result<()> {
        for n in &self.numbers {
            writeln!(out, "{}", engine.spell(*n))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(f: impl FnOnce(&Pluralizer, &mut dyn Write) -> Result<()>) -> String {
        let engine = Pluralizer::new();
        let mut out = Vec::new();
        f(&engine, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_noun_command() {
        let args = NounArgs {
            words: vec!["knife".into(), "bus".into(), "sword".into()],
            count: 2,
            explain: false,
        };
        assert_eq!(
            run_to_string(|e, o| args.run(e, o)),
            "knives\nbuses\nswords\n"
        );
    }

    #[test]
    fn test_noun_command_explains() {
        let args = NounArgs {
            words: vec!["bus".into(), "city".into()],
            count: 3,
            explain: true,
        };
        let output = run_to_string(|e, o| args.run(e, o));
        assert!(output.contains("buses\tDictionary"));
        assert!(output.contains("cities\tRule(\"consonant-y\")"));
    }

    #[test]
    fn test_phrase_command() {
        let args = PhraseArgs {
            phrase: "a short sword".into(),
            count: 6,
        };
        assert_eq!(run_to_string(|e, o| args.run(e, o)), "six short swords\n");
    }

    #[test]
    fn test_verb_command() {
        let args = VerbArgs {
            words: vec!["catches".into(), "squigglfonox".into()],
            explain: false,
        };
        assert_eq!(
            run_to_string(|e, o| args.run(e, o)),
            "catch\nsquigglfonox\n"
        );
    }

    #[test]
    fn test_number_command() {
        let args = NumberArgs {
            numbers: vec![42, -5, 100],
        };
        assert_eq!(
            run_to_string(|e, o| args.run(e, o)),
            "forty-two\nminus five\n100\n"
        );
    }
}
