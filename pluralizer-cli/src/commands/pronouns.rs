//! Pronoun tables by grammatical gender

use anyhow::Result;
use clap::Args;
use pluralizer_core::Gender;
use std::io::Write;

/// Arguments for the pronouns command
#[derive(Debug, Args)]
pub struct PronounsArgs {
    /// Only show this gender (neutral, masculine, feminine, plural or 0-3)
    #[arg(short, long)]
    pub gender: Option<Gender>,
}

impl PronounsArgs {
    /// Print one row per gender
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        let genders = match self.gender {
            Some(gender) => vec![gender],
            None => Gender::ALL.to_vec(),
        };

        writeln!(
            out,
            "{:<4} {:<10} {:<8} {:<8} {:<12} {:<10} {:<10}",
            "code", "gender", "subject", "object", "determiner", "possessive", "reflexive"
        )?;
        for gender in genders {
            writeln!(
                out,
                "{:<4} {:<10} {:<8} {:<8} {:<12} {:<10} {:<10}",
                gender.code(),
                gender.name(),
                gender.personal_pronoun(),
                gender.objective_pronoun(),
                gender.possessive_determiner(),
                gender.possessive_pronoun(),
                gender.reflexive_pronoun()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_genders() {
        let mut out = Vec::new();
        PronounsArgs { gender: None }.run(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(output.lines().count(), 5);
        assert!(output.contains("themselves"));
        assert!(output.contains("herself"));
    }

    #[test]
    fn test_single_gender() {
        let mut out = Vec::new();
        PronounsArgs {
            gender: Some(Gender::Masculine),
        }
        .run(&mut out)
        .unwrap();
        let output = String::from_utf8(out).unwrap();

        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("1    masculine"));
        assert!(row.contains("himself"));
        assert_eq!(output.lines().count(), 2);
    }
}
