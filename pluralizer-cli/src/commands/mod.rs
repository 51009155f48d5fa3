//! CLI command implementations

use crate::config::EngineArgs;
use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

pub mod generate_config;
pub mod list;
pub mod option;
pub mod process;
pub mod pronouns;
pub mod validate;
pub mod words;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pluralize single nouns
    Noun(words::NounArgs),

    /// Pluralize a noun phrase and spell out its count
    Phrase(words::PhraseArgs),

    /// Turn third-person singular verbs into their plural-subject form
    Verb(words::VerbArgs),

    /// Spell integers in words
    Number(words::NumberArgs),

    /// Select one choice from an alternatives expression
    #[command(name = "option")]
    Choose(option::OptionArgs),

    /// Resolve the verb form of an alternatives expression
    VerbOption(option::VerbOptionArgs),

    /// Show the pronoun tables
    Pronouns(pronouns::PronounsArgs),

    /// Transform every line of text files
    Process(process::ProcessArgs),

    /// Strictly check dictionary files
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the command, building an engine only when it needs one
    pub fn execute(&self, engine_args: &EngineArgs, quiet: bool) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self {
            Commands::Noun(args) => args.run(&engine_args.build_engine()?, &mut out)?,
            Commands::Phrase(args) => args.run(&engine_args.build_engine()?, &mut out)?,
            Commands::Verb(args) => args.run(&engine_args.build_engine()?, &mut out)?,
            Commands::Number(args) => args.run(&engine_args.build_engine()?, &mut out)?,
            Commands::Choose(args) => args.run(&engine_args.build_engine()?, &mut out)?,
            Commands::VerbOption(args) => args.run(&engine_args.build_engine()?, &mut out)?,
            Commands::Pronouns(args) => args.run(&mut out)?,
            Commands::Process(args) => {
                drop(out);
                let engine = engine_args.build_engine()?;
                args.execute(&engine, quiet)?;
                engine.release();
                return Ok(());
            }
            Commands::Validate(args) => args.run(&mut out)?,
            Commands::GenerateConfig(args) => args.run(&engine_args.load_config()?, &mut out)?,
            Commands::List { subcommand } => subcommand.run(&mut out)?,
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Commands {
        TestCli::try_parse_from(std::iter::once("pluralize").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_noun_with_negative_count() {
        match parse(&["noun", "sword", "-n", "-3"]) {
            Commands::Noun(args) => {
                assert_eq!(args.words, vec!["sword"]);
                assert_eq!(args.count, -3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_verb_option_gender() {
        match parse(&["verb-option", "(eats)", "--gender", "plural"]) {
            Commands::VerbOption(args) => {
                assert_eq!(args.gender, Some(pluralizer_core::Gender::Plural));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_process_defaults() {
        match parse(&["process", "-i", "*.txt"]) {
            Commands::Process(args) => {
                assert_eq!(args.kind, process::LineKind::Noun);
                assert_eq!(args.format, process::OutputFormat::Text);
                assert_eq!(args.count, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list() {
        assert!(matches!(
            parse(&["list", "rules"]),
            Commands::List {
                subcommand: ListCommands::Rules
            }
        ));
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let result = TestCli::try_parse_from(["pluralize", "pronouns", "--gender", "robot"]);
        assert!(result.is_err());
    }
}
