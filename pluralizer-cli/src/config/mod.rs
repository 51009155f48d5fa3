//! Engine configuration from the command line
//!
//! A TOML file given with `--config` (or `PLURALIZE_CONFIG`) is loaded first;
//! the dictionary flags then override what it says.

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use pluralizer_core::{Config, Pluralizer};
use std::path::PathBuf;

/// Flags shared by every subcommand that builds an engine
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true, env = "PLURALIZE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra noun dictionary (`singular plural` per line)
    #[arg(long, value_name = "FILE", global = true)]
    pub nouns: Option<PathBuf>,

    /// Extra verb dictionary (`singular plural` per line)
    #[arg(long, value_name = "FILE", global = true)]
    pub verbs: Option<PathBuf>,

    /// Do not load the built-in dictionaries
    #[arg(long, global = true)]
    pub no_builtin: bool,
}

impl EngineArgs {
    /// Resolve the configuration file and flag overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Config::from_file(path).map_err(|e| CliError::ConfigError(e.to_string()))?
            }
            None => Config::default(),
        };

        if self.no_builtin {
            config.lexicon.builtin = false;
        }
        if let Some(path) = &self.nouns {
            config.lexicon.nouns = Some(path.clone());
        }
        if let Some(path) = &self.verbs {
            config.lexicon.verbs = Some(path.clone());
        }

        log::debug!("Effective configuration: {config:?}");
        Ok(config)
    }

    /// Build the engine described by the flags
    pub fn build_engine(&self) -> Result<Pluralizer> {
        let config = self.load_config()?;
        let engine =
            Pluralizer::with_config(&config).map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::info!(
            "Lexicon ready: {} nouns, {} verbs",
            engine.lexicon().nouns().len(),
            engine.lexicon().verbs().len()
        );
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_use_builtin_tables() {
        let engine = EngineArgs::default().build_engine().unwrap();
        assert_eq!(engine.noun("person", 2), "people");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("pluralizer.toml");
        fs::write(&config_path, "[lexicon]\nbuiltin = true\n").unwrap();
        let nouns = dir.path().join("nouns.txt");
        fs::write(&nouns, "cyclops cyclopes\n").unwrap();

        let args = EngineArgs {
            config: Some(config_path),
            nouns: Some(nouns),
            verbs: None,
            no_builtin: true,
        };

        let engine = args.build_engine().unwrap();
        assert_eq!(engine.noun("cyclops", 2), "cyclopes");
        assert_eq!(engine.noun("person", 2), "persons");
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.toml");
        fs::write(&config_path, "[limits]\nmax_phrase_len = 0\n").unwrap();

        let args = EngineArgs {
            config: Some(config_path),
            ..Default::default()
        };

        let err = args.build_engine().unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("max_phrase_len"));
    }
}
