//! Engine configuration
//!
//! A [`Config`] names the dictionary sources and the buffer limits. It can be
//! built in code with [`ConfigBuilder`] or read from TOML:
//!
//! ```toml
//! [lexicon]
//! builtin = true
//! nouns = "plural_nouns.txt"
//! verbs = "plural_verbs.txt"
//!
//! [limits]
//! max_phrase_len = 4096
//! option_capacity = 256
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Capacity of the noun-phrase output buffer
    pub const MAX_PHRASE_LEN: usize = 4096;

    /// Capacity used for option parsing when the caller does not give one
    pub const OPTION_CAPACITY: usize = 256;
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the irregular-form tables come from
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Output buffer limits
    #[serde(default)]
    pub limits: Limits,
}

/// Dictionary sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Seed the tables with the embedded dictionaries
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Extra noun dictionary; its entries override the embedded ones
    #[serde(default)]
    pub nouns: Option<PathBuf>,

    /// Extra verb dictionary; its entries override the embedded ones
    #[serde(default)]
    pub verbs: Option<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            nouns: None,
            verbs: None,
        }
    }
}

/// Output buffer limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Capacity of the noun-phrase output buffer
    #[serde(default = "default_max_phrase_len")]
    pub max_phrase_len: usize,

    /// Default capacity for option parsing
    #[serde(default = "default_option_capacity")]
    pub option_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_phrase_len: defaults::MAX_PHRASE_LEN,
            option_capacity: defaults::OPTION_CAPACITY,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_phrase_len() -> usize {
    defaults::MAX_PHRASE_LEN
}

fn default_option_capacity() -> usize {
    defaults::OPTION_CAPACITY
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// Relative dictionary paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            config.lexicon.nouns = config.lexicon.nouns.map(|p| rebase(base, p));
            config.lexicon.verbs = config.lexicon.verbs.map(|p| rebase(base, p));
        }

        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Configuration(format!("Failed to serialize config: {e}")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_phrase_len == 0 {
            return Err(Error::Configuration(
                "max_phrase_len must be greater than 0".into(),
            ));
        }

        if self.limits.option_capacity == 0 {
            return Err(Error::Configuration(
                "option_capacity must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    builtin: Option<bool>,
    nouns: Option<PathBuf>,
    verbs: Option<PathBuf>,
    max_phrase_len: Option<usize>,
    option_capacity: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the embedded dictionaries
    pub fn builtin(mut self, enabled: bool) -> Self {
        self.builtin = Some(enabled);
        self
    }

    /// Add a noun dictionary file
    pub fn nouns(mut self, path: impl Into<PathBuf>) -> Self {
        self.nouns = Some(path.into());
        self
    }

    /// Add a verb dictionary file
    pub fn verbs(mut self, path: impl Into<PathBuf>) -> Self {
        self.verbs = Some(path.into());
        self
    }

    /// Set the noun-phrase buffer capacity
    pub fn max_phrase_len(mut self, len: usize) -> Self {
        self.max_phrase_len = Some(len);
        self
    }

    /// Set the default option-parsing capacity
    pub fn option_capacity(mut self, capacity: usize) -> Self {
        self.option_capacity = Some(capacity);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(builtin) = self.builtin {
            config.lexicon.builtin = builtin;
        }
        config.lexicon.nouns = self.nouns;
        config.lexicon.verbs = self.verbs;

        if let Some(len) = self.max_phrase_len {
            config.limits.max_phrase_len = len;
        }

        if let Some(capacity) = self.option_capacity {
            config.limits.option_capacity = capacity;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.lexicon.builtin);
        assert!(config.lexicon.nouns.is_none());
        assert_eq!(config.limits.max_phrase_len, 4096);
        assert_eq!(config.limits.option_capacity, 256);
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .builtin(false)
            .nouns("nouns.txt")
            .max_phrase_len(64)
            .build()
            .unwrap();

        assert!(!config.lexicon.builtin);
        assert_eq!(config.lexicon.nouns, Some(PathBuf::from("nouns.txt")));
        assert_eq!(config.lexicon.verbs, None);
        assert_eq!(config.limits.max_phrase_len, 64);
        assert_eq!(config.limits.option_capacity, 256);
    }

    #[test]
    fn test_builder_rejects_zero_limits() {
        assert!(matches!(
            Config::builder().max_phrase_len(0).build(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Config::builder().option_capacity(0).build(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_from_toml_partial_sections() {
        let config = Config::from_toml_str(
            r#"
            [lexicon]
            verbs = "extra_verbs.txt"
            "#,
        )
        .unwrap();

        assert!(config.lexicon.builtin);
        assert_eq!(config.lexicon.verbs, Some(PathBuf::from("extra_verbs.txt")));
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = Config::from_toml_str("[limits]\nmax_phrase_len = \"big\"\n");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_file_rebases_relative_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pluralizer.toml");
        std::fs::write(&path, "[lexicon]\nnouns = \"nouns.txt\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.lexicon.nouns, Some(dir.path().join("nouns.txt")));
    }

    #[test]
    fn test_toml_roundtrip_keeps_limits() {
        let config = Config::builder().option_capacity(32).build().unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
