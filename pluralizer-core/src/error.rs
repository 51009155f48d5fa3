//! Error types for table loading and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Lexicon`](crate::Lexicon) or a
/// [`Config`](crate::Config).
///
/// The transformers themselves never fail; only construction does.
#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary or configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A dictionary line is not a `singular plural` pair
    #[error("Malformed entry on line {line}: {content:?}")]
    MalformedEntry {
        /// 1-based line number
        line: usize,
        /// Offending line, trimmed
        content: String,
    },

    /// Invalid configuration value or unparsable TOML
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for fallible construction
pub type Result<T> = std::result::Result<T, Error>;
