//! Output formatting module

use anyhow::Result;
use pluralizer_core::Source;
use serde::Serialize;

/// One transformed input line
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// File the line came from
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// Text as read
    pub input: String,
    /// Transformed text
    pub output: String,
    /// How the output was chosen, when a single word was inflected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single record
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
