//! Process command implementation

use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, Record, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use pluralizer_core::Pluralizer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// What each input line holds
    #[arg(short, long, value_enum, default_value = "noun")]
    pub kind: LineKind,

    /// Count the output must agree with
    #[arg(short = 'n', long, default_value_t = 2, allow_negative_numbers = true)]
    pub count: i64,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one result per line
    Text,
    /// JSON array of results with line numbers and rule sources
    Json,
    /// Markdown table of inputs and results
    Markdown,
}

/// Interpretation of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LineKind {
    /// A single singular noun
    Noun,
    /// A noun phrase, counted and pluralized as a whole
    Phrase,
    /// A third-person singular verb
    Verb,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, engine: &Pluralizer, quiet: bool) -> Result<()> {
        log::info!("Starting line processing");
        log::debug!("Arguments: {self:?}");

        let files = resolve_patterns(&self.input)?;
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(self.format, writer);

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let mut total = 0;
        for path in &files {
            let lines = FileReader::read_lines(path)?;
            let file = path.display().to_string();
            for line in &lines {
                formatter.format_record(&self.transform(engine, &file, line.number, &line.text))?;
            }
            total += lines.len();
            progress.file_completed(&file, lines.len());
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Processed {total} lines from {} files", files.len());

        Ok(())
    }

    /// Transform one line according to `kind`
    pub fn transform(&self, engine: &Pluralizer, file: &str, line: usize, text: &str) -> Record {
        let (output, source) = match self.kind {
            LineKind::Noun => {
                let inflection = engine.inflect_noun(text, self.count);
                (inflection.text, Some(inflection.source))
            }
            LineKind::Phrase => (engine.noun_phrase(text, self.count), None),
            LineKind::Verb => {
                let inflection = engine.inflect_verb(text);
                if inflection.is_unmatched() {
                    log::warn!("{file}:{line}: '{text}' matched no verb rule");
                }
                (inflection.text, Some(inflection.source))
            }
        };

        Record {
            file: file.to_string(),
            line,
            input: text.to_string(),
            output,
            source,
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
