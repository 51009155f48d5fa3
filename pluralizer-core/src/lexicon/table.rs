//! Case-folded singular → alternate-form table

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Irregular-form table
///
/// Keys and values are lower-cased on insertion and queries are lower-cased
/// before lookup, so lookups are case-insensitive. A missing entry is not an
/// error; it tells the caller to fall through to its rule cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularTable {
    entries: HashMap<String, String>,
}

impl IrregularTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dictionary text, skipping malformed lines
    ///
    /// Each line holds `singular plural` separated by whitespace. Blank lines
    /// and lines starting with `#` are ignored.
    pub fn parse(content: &str) -> Self {
        let mut table = Self::new();
        for (line_no, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(Some((singular, plural))) => table.insert(singular, plural),
                Ok(None) => {}
                Err(_) => {
                    log::warn!(
                        "Skipping malformed dictionary line {}: {:?}",
                        line_no + 1,
                        line.trim()
                    );
                }
            }
        }
        table
    }

    /// Parse dictionary text, rejecting the first malformed line
    pub fn parse_strict(content: &str) -> Result<Self> {
        let mut table = Self::new();
        for (line_no, line) in content.lines().enumerate() {
            let entry = parse_line(line).map_err(|()| Error::MalformedEntry {
                line: line_no + 1,
                content: line.trim().to_string(),
            })?;
            if let Some((singular, plural)) = entry {
                table.insert(singular, plural);
            }
        }
        Ok(table)
    }

    /// Read and leniently parse a dictionary file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&content);
        log::debug!(
            "loaded {} irregular forms from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Read a dictionary file, degrading to an empty table on failure
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("{e}; continuing with an empty table");
                Self::new()
            }
        }
    }

    /// Insert one pair, replacing any previous mapping for `singular`
    pub fn insert(&mut self, singular: &str, plural: &str) {
        self.entries
            .insert(singular.to_lowercase(), plural.to_lowercase());
    }

    /// Merge `other` into this table; entries of `other` win
    pub fn extend(&mut self, other: IrregularTable) {
        self.entries.extend(other.entries);
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Whether `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(singular, plural)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for IrregularTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (singular, plural) in iter {
            table.insert(singular, plural);
        }
        table
    }
}

/// `Ok(None)` for blank and comment lines, `Err(())` for malformed ones
fn parse_line(line: &str) -> std::result::Result<Option<(&str, &str)>, ()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(singular), Some(plural), None) => Ok(Some((singular, plural))),
        _ => Err(()),
    }
}
