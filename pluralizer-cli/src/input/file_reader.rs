//! Line-oriented input reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One non-blank line of an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// 1-based line number in the file
    pub number: usize,
    /// Line content with surrounding whitespace removed
    pub text: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the non-blank, non-comment lines of a file
    ///
    /// Lines starting with `#` are skipped, matching the dictionary format.
    pub fn read_lines(path: &Path) -> Result<Vec<InputLine>> {
        let content = Self::read_text(path)?;
        Ok(Self::split_lines(&content))
    }

    /// Split already-read text the way [`FileReader::read_lines`] does
    pub fn split_lines(content: &str) -> Vec<InputLine> {
        content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let text = line.trim();
                (!text.is_empty() && !text.starts_with('#')).then(|| InputLine {
                    number: idx + 1,
                    text: text.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_skips_blank_and_comments() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("items.txt");
        fs::write(&file_path, "# loot\nsword\n\n  knife  \n").unwrap();

        let lines = FileReader::read_lines(&file_path).unwrap();
        assert_eq!(
            lines,
            vec![
                InputLine {
                    number: 2,
                    text: "sword".to_string()
                },
                InputLine {
                    number: 4,
                    text: "knife".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        assert!(FileReader::read_lines(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_utf8_lines() {
        let lines = FileReader::split_lines("épée\r\nniño\n");
        assert_eq!(lines[0].text, "épée");
        assert_eq!(lines[1].number, 2);
    }
}
