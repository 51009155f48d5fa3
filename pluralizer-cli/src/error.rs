//! Error handling for the CLI application

use std::fmt;

/// User-facing failures raised by the CLI itself
#[derive(Debug)]
pub enum CliError {
    /// No input file matched
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration could not be loaded
    ConfigError(String),
    /// A dictionary file failed strict validation
    InvalidDictionary(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidDictionary(msg) => write!(f, "Invalid dictionary: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("items.txt".to_string()).to_string(),
            "File not found: items.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[bad".to_string()).to_string(),
            "Invalid file pattern: [bad"
        );
        assert_eq!(
            CliError::ConfigError("option_capacity must be greater than 0".to_string())
                .to_string(),
            "Configuration error: option_capacity must be greater than 0"
        );
        assert_eq!(
            CliError::InvalidDictionary("line 2".to_string()).to_string(),
            "Invalid dictionary: line 2"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("x.txt".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("x.txt"));
    }
}
