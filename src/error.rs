//! Error types for doxycheck
//!
//! Library code returns `DoxycheckError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for doxycheck operations
pub type DoxycheckResult<T> = Result<T, DoxycheckError>;

/// Main error type for doxycheck operations
#[derive(Error, Debug)]
pub enum DoxycheckError {
    /// A file passed on the command line does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// An exclusion pattern failed to compile
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// An extra Doxyfile override would not survive as one `KEY=VALUE` line
    #[error("invalid Doxyfile override '{key}': {message}")]
    InvalidOverride { key: String, message: String },

    /// The generator ran but left no warning log behind
    #[error("doxygen wrote no warning log to {path} (does the Doxyfile end with a newline?)")]
    MissingWarningLog { path: PathBuf },

    /// Input mode checks exactly one file
    #[error("input mode checks exactly one file, got {count}")]
    InputModeArity { count: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DoxycheckError {
    /// Configuration problems are reported with the usage exit code.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            DoxycheckError::InvalidPattern { .. }
                | DoxycheckError::InvalidSettings { .. }
                | DoxycheckError::InvalidOverride { .. }
                | DoxycheckError::InputModeArity { .. }
        )
    }
}
