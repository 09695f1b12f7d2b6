//! Error handling module for the vlark CLI.
//!
//! Front-end failures are reported per file and never become a
//! `CliError`; these errors stop the tool before any file is read.

use thiserror::Error;

/// Main error type for the vlark CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input path cannot be used as a source file.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// The command line is inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
