//! Error types for the lexical front end.
//!
//! Only conditions that stop a phase outright are errors here. Everything
//! recoverable goes to the [`Handler`](vlark_util::Handler) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The source could not be turned into a line buffer
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("cannot read `{}`: {source}", path.display())]
    Open {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A physical line is longer than the configured maximum
    #[error("line {line} is {length} characters long (maximum is {max})")]
    LineTooLong {
        /// 1-based line number
        line: u32,
        /// Length of the offending line
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Tokenizing could not start
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// The classified-line sequence is empty
    #[error("source is empty")]
    EmptySource,
}

/// Invalid adjustment of a finished token
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// A column shift would move the token before column 1
    #[error("shifting column {column} by {offset} leaves the line")]
    ColumnUnderflow {
        /// Column before the shift
        column: u32,
        /// Requested shift
        offset: i32,
    },
}

/// Result type alias for loading sources
pub type LoadResult<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::Open {
            path: PathBuf::from("missing.vhd"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read `missing.vhd`: not found");

        let err = LoadError::LineTooLong {
            line: 3,
            length: 5000,
            max: 4096,
        };
        assert_eq!(
            err.to_string(),
            "line 3 is 5000 characters long (maximum is 4096)"
        );
    }

    #[test]
    fn test_tokenize_error_display() {
        assert_eq!(TokenizeError::EmptySource.to_string(), "source is empty");
    }
}
