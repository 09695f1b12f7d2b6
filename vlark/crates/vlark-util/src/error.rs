//! Core error types for the vlark-util crate

use thiserror::Error;

/// Error type for index vector operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexVecError {
    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    OutOfBounds {
        /// The rejected index
        index: usize,
        /// Length of the vector
        length: usize,
    },
}

/// Error type for diagnostic rendering
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// A diagnostic points at a line the source does not have
    #[error("Diagnostic refers to line {line}, source has {max_lines} lines")]
    LineOutOfRange {
        /// Line the diagnostic points at
        line: u32,
        /// Number of lines in the source
        max_lines: usize,
    },

    /// Writing rendered diagnostics failed
    #[error("Failed to write diagnostic: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Result type alias for index vector operations
pub type IndexVecResult<T> = std::result::Result<T, IndexVecError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IndexVecError::OutOfBounds { index: 4, length: 2 };
        assert_eq!(err.to_string(), "Index out of bounds: index 4, length 2");

        let err = DiagnosticError::LineOutOfRange { line: 9, max_lines: 3 };
        assert_eq!(
            err.to_string(),
            "Diagnostic refers to line 9, source has 3 lines"
        );
    }
}
