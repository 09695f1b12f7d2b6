//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! Codes render as `{prefix}{number:04}`, for example `E1002`. The lexical
//! phase owns the `1xxx` range and the outline parser the `2xxx` range.
//!
//! ```
//! use vlark_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERRORS (E1001-E1999)
    // =========================================================================

    /// E1001: character that starts no token
    pub const E_LEX_UNKNOWN_CHAR: Self = Self::new("E", 1001);
    /// E1002: string literal not closed before end of line
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: malformed abstract or based literal
    pub const E_LEX_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: word that is neither a keyword nor a legal identifier
    pub const E_LEX_INVALID_IDENTIFIER: Self = Self::new("E", 1004);
    /// E1005: block comment still open at end of file
    pub const E_LEX_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
    /// E1006: malformed bit-string literal
    pub const E_LEX_INVALID_BIT_STRING: Self = Self::new("E", 1006);
    /// E1007: malformed character literal or extended identifier
    pub const E_LEX_INVALID_LITERAL: Self = Self::new("E", 1007);

    // =========================================================================
    // OUTLINE PARSER ERRORS (E2001-E2999)
    // =========================================================================

    /// E2001: token that cannot appear here
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: a required token is missing
    pub const E_PARSE_EXPECTED_TOKEN: Self = Self::new("E", 2002);

    // =========================================================================
    // WARNINGS (W1001-W9999)
    // =========================================================================

    /// W1001: text after a block-comment closer is ignored
    pub const W_TEXT_AFTER_COMMENT: Self = Self::new("W", 1001);
    /// W1002: block-comment opener inside a block comment
    pub const W_NESTED_COMMENT: Self = Self::new("W", 1002);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(DiagnosticCode::E_LEX_UNKNOWN_CHAR.as_str(), "E1001");
        assert_eq!(DiagnosticCode::W_TEXT_AFTER_COMMENT.to_string(), "W1001");
        assert_eq!(DiagnosticCode::new("E", 7).as_str(), "E0007");
    }

    #[test]
    fn test_code_debug() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::E_PARSE_EXPECTED_TOKEN),
            "DiagnosticCode(E2002)"
        );
    }

    #[test]
    fn test_lexical_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEX_UNKNOWN_CHAR,
            DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            DiagnosticCode::E_LEX_INVALID_NUMBER,
            DiagnosticCode::E_LEX_INVALID_IDENTIFIER,
            DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
            DiagnosticCode::E_LEX_INVALID_BIT_STRING,
            DiagnosticCode::E_LEX_INVALID_LITERAL,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
