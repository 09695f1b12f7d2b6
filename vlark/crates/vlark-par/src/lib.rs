//! vlark-par - Outline parser for VHDL
//!
//! This crate reads the token stream produced by `vlark-lex` and records the
//! design units it declares: entities, architectures, packages, package
//! bodies, configurations and contexts, plus the `library`, `use` and
//! context-reference clauses in front of them. Unit bodies are skipped
//! statement by statement.
//!
//! # Example Usage
//!
//! ```
//! use vlark_lex::{tokenize, LexerConfig, SourceBuffer};
//! use vlark_par::{DesignUnitKind, Parser};
//! use vlark_util::Handler;
//!
//! let source = "library ieee;\nentity e is\nend entity;\narchitecture rtl of e is\nbegin\nend;";
//! let handler = Handler::new();
//! let buffer = SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap();
//! let tokens = tokenize(&buffer, &handler).unwrap();
//!
//! let ast = Parser::new(&tokens, &buffer, &handler).parse();
//! let kinds: Vec<DesignUnitKind> = ast.design_units.iter().map(|u| u.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [DesignUnitKind::Library, DesignUnitKind::Entity, DesignUnitKind::Architecture]
//! );
//! ```
//!
//! # Error Recovery
//!
//! When a header is malformed, the parser:
//! 1. Reports a diagnostic at the offending token
//! 2. Skips tokens past the next `;`
//! 3. Continues with the next statement

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(test)]
mod edge_cases;

pub mod ast;
mod items;

pub use ast::{Ast, DesignUnit, DesignUnitKind};

use tracing::debug;
use vlark_lex::{SourceBuffer, Token, TokenKind};
use vlark_util::{DiagnosticCode, Handler, SourcePosition, Span};

// ============================================================================
// PARSER
// ============================================================================

/// A malformed header was found and has already been reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reported;

/// Result of parsing one piece of a header
type PResult<T> = Result<T, Reported>;

/// Outline parser over a token slice
///
/// The parser uses one token of lookahead and panic-mode recovery to the
/// next `;`.
pub struct Parser<'a> {
    /// Token stream, normally ending in end of file
    tokens: &'a [Token],

    /// Source the tokens were scanned from
    buffer: &'a SourceBuffer,

    /// Current position in the token stream
    position: usize,

    /// Error handler
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, which were scanned from `buffer`
    pub fn new(tokens: &'a [Token], buffer: &'a SourceBuffer, handler: &'a Handler) -> Self {
        Self {
            tokens,
            buffer,
            position: 0,
            handler,
        }
    }

    /// Parse a complete source file
    pub fn parse(&mut self) -> Ast {
        let mut design_units = Vec::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(Some(unit)) => design_units.push(unit),
                Ok(None) => {},
                Err(Reported) => {
                    // Error recovery: skip to sync point
                    self.recover_to_sync_point();
                },
            }
        }

        let token_count = self
            .tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .count();
        debug!(
            units = design_units.len(),
            tokens = token_count,
            "parsed outline"
        );
        Ast {
            design_units,
            token_count,
        }
    }

    // ========================================================================
    // TOKEN NAVIGATION
    // ========================================================================

    /// Kind of the current token
    fn current_kind(&self) -> TokenKind {
        self.tokens
            .get(self.position)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Kind of the token after the current one
    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.position + 1)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Position of the current token
    fn current_position(&self) -> SourcePosition {
        match self.tokens.get(self.position).or(self.tokens.last()) {
            Some(token) => token.position,
            None => SourcePosition::START,
        }
    }

    /// Span of the current token
    fn current_span(&self) -> Span {
        match self.tokens.get(self.position) {
            Some(token) => Span::new(token.position, token.text(self.buffer).chars().count() as u32),
            None => Span::from(self.current_position()),
        }
    }

    /// Spelling of the current token
    fn current_text(&self) -> &'a str {
        self.tokens
            .get(self.position)
            .map(|t| t.text(self.buffer))
            .unwrap_or("")
    }

    /// Check if at end of tokens
    fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Advance to next token
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Match and consume token
    fn match_token(&mut self, expected: TokenKind) -> bool {
        if self.current_kind() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect specific token
    fn expect(&mut self, expected: TokenKind) -> PResult<()> {
        if self.match_token(expected) {
            Ok(())
        } else {
            self.error_expected(&expected.to_string());
            Err(Reported)
        }
    }

    /// Parse an identifier and return its spelling
    fn parse_ident(&mut self) -> PResult<String> {
        if self.current_kind() == TokenKind::Identifier {
            let text = self.current_text().to_string();
            self.advance();
            Ok(text)
        } else {
            self.error_expected("identifier");
            Err(Reported)
        }
    }

    // ========================================================================
    // ERROR REPORTING
    // ========================================================================

    /// Report an error with expected token info
    ///
    /// At end of file the report is a fallback: a lexical error at the same
    /// spot explains the problem better.
    fn error_expected(&self, expected: &str) {
        let found = self.current_kind();
        let builder = self
            .handler
            .build_error(self.current_span(), format!("expected {}, found {}", expected, found))
            .code(DiagnosticCode::E_PARSE_EXPECTED_TOKEN);
        if found == TokenKind::Eof {
            builder.fallback().emit(self.handler);
        } else {
            builder.emit(self.handler);
        }
    }

    /// Report a token that cannot start a statement
    fn error_unexpected(&self) {
        self.handler
            .build_error(
                self.current_span(),
                format!("unexpected {}", self.current_kind()),
            )
            .code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN)
            .emit(self.handler);
    }

    /// Recover to synchronization point
    ///
    /// Skips past the next `;`, or stops at end of file.
    fn recover_to_sync_point(&mut self) {
        loop {
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Semicolon => {
                    self.advance();
                    break;
                },
                _ => {
                    self.advance();
                },
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
