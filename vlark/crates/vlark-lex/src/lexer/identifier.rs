//! Identifier, keyword and bit-string lexing.

use vlark_util::DiagnosticCode;

use crate::charset::{identifier_problem, is_graphic, is_word_char};
use crate::keyword::keyword_from_ident;
use crate::token::TokenKind;
use crate::Lexer;

/// Base specifiers that may prefix a bit-string literal.
const BIT_STRING_SPECIFIERS: &[&str] = &["b", "o", "x", "d", "ub", "uo", "ux", "sb", "so", "sx"];

/// Checks if `word` is a bit-string base specifier, ignoring case.
fn is_bit_string_specifier(word: &str) -> bool {
    BIT_STRING_SPECIFIERS
        .iter()
        .any(|spec| spec.eq_ignore_ascii_case(word))
}

impl<'a> Lexer<'a> {
    /// Lexes a word: keyword, identifier or bit-string literal.
    ///
    /// Returns `None` when the word breaks the identifier rules; the error
    /// has been reported and the word is skipped.
    pub fn lex_word(&mut self) -> Option<TokenKind> {
        self.cursor.eat_while(is_word_char);
        let word = self.cursor.slice_from(self.token_start);

        if self.cursor.current_char() == '"' && is_bit_string_specifier(word) {
            return self.lex_bit_string(word);
        }

        if let Some(keyword) = keyword_from_ident(word) {
            return Some(keyword);
        }

        match identifier_problem(word) {
            None => Some(TokenKind::Identifier),
            Some(problem) => {
                self.report_error_with_help(
                    DiagnosticCode::E_LEX_INVALID_IDENTIFIER,
                    format!("invalid identifier `{}`", word),
                    problem,
                );
                None
            },
        }
    }

    /// Lexes the quoted part of a bit-string literal.
    ///
    /// The cursor sits on the opening quote, just after `specifier`. The
    /// token covers the specifier and both quotes. Decimal bit strings take
    /// digits only; the others accept any graphic character so that
    /// metavalues such as `X"-Z"` pass through to later phases.
    fn lex_bit_string(&mut self, specifier: &str) -> Option<TokenKind> {
        let decimal = specifier.eq_ignore_ascii_case("d");
        self.cursor.advance();
        let mut bad_char = None;
        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    DiagnosticCode::E_LEX_INVALID_BIT_STRING,
                    "unterminated bit-string literal".to_string(),
                );
                return None;
            }
            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '"' {
                break;
            }
            let valid = if decimal {
                c.is_ascii_digit() || c == '_'
            } else {
                is_graphic(c)
            };
            if !valid && bad_char.is_none() {
                bad_char = Some(c);
            }
        }

        match bad_char {
            None => Some(TokenKind::BitString),
            Some(c) => {
                self.report_error(
                    DiagnosticCode::E_LEX_INVALID_BIT_STRING,
                    format!("invalid character `{}` in bit-string literal", c.escape_default()),
                );
                None
            },
        }
    }
}
