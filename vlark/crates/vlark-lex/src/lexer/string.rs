//! String, character literal and extended identifier lexing.

use vlark_util::DiagnosticCode;

use crate::charset::is_graphic;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a tick or a character literal.
    ///
    /// After a name, `)`, `]` or `all` the quote is an attribute tick, so
    /// `a'range` and `t'('0')` lex correctly. Elsewhere `'x'` is a
    /// character literal and a lone quote is a tick.
    pub fn lex_tick_or_char(&mut self) -> TokenKind {
        let after_name = matches!(
            self.prev_kind,
            Some(
                TokenKind::Identifier
                    | TokenKind::RightParen
                    | TokenKind::RightBracket
                    | TokenKind::All
            )
        );
        if !after_name && self.cursor.peek_char(2) == '\'' && is_graphic(self.cursor.peek_char(1)) {
            self.cursor.advance_by(3);
            TokenKind::Character
        } else {
            self.single(TokenKind::Tick)
        }
    }

    /// Lexes a string literal.
    ///
    /// A doubled quote stands for one quote character. A string that runs
    /// off the end of the line is reported and still produced as a token
    /// covering the rest of the line.
    pub fn lex_string(&mut self) -> TokenKind {
        self.cursor.advance();
        loop {
            if self.cursor.is_at_end() {
                self.report_error_with_help(
                    DiagnosticCode::E_LEX_UNTERMINATED_STRING,
                    "unterminated string literal".to_string(),
                    "string literals cannot span lines; use `&` to concatenate",
                );
                return TokenKind::String;
            }
            if self.cursor.match_char('"') {
                if !self.cursor.match_char('"') {
                    return TokenKind::String;
                }
            } else {
                self.cursor.advance();
            }
        }
    }

    /// Lexes an extended identifier `\...\`.
    ///
    /// A doubled backslash inside stands for one backslash. Unterminated or
    /// empty extended identifiers are reported and dropped.
    pub fn lex_extended_identifier(&mut self) -> Option<TokenKind> {
        self.cursor.advance();
        let body_start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    DiagnosticCode::E_LEX_INVALID_LITERAL,
                    "unterminated extended identifier".to_string(),
                );
                return None;
            }
            if self.cursor.current_char() == '\\' {
                if self.cursor.peek_char(1) == '\\' {
                    self.cursor.advance_by(2);
                    continue;
                }
                let empty = self.cursor.position() == body_start;
                self.cursor.advance();
                if empty {
                    self.report_error(
                        DiagnosticCode::E_LEX_INVALID_LITERAL,
                        "extended identifier is empty".to_string(),
                    );
                    return None;
                }
                return Some(TokenKind::Identifier);
            }
            self.cursor.advance();
        }
    }
}
