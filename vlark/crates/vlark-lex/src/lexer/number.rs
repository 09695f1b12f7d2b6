//! Abstract literal lexing.
//!
//! Handles decimal literals (`42`, `1_000`, `3.14`, `1.0E-3`, `5E2`) and
//! based literals (`16#FF#`, `2#1010_0101#`, `16#F.8#E1`). A decimal
//! integer directly followed by a letter, as in `10ns` or `12ux"F0"`, is an
//! [`IntegerLetter`](TokenKind::IntegerLetter) covering the digits only.

use vlark_util::DiagnosticCode;

use crate::charset::{digit_value, is_digit_in_base, is_word_start};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an abstract literal starting at a decimal digit.
    ///
    /// Returns `None` for malformed literals after reporting them.
    pub fn lex_number(&mut self) -> Option<TokenKind> {
        let mut valid = self.eat_decimal_digits();

        if self.cursor.current_char() == '#' {
            return self.lex_based(valid);
        }

        let mut real = false;
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            valid &= self.eat_decimal_digits();
            real = true;
        }

        if self.at_exponent() {
            valid &= self.lex_exponent(real)?;
        } else if !real && is_word_start(self.cursor.current_char()) {
            return self.finish_number(valid, TokenKind::IntegerLetter);
        }

        let kind = if real {
            TokenKind::Real
        } else {
            TokenKind::Integer
        };
        self.finish_number(valid, kind)
    }

    /// Lexes the part of a based literal after its base.
    ///
    /// The cursor sits on the first `#`.
    fn lex_based(&mut self, base_valid: bool) -> Option<TokenKind> {
        let base = self.based_base();
        self.cursor.advance();

        let mut valid = base_valid;
        match base {
            Some(base) => valid &= self.eat_extended_digits(base),
            None => {
                self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
                valid = false;
            },
        }

        let mut real = false;
        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            real = true;
            match base {
                Some(base) => valid &= self.eat_extended_digits(base),
                None => self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_'),
            }
        }

        if !self.cursor.match_char('#') {
            self.report_error_with_help(
                DiagnosticCode::E_LEX_INVALID_NUMBER,
                "based literal is missing its closing `#`".to_string(),
                "based literals look like `16#FF#`",
            );
            return None;
        }

        if self.at_exponent() {
            valid &= self.lex_exponent(real)?;
        }

        if base.is_none() {
            self.report_error(
                DiagnosticCode::E_LEX_INVALID_NUMBER,
                format!(
                    "base of `{}` must be between 2 and 16",
                    self.cursor.slice_from(self.token_start)
                ),
            );
            return None;
        }

        let kind = if real {
            TokenKind::Real
        } else {
            TokenKind::Integer
        };
        self.finish_number(valid, kind)
    }

    /// Base written before the first `#`, if it is between 2 and 16.
    fn based_base(&self) -> Option<u32> {
        let digits = self.cursor.slice_from(self.token_start);
        let mut base: u32 = 0;
        for c in digits.chars().filter(|c| *c != '_') {
            base = base.checked_mul(10)?.checked_add(digit_value(c)?)?;
        }
        (2..=16).contains(&base).then_some(base)
    }

    /// Checks if the cursor is on an exponent: `E` followed by digits,
    /// optionally signed.
    fn at_exponent(&self) -> bool {
        if !matches!(self.cursor.current_char(), 'e' | 'E') {
            return false;
        }
        match self.cursor.peek_char(1) {
            '+' | '-' => self.cursor.peek_char(2).is_ascii_digit(),
            c => c.is_ascii_digit(),
        }
    }

    /// Consumes an exponent and returns whether its digits are well formed.
    ///
    /// Integer literals cannot take a negative exponent; that is reported
    /// here and yields `None`.
    fn lex_exponent(&mut self, real: bool) -> Option<bool> {
        self.cursor.advance();
        let negative = self.cursor.current_char() == '-';
        if negative || self.cursor.current_char() == '+' {
            self.cursor.advance();
        }
        let digits_valid = self.eat_decimal_digits();
        if negative && !real {
            self.report_error(
                DiagnosticCode::E_LEX_INVALID_NUMBER,
                "integer literal cannot have a negative exponent".to_string(),
            );
            return None;
        }
        Some(digits_valid)
    }

    /// Consumes decimal digits and single separating underscores.
    fn eat_decimal_digits(&mut self) -> bool {
        self.eat_digit_run(|c| c.is_ascii_digit(), |c| c.is_ascii_digit())
    }

    /// Consumes extended digits, flagging the ones outside `base`.
    fn eat_extended_digits(&mut self, base: u32) -> bool {
        self.eat_digit_run(|c| c.is_ascii_alphanumeric(), |c| is_digit_in_base(c, base))
    }

    /// Consumes characters accepted by `take` and underscores.
    ///
    /// Returns false when the run is empty, when a character fails `valid`,
    /// or when an underscore leads, trails or is doubled.
    fn eat_digit_run(
        &mut self,
        take: impl Fn(char) -> bool,
        valid: impl Fn(char) -> bool,
    ) -> bool {
        let mut ok = true;
        let mut after_underscore = true;
        let mut any = false;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '_' {
                ok &= !after_underscore;
                after_underscore = true;
            } else if take(c) {
                ok &= valid(c);
                after_underscore = false;
                any = true;
            } else {
                break;
            }
            self.cursor.advance();
        }
        ok && any && !after_underscore
    }

    /// Reports a malformed literal or hands back its kind.
    fn finish_number(&self, valid: bool, kind: TokenKind) -> Option<TokenKind> {
        if valid {
            return Some(kind);
        }
        self.report_error(
            DiagnosticCode::E_LEX_INVALID_NUMBER,
            format!(
                "malformed number `{}`",
                self.cursor.slice_from(self.token_start)
            ),
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexerConfig, SourceBuffer, TokenKind};
    use vlark_util::{DiagnosticCode, Handler};

    fn lex(code: &str) -> (Vec<(TokenKind, String)>, Handler) {
        let handler = Handler::new();
        let buffer = SourceBuffer::from_source(code, &LexerConfig::default(), &handler).unwrap();
        let tokens = tokenize(&buffer, &handler)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| (t.kind, t.text(&buffer).to_string()))
            .collect();
        (tokens, handler)
    }

    fn single(code: &str) -> TokenKind {
        let (tokens, handler) = lex(code);
        assert!(handler.is_empty(), "unexpected diagnostics for {}", code);
        assert_eq!(tokens.len(), 1, "{} should be one token", code);
        assert_eq!(tokens[0].1, code);
        tokens[0].0
    }

    fn rejected(code: &str) {
        let (tokens, handler) = lex(code);
        assert!(tokens.is_empty(), "{} should be dropped", code);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1, "{} should report once", code);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEX_INVALID_NUMBER));
    }

    #[test]
    fn test_integers() {
        for code in ["0", "42", "1_000_000", "5E2", "5e+2", "1E0"] {
            assert_eq!(single(code), TokenKind::Integer, "{}", code);
        }
    }

    #[test]
    fn test_reals() {
        for code in ["3.14", "1.0E-3", "0.5e+10", "1_0.0_1"] {
            assert_eq!(single(code), TokenKind::Real, "{}", code);
        }
    }

    #[test]
    fn test_based_literals() {
        for code in ["16#FF#", "2#1010_0101#", "8#777#", "16#ff#E2", "6#5#"] {
            assert_eq!(single(code), TokenKind::Integer, "{}", code);
        }
        assert_eq!(single("16#F.8#E1"), TokenKind::Real);
        assert_eq!(single("2#1.1#"), TokenKind::Real);
    }

    #[test]
    fn test_integer_letter() {
        let (tokens, _) = lex("10ns");
        assert_eq!(
            tokens,
            [
                (TokenKind::IntegerLetter, "10".to_string()),
                (TokenKind::Identifier, "ns".to_string()),
            ]
        );
    }

    #[test]
    fn test_exponent_needs_digits() {
        let (tokens, _) = lex("2ext");
        assert_eq!(tokens[0], (TokenKind::IntegerLetter, "2".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "ext".to_string()));
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let (tokens, _) = lex("1.x");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(kinds, [TokenKind::Integer, TokenKind::Dot, TokenKind::Identifier]);
    }

    #[test]
    fn test_malformed_underscores() {
        rejected("1__0");
        rejected("1_");
        rejected("1.5_");
    }

    #[test]
    fn test_negative_integer_exponent() {
        rejected("1E-3");
    }

    #[test]
    fn test_digit_outside_base() {
        rejected("2#102#");
        rejected("8#8#");
    }

    #[test]
    fn test_base_out_of_range() {
        rejected("17#1#");
        rejected("1#0#");
    }

    #[test]
    fn test_missing_closing_hash() {
        rejected("16#FF");
    }

    #[test]
    fn test_recovery_after_bad_number() {
        let (tokens, handler) = lex("x := 1__0 + 2;");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(kinds, [
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::Semicolon
        ]);
        assert_eq!(handler.error_count(), 1);
    }
}
