//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the per-line driver and the
//! character dispatch. The `lex_*` methods that recognise each token family
//! live in the sibling modules.

use tracing::{debug, trace};
use vlark_util::diagnostic::DiagnosticCode;
use vlark_util::{Handler, Idx, SourcePosition, Span};

use crate::charset::is_word_start;
use crate::cursor::Cursor;
use crate::error::TokenizeError;
use crate::line::{LineId, SourceBuffer};
use crate::token::{TextRange, Token, TokenKind};

/// Tokenizer over a classified [`SourceBuffer`].
///
/// Only [`Code`](crate::LineCategory::Code) lines are scanned; the others are
/// skipped but keep their line numbers. The lexer yields every token in
/// source order followed by exactly one [`TokenKind::Eof`].
///
/// Recoverable problems (unknown characters, invalid identifiers, malformed
/// literals) are reported to the handler and scanning continues with the
/// next character.
pub struct Lexer<'a> {
    /// Classified source being scanned.
    buffer: &'a SourceBuffer,

    /// Collector for lexical diagnostics.
    handler: &'a Handler,

    /// Cursor over the current line.
    pub(crate) cursor: Cursor<'a>,

    /// Line the cursor is on.
    line: LineId,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Column where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Kind of the last token produced, used to tell ticks from
    /// character literals.
    pub(crate) prev_kind: Option<TokenKind>,

    /// Set once the end-of-file token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned before the first code line.
    pub fn new(buffer: &'a SourceBuffer, handler: &'a Handler) -> Self {
        let first = buffer
            .lines()
            .iter_enumerated()
            .find(|(_, line)| line.category.is_code());
        let (line, text) = match first {
            Some((id, line)) => (id, line.text.as_str()),
            None => (LineId(0), ""),
        };
        Self {
            buffer,
            handler,
            cursor: Cursor::new(text, buffer.tab_width()),
            line,
            token_start: 0,
            token_start_column: 1,
            prev_kind: None,
            finished: buffer.is_empty(),
        }
    }

    /// Scans the whole buffer.
    ///
    /// Fails only when the buffer holds no lines at all.
    pub fn tokenize(self) -> Result<Vec<Token>, TokenizeError> {
        if self.buffer.is_empty() {
            return Err(TokenizeError::EmptySource);
        }
        let handler = self.handler;
        let errors_before = handler.error_count();
        let tokens: Vec<Token> = self.collect();
        debug!(
            tokens = tokens.len(),
            errors = handler.error_count() - errors_before,
            "tokenized source"
        );
        Ok(tokens)
    }

    /// Returns the next token, moving across lines as needed.
    ///
    /// Returns `None` after the end-of-file token.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(token) = self.scan_line() {
                self.prev_kind = Some(token.kind);
                return Some(token);
            }
            if !self.next_code_line() {
                self.finished = true;
                return Some(self.eof_token());
            }
        }
    }

    /// Scans the next token on the current line.
    fn scan_line(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_at_end() {
                return None;
            }

            self.token_start = self.cursor.position();
            self.token_start_column = self.cursor.column();

            if let Some(kind) = self.lex_token() {
                return Some(self.make_token(kind));
            }
        }
    }

    /// Dispatches on the current character.
    ///
    /// Returns `None` when the characters consumed did not form a token; a
    /// diagnostic has been emitted in that case.
    fn lex_token(&mut self) -> Option<TokenKind> {
        let kind = match self.cursor.current_char() {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ']' => self.single(TokenKind::RightBracket),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '+' => self.single(TokenKind::Plus),
            '^' => self.single(TokenKind::Caret),
            '@' => self.single(TokenKind::At),
            '!' => self.single(TokenKind::Bang),
            '[' => self.lex_left_bracket(),
            ':' => self.lex_colon(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            '*' => self.lex_star(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_bar(),
            '-' => self.lex_minus(),
            '?' => self.lex_question(),
            '\'' => self.lex_tick_or_char(),
            '"' => self.lex_string(),
            '\\' => return self.lex_extended_identifier(),
            c if c.is_ascii_digit() => return self.lex_number(),
            c if is_word_start(c) => return self.lex_word(),
            c => {
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E_LEX_UNKNOWN_CHAR,
                    format!("unknown character `{}`", c.escape_default()),
                );
                return None;
            }
        };
        Some(kind)
    }

    /// Consumes one character and returns `kind`.
    #[inline]
    pub(crate) fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Builds a token from `token_start` to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token {
        let range = TextRange {
            line: self.line,
            start: self.token_start as u32,
            len: (self.cursor.position() - self.token_start) as u32,
        };
        Token::new(kind, self.token_position(), range)
    }

    /// Position where the current token starts.
    #[inline]
    pub(crate) fn token_position(&self) -> SourcePosition {
        SourcePosition::new(self.line.line_number(), self.token_start_column)
    }

    /// Span from the token start to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_position(),
            self.cursor.column().saturating_sub(self.token_start_column),
        )
    }

    /// Reports a lexical error covering the current token.
    pub(crate) fn report_error(&self, code: DiagnosticCode, message: String) {
        self.handler
            .build_error(self.token_span(), message)
            .code(code)
            .emit(self.handler);
    }

    /// Reports a lexical error and attaches a help line.
    pub(crate) fn report_error_with_help(
        &self,
        code: DiagnosticCode,
        message: String,
        help: &str,
    ) {
        self.handler
            .build_error(self.token_span(), message)
            .code(code)
            .help(help)
            .emit(self.handler);
    }

    /// Moves the cursor to the next code line. Returns false at the end.
    fn next_code_line(&mut self) -> bool {
        let buffer = self.buffer;
        let next = buffer
            .lines()
            .iter_enumerated()
            .skip(self.line.index() + 1)
            .find(|(_, line)| line.category.is_code());
        match next {
            Some((id, line)) => {
                self.line = id;
                self.cursor = Cursor::new(&line.text, buffer.tab_width());
                trace!(line = id.line_number(), "scanning line");
                true
            }
            None => false,
        }
    }

    /// End-of-file token, placed just past the last character of the
    /// last line.
    fn eof_token(&self) -> Token {
        let last = self.buffer.lines().last_idx().unwrap_or(LineId(0));
        let text = self
            .buffer
            .lines()
            .get(last)
            .map(|line| line.text.as_str())
            .unwrap_or("");
        let column = crate::line::column_at(text, text.len(), self.buffer.tab_width());
        Token::new(
            TokenKind::Eof,
            SourcePosition::new(last.line_number(), column),
            TextRange {
                line: last,
                start: text.len() as u32,
                len: 0,
            },
        )
    }

    /// Line the lexer is currently scanning (1-based).
    pub fn line(&self) -> u32 {
        self.line.line_number()
    }

    /// Column of the next character (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize a classified buffer.
///
/// ```
/// use vlark_lex::{tokenize, LexerConfig, SourceBuffer, TokenKind};
/// use vlark_util::Handler;
///
/// let handler = Handler::new();
/// let buffer = SourceBuffer::from_source("x := 1;", &LexerConfig::default(), &handler).unwrap();
/// let kinds: Vec<TokenKind> = tokenize(&buffer, &handler)
///     .unwrap()
///     .iter()
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Assign, TokenKind::Integer, TokenKind::Semicolon, TokenKind::Eof]
/// );
/// ```
pub fn tokenize(buffer: &SourceBuffer, handler: &Handler) -> Result<Vec<Token>, TokenizeError> {
    Lexer::new(buffer, handler).tokenize()
}
