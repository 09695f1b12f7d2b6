//! Line Classifier.
//!
//! Splits a source into physical lines and tags each with its syntactic role
//! before any token is scanned. Every physical line produces exactly one
//! [`SourceLine`], blank ones included, so line `N` of the input is always
//! `LineId(N - 1)` in the buffer and token positions never need recounting.
//!
//! Block comments are tracked here as a region spanning lines: the opener
//! line is [`LineCategory::BlockCommentStart`], the lines in between are
//! [`LineCategory::BlockCommentBody`] and the line holding the closer is
//! [`LineCategory::BlockCommentEnd`]. Only [`LineCategory::Code`] lines reach
//! the tokenizer.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};
use vlark_util::diagnostic::{DiagnosticCode, LineSource};
use vlark_util::{define_idx, Handler, IndexVec, SourcePosition, Span};

use crate::charset::is_whitespace;
use crate::config::LexerConfig;
use crate::error::{LoadError, LoadResult};
use crate::token::{TextRange, Token};

define_idx!(
    /// Index of a physical line; `LineId(0)` is line 1.
    LineId
);

impl LineId {
    /// 1-based line number
    #[inline]
    pub const fn line_number(self) -> u32 {
        self.0 + 1
    }
}

/// Syntactic role of a physical line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineCategory {
    /// Only whitespace
    Blank,
    /// Starts with `--`, or holds a complete `/* ... */` on its own
    LineComment,
    /// Starts with `/*` that is not closed on the same line
    BlockCommentStart,
    /// Inside an open block comment
    BlockCommentBody,
    /// Holds the `*/` closing an open block comment
    BlockCommentEnd,
    /// Anything else; the only category that is tokenized
    Code,
}

impl LineCategory {
    /// Returns true for lines handed to the tokenizer
    #[inline]
    pub const fn is_code(self) -> bool {
        matches!(self, LineCategory::Code)
    }

    /// Returns true for any kind of comment line
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            LineCategory::LineComment
                | LineCategory::BlockCommentStart
                | LineCategory::BlockCommentBody
                | LineCategory::BlockCommentEnd
        )
    }
}

/// One physical line and its role
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// Line content without the trailing newline
    pub text: String,
    /// Syntactic role
    pub category: LineCategory,
}

/// Classified lines of one source, in input order
///
/// Lines are never modified once classified, which is what lets tokens refer
/// to their text by [`TextRange`].
#[derive(Clone, Debug, Default)]
pub struct SourceBuffer {
    lines: IndexVec<LineId, SourceLine>,
    tab_width: u32,
}

impl SourceBuffer {
    /// Read and classify a file
    ///
    /// Fails if the file cannot be read or a line is too long. An unclosed
    /// block comment is reported to `handler` and does not fail the load.
    pub fn load(
        path: impl AsRef<Path>,
        config: &LexerConfig,
        handler: &Handler,
    ) -> LoadResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read source file");
        Self::from_bytes(&bytes, config, handler)
    }

    /// Classify raw bytes
    ///
    /// Valid UTF-8 is used as is; anything else is read as Latin-1.
    pub fn from_bytes(bytes: &[u8], config: &LexerConfig, handler: &Handler) -> LoadResult<Self> {
        let text = decode(bytes);
        Self::from_source(&text, config, handler)
    }

    /// Classify an in-memory source
    ///
    /// ```
    /// use vlark_lex::{LexerConfig, LineCategory, SourceBuffer};
    /// use vlark_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let code = "-- header\n\nentity e is\nend;\n";
    /// let buffer = SourceBuffer::from_source(code, &LexerConfig::default(), &handler).unwrap();
    /// let categories: Vec<LineCategory> = buffer.lines().iter().map(|l| l.category).collect();
    /// assert_eq!(
    ///     categories,
    ///     [LineCategory::LineComment, LineCategory::Blank, LineCategory::Code, LineCategory::Code]
    /// );
    /// ```
    pub fn from_source(code: &str, config: &LexerConfig, handler: &Handler) -> LoadResult<Self> {
        let code = code.strip_prefix('\u{feff}').unwrap_or(code);
        let mut classifier = Classifier::new(config, handler);
        for text in code.split_terminator('\n') {
            classifier.push(text.strip_suffix('\r').unwrap_or(text))?;
        }
        let buffer = classifier.finish();
        debug!(
            lines = buffer.len(),
            code_lines = buffer.count(LineCategory::Code),
            "classified source"
        );
        Ok(buffer)
    }

    /// All lines
    #[inline]
    pub fn lines(&self) -> &IndexVec<LineId, SourceLine> {
        &self.lines
    }

    /// One line
    #[inline]
    pub fn line(&self, id: LineId) -> &SourceLine {
        &self.lines[id]
    }

    /// Number of physical lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the source had no lines at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in `category`
    pub fn count(&self, category: LineCategory) -> usize {
        self.lines.iter().filter(|l| l.category == category).count()
    }

    /// Lines the tokenizer scans
    pub fn code_lines(&self) -> impl Iterator<Item = (LineId, &SourceLine)> + '_ {
        self.lines
            .iter_enumerated()
            .filter(|(_, line)| line.category.is_code())
    }

    /// Columns a tab advances by in this buffer
    #[inline]
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }

    /// Resolve a text range
    ///
    /// A range that does not lie inside its line resolves to `""`.
    pub fn slice(&self, range: TextRange) -> &str {
        self.lines
            .get(range.line)
            .and_then(|line| line.text.get(range.start as usize..range.end() as usize))
            .unwrap_or("")
    }

    /// Text of a token
    #[inline]
    pub fn text_of(&self, token: &Token) -> &str {
        self.slice(token.range)
    }

    /// Compare two tokens by spelling
    pub fn same_text(&self, a: &Token, b: &Token) -> bool {
        self.slice(a.range) == self.slice(b.range)
    }
}

impl LineSource for SourceBuffer {
    fn line_text(&self, line: u32) -> Option<&str> {
        let idx = line.checked_sub(1)?;
        self.lines.get(LineId(idx)).map(|l| l.text.as_str())
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// 1-based column of the character at `byte_idx`.
pub(crate) fn column_at(text: &str, byte_idx: usize, tab_width: u32) -> u32 {
    let prefix = text.get(..byte_idx).unwrap_or(text);
    let width: u32 = prefix
        .chars()
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum();
    width + 1
}

/// Byte offset of a `/*` on a code line that is not closed on that line.
///
/// Openers inside string literals, character literals and after `--` do not
/// count.
pub(crate) fn unclosed_comment_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                i += 1;
            }
            b'\'' if bytes.get(i + 2) == Some(&b'\'') => i += 3,
            b'-' if bytes.get(i + 1) == Some(&b'-') => return None,
            b'/' if bytes.get(i + 1) == Some(&b'*') => match text[i + 2..].find("*/") {
                Some(end) => i += 2 + end + 2,
                None => return Some(i),
            },
            _ => i += 1,
        }
    }
    None
}

struct Classifier<'h> {
    config: LexerConfig,
    handler: &'h Handler,
    lines: IndexVec<LineId, SourceLine>,
    /// Where the currently open block comment started
    open_comment: Option<SourcePosition>,
}

impl<'h> Classifier<'h> {
    fn new(config: &LexerConfig, handler: &'h Handler) -> Self {
        Self {
            config: *config,
            handler,
            lines: IndexVec::new(),
            open_comment: None,
        }
    }

    fn push(&mut self, text: &str) -> LoadResult<()> {
        let number = self.lines.len() as u32 + 1;
        let max = self.config.max_line_length;
        if text.len() > max {
            let length = text.chars().count();
            if length > max {
                return Err(LoadError::LineTooLong {
                    line: number,
                    length,
                    max,
                });
            }
        }

        let category = if self.open_comment.is_some() {
            self.continue_block(text, number)
        } else {
            self.classify(text, number)
        };
        trace!(line = number, ?category, "classified line");

        self.lines.push(SourceLine {
            text: text.to_owned(),
            category,
        });
        Ok(())
    }

    fn classify(&mut self, text: &str, number: u32) -> LineCategory {
        let indent = text.len() - text.trim_start_matches(is_whitespace).len();
        let rest = &text[indent..];

        if rest.is_empty() {
            return LineCategory::Blank;
        }
        if rest.starts_with("--") {
            return LineCategory::LineComment;
        }
        if let Some(body) = rest.strip_prefix("/*") {
            return match body.find("*/") {
                Some(end) => {
                    self.after_closer(text, indent + 2 + end + 2, number);
                    LineCategory::LineComment
                }
                None => {
                    self.open_comment = Some(self.position(text, indent, number));
                    LineCategory::BlockCommentStart
                }
            };
        }

        if let Some(start) = unclosed_comment_start(text) {
            self.open_comment = Some(self.position(text, start, number));
        }
        LineCategory::Code
    }

    fn continue_block(&mut self, text: &str, number: u32) -> LineCategory {
        match text.find("*/") {
            Some(end) => {
                self.check_nested(&text[..end], text, number);
                self.open_comment = None;
                self.after_closer(text, end + 2, number);
                LineCategory::BlockCommentEnd
            }
            None => {
                self.check_nested(text, text, number);
                LineCategory::BlockCommentBody
            }
        }
    }

    /// Handle the rest of a line after a closer at byte `from`.
    ///
    /// An opener there starts a new region on this line.
    fn after_closer(&mut self, text: &str, from: usize, number: u32) {
        let reopen = unclosed_comment_start(&text[from..]).map(|idx| from + idx);
        self.check_trailing(text, from, reopen.unwrap_or(text.len()), number);
        if let Some(start) = reopen {
            self.open_comment = Some(self.position(text, start, number));
        }
    }

    /// Warn about text in `from..to` after a closer; it is not tokenized.
    fn check_trailing(&self, text: &str, from: usize, to: usize, number: u32) {
        let tail = &text[from..to];
        let skipped = tail.len() - tail.trim_start_matches(is_whitespace).len();
        let tail = tail[skipped..].trim_end_matches(is_whitespace);
        if tail.is_empty() || tail.starts_with("--") || tail.starts_with("/*") {
            return;
        }
        let start = self.position(text, from + skipped, number);
        self.handler
            .build_warning(
                Span::new(start, tail.chars().count() as u32),
                "text after the end of a block comment is ignored",
            )
            .code(DiagnosticCode::W_TEXT_AFTER_COMMENT)
            .help("move this text to its own line")
            .emit(self.handler);
    }

    /// Block comments do not nest; an inner opener is plain comment text.
    fn check_nested(&self, region: &str, text: &str, number: u32) {
        if let Some(idx) = region.find("/*") {
            let start = self.position(text, idx, number);
            self.handler
                .build_warning(Span::new(start, 2), "`/*` inside a block comment")
                .code(DiagnosticCode::W_NESTED_COMMENT)
                .note("block comments do not nest; the first `*/` closes the comment")
                .emit(self.handler);
        }
    }

    fn position(&self, text: &str, byte_idx: usize, number: u32) -> SourcePosition {
        SourcePosition::new(number, column_at(text, byte_idx, self.config.tab_width))
    }

    fn finish(self) -> SourceBuffer {
        if let Some(start) = self.open_comment {
            self.handler
                .build_error(Span::new(start, 2), "unterminated block comment")
                .code(DiagnosticCode::E_LEX_UNTERMINATED_COMMENT)
                .help("close the comment with `*/`")
                .emit(self.handler);
        }
        SourceBuffer {
            lines: self.lines,
            tab_width: self.config.tab_width,
        }
    }
}
