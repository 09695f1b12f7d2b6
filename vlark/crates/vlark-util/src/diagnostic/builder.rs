//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourcePosition, Span};

/// A source line excerpt with a caret underline
///
/// # Examples
///
/// ```
/// use vlark_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("signal s : bit $;", 4, 16, 17)
///     .with_label("unknown character");
/// let text = snippet.format();
/// assert!(text.contains("signal s : bit $;"));
/// assert!(text.ends_with("^ unknown character"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column just past the highlight (1-based)
    pub end_column: usize,
    /// Optional label printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Create a snippet highlighting the columns covered by `span`
    pub fn for_span(line: impl Into<String>, span: Span) -> Self {
        Self::new(
            line,
            span.line() as usize,
            span.start.column as usize,
            span.end_column() as usize,
        )
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Tabs before the highlight are echoed in the caret line so the carets
    /// stay aligned in a terminal.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        for c in self.line.chars().chain(std::iter::repeat(' ')).take(underline_start) {
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        for _ in 0..underline_len {
            result.push('^');
        }

        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use vlark_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use vlark_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unknown character `$`")
///     .code(DiagnosticCode::E_LEX_UNKNOWN_CHAR)
///     .span(Span::point(3, 14))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Span::DUMMY),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Create a builder for a fault in the front end itself
    pub fn bug(message: impl Into<String>) -> Self {
        Self::new(Level::Bug, message).internal()
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Set the source span to a single position
    pub fn at(self, position: SourcePosition) -> Self {
        self.span(Span::from(position))
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    /// Mark the diagnostic as a tooling fault rather than a source error
    pub fn internal(mut self) -> Self {
        self.diagnostic.internal = true;
        self
    }

    /// Mark the diagnostic as a fallback
    ///
    /// Fallback diagnostics are dropped by [`Handler::reportable`] when a
    /// non-fallback diagnostic exists at the same position.
    pub fn fallback(mut self) -> Self {
        self.diagnostic.fallback = true;
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Build and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
