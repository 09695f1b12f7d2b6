//! Diagnostic module - Error and warning collection.
//!
//! Every phase of the front end reports problems into a [`Handler`] that the
//! caller owns and threads through by shared reference. Nothing is printed at
//! the point of failure; the caller decides how to render what was collected.
//!
//! # Examples
//!
//! ```
//! use vlark_util::diagnostic::{DiagnosticCode, Handler};
//! use vlark_util::span::Span;
//!
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::point(1, 5), "unknown character `$`")
//!     .code(DiagnosticCode::E_LEX_UNKNOWN_CHAR)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.reportable().len(), 1);
//! ```

mod builder;
mod codes;
mod emitter;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use emitter::{Emitter, LineSource};
pub use level::{ColorConfig, Level};

use crate::span::{SourcePosition, Span};
use crate::FxHashSet;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
    /// The problem lies in the tooling, not in the user's source
    pub internal: bool,
    /// Only worth showing if nothing better was reported at the same position
    pub fallback: bool,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
            internal: false,
            fallback: false,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Where the diagnostic points
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.span.start
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Two diagnostics describe the same problem when they agree on position
    /// and message.
    pub fn same_report(&self, other: &Diagnostic) -> bool {
        self.position() == other.position() && self.message == other.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Collector for diagnostics
///
/// The collector is interior-mutable so the Line Classifier and Tokenizer can
/// both hold `&Handler` while reporting. A `Handler` belongs to one file's
/// pipeline; independent files each get their own.
///
/// # Examples
///
/// ```
/// use vlark_util::diagnostic::{Diagnostic, Handler};
/// use vlark_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("ignored text", Span::point(2, 9)));
/// assert_eq!(handler.warning_count(), 1);
/// assert!(!handler.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error
    ///
    /// ```
    /// use vlark_util::diagnostic::{DiagnosticCode, Handler};
    /// use vlark_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.build_error(Span::point(4, 1), "unterminated block comment")
    ///     .code(DiagnosticCode::E_LEX_UNTERMINATED_COMMENT)
    ///     .emit(&handler);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Total number of collected diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler and return everything it collected
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }

    /// Diagnostics as they should be shown to a user
    ///
    /// Duplicates (same position and message) are reported once, and a
    /// fallback diagnostic is dropped when a non-fallback diagnostic exists
    /// at the same position. The result is ordered by position; diagnostics
    /// at the same position keep their emission order.
    pub fn reportable(&self) -> Vec<Diagnostic> {
        reportable(&self.diagnostics.borrow())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

/// Apply duplicate and fallback suppression to a set of diagnostics
///
/// Exposed for callers that merge diagnostics from several handlers.
pub fn reportable(diagnostics: &[Diagnostic]) -> Vec<Diagnostic> {
    let primary: FxHashSet<SourcePosition> = diagnostics
        .iter()
        .filter(|d| !d.fallback)
        .map(Diagnostic::position)
        .collect();

    let mut kept: Vec<Diagnostic> = Vec::with_capacity(diagnostics.len());
    for diag in diagnostics {
        if diag.fallback && primary.contains(&diag.position()) {
            continue;
        }
        if kept.iter().any(|k| k.same_report(diag)) {
            continue;
        }
        kept.push(diag.clone());
    }
    kept.sort_by_key(Diagnostic::position);
    kept
}
