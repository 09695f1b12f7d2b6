//! Human-readable diagnostic rendering.

use super::{Diagnostic, SourceSnippet};
use crate::error::{DiagnosticError, DiagnosticResult};
use crate::span::Span;
use std::fmt::Write;

/// Random access to the text of source lines, by 1-based line number
pub trait LineSource {
    /// Text of `line`, without its line terminator
    fn line_text(&self, line: u32) -> Option<&str>;

    /// Number of lines available
    fn line_count(&self) -> usize;
}

impl LineSource for [&str] {
    fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        self.get(idx).copied()
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

/// Renders diagnostics as `file:line:col: level[code]: message` blocks
///
/// # Examples
///
/// ```
/// use vlark_util::diagnostic::{Diagnostic, Emitter};
/// use vlark_util::span::Span;
///
/// let lines: &[&str] = &["a : integer $ ;"];
/// let diag = Diagnostic::error("unknown character `$`", Span::point(1, 13));
/// let text = Emitter::plain().render("top.vhd", &diag, lines).unwrap();
/// assert!(text.starts_with("top.vhd:1:13: error: unknown character `$`"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Emitter {
    color: bool,
    snippets: bool,
}

impl Emitter {
    /// Create an emitter
    pub const fn new(color: bool, snippets: bool) -> Self {
        Self { color, snippets }
    }

    /// No color, with snippets
    pub const fn plain() -> Self {
        Self::new(false, true)
    }

    /// Render one diagnostic, pulling the offending line from `source`
    pub fn render<S: LineSource + ?Sized>(
        &self,
        file: &str,
        diag: &Diagnostic,
        source: &S,
    ) -> DiagnosticResult<String> {
        let mut out = String::new();
        let level = diag.level.name();
        let level = if self.color {
            diag.level.paint(level)
        } else {
            level.to_string()
        };

        if diag.span == Span::DUMMY {
            write!(out, "{}: {}", file, level)?;
        } else {
            write!(out, "{}:{}: {}", file, diag.span, level)?;
        }
        if let Some(code) = diag.code {
            write!(out, "[{}]", code)?;
        }
        writeln!(out, ": {}", diag.message)?;

        if self.snippets && diag.span != Span::DUMMY {
            let line = diag.span.line();
            let text = source
                .line_text(line)
                .ok_or(DiagnosticError::LineOutOfRange {
                    line,
                    max_lines: source.line_count(),
                })?;
            writeln!(out, "{}", SourceSnippet::for_span(text, diag.span).format())?;
        }
        for snippet in &diag.snippets {
            writeln!(out, "{}", snippet.format())?;
        }
        for note in &diag.notes {
            writeln!(out, "    = note: {}", note)?;
        }
        for help in &diag.helps {
            writeln!(out, "    = help: {}", help)?;
        }
        Ok(out)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticCode;
    use crate::span::SourcePosition;

    const LINES: &[&str] = &["entity e is", "  port (a : in bit$);", "end;"];

    #[test]
    fn test_render_header_and_snippet() {
        let diag = Diagnostic::error("unknown character `$`", Span::point(2, 20))
            .with_code(DiagnosticCode::E_LEX_UNKNOWN_CHAR);
        let text = Emitter::plain().render("e.vhd", &diag, LINES).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("e.vhd:2:20: error[E1001]: unknown character `$`")
        );
        assert_eq!(lines.next(), Some("  2 |   port (a : in bit$);"));
        assert_eq!(lines.next().map(|l| l.trim_end().ends_with('^')), Some(true));
    }

    #[test]
    fn test_render_without_snippets() {
        let diag = Diagnostic::warning("text after comment ignored", Span::point(3, 4))
            .with_help("move the text to its own line");
        let text = Emitter::new(false, false).render("e.vhd", &diag, LINES).unwrap();
        assert_eq!(
            text,
            "e.vhd:3:4: warning: text after comment ignored\n    = help: move the text to its own line\n"
        );
    }

    #[test]
    fn test_render_dummy_span_has_no_position() {
        let diag = Diagnostic::error("no source", Span::DUMMY);
        let text = Emitter::plain().render("x.vhd", &diag, LINES).unwrap();
        assert_eq!(text, "x.vhd: error: no source\n");
    }

    #[test]
    fn test_render_line_out_of_range() {
        let diag = Diagnostic::error("far away", Span::new(SourcePosition::new(40, 1), 1));
        let err = Emitter::plain().render("x.vhd", &diag, LINES).unwrap_err();
        assert!(matches!(
            err,
            DiagnosticError::LineOutOfRange { line: 40, max_lines: 3 }
        ));
    }

    #[test]
    fn test_render_colored_level() {
        let diag = Diagnostic::error("bad", Span::point(1, 1));
        let text = Emitter::new(true, false).render("x.vhd", &diag, LINES).unwrap();
        assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    }
}
