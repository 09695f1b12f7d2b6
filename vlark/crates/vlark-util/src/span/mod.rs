//! Span module - Source location tracking.
//!
//! Every token and diagnostic in the front end is anchored to a
//! [`SourcePosition`]: a 1-based line and 1-based column. A [`Span`] extends a
//! position with a column width on the same line, which is all the
//! diagnostic renderer needs to draw a caret underline.
//!
//! # Examples
//!
//! ```
//! use vlark_util::span::{SourcePosition, Span};
//!
//! let pos = SourcePosition::new(3, 7);
//! assert_eq!(pos.to_string(), "(3,7)");
//!
//! let span = Span::new(pos, 4);
//! assert_eq!(span.end_column(), 11);
//! ```

use std::fmt;

/// A line/column location in a source file
///
/// Positions are totally ordered, first by line, then by column. Both
/// components start at 1; the default position is `(1,1)`.
///
/// # Examples
///
/// ```
/// use vlark_util::span::SourcePosition;
///
/// let a = SourcePosition::new(1, 9);
/// let b = SourcePosition::new(2, 1);
/// assert!(a < b);
/// assert_eq!(SourcePosition::default(), SourcePosition::new(1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl SourcePosition {
    /// The first column of the first line
    pub const START: SourcePosition = SourcePosition { line: 1, column: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns this position moved `offset` columns along the same line
    ///
    /// Returns `None` when the result would fall before column 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlark_util::span::SourcePosition;
    ///
    /// let pos = SourcePosition::new(4, 5);
    /// assert_eq!(pos.shifted(2), Some(SourcePosition::new(4, 7)));
    /// assert_eq!(pos.shifted(-4), Some(SourcePosition::new(4, 1)));
    /// assert_eq!(pos.shifted(-5), None);
    /// ```
    pub fn shifted(self, offset: i32) -> Option<Self> {
        let column = i64::from(self.column) + i64::from(offset);
        if column < 1 || column > i64::from(u32::MAX) {
            return None;
        }
        Some(Self {
            line: self.line,
            column: column as u32,
        })
    }

    /// Returns the first column of the following line
    #[inline]
    pub const fn next_line(self) -> Self {
        Self {
            line: self.line + 1,
            column: 1,
        }
    }
}

impl Default for SourcePosition {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// A column range on a single source line
///
/// `len` is measured in columns; a zero-length span is a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First column covered by the span
    pub start: SourcePosition,
    /// Number of columns covered
    pub len: u32,
}

impl Span {
    /// Dummy span for diagnostics that are not tied to source text
    ///
    /// Its position `(0,0)` lies before every real position.
    pub const DUMMY: Span = Span {
        start: SourcePosition::new(0, 0),
        len: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: SourcePosition, len: u32) -> Self {
        Self { start, len }
    }

    /// Create a point span (zero width)
    ///
    /// # Examples
    ///
    /// ```
    /// use vlark_util::span::Span;
    ///
    /// let span = Span::point(2, 8);
    /// assert!(span.is_empty());
    /// assert_eq!(span.line(), 2);
    /// ```
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: SourcePosition::new(line, column),
            len: 0,
        }
    }

    /// Line the span sits on
    #[inline]
    pub const fn line(&self) -> u32 {
        self.start.line
    }

    /// Column just past the last covered column
    #[inline]
    pub const fn end_column(&self) -> u32 {
        self.start.column + self.len
    }

    /// Returns true for a zero-width span
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<SourcePosition> for Span {
    fn from(start: SourcePosition) -> Self {
        Self { start, len: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start.line, self.start.column)
    }
}
