//! Character cursor over one source line.
//!
//! The tokenizer never crosses a line break, so a cursor only ever walks a
//! single [`SourceLine`](crate::SourceLine). It tracks the byte offset used
//! for text ranges and the 1-based column used for positions side by side.

/// A cursor for traversing one line character by character.
///
/// # Example
///
/// ```
/// use vlark_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a <= b;", 1);
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.match_str("<="));
/// assert_eq!(cursor.column(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The line being traversed.
    text: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Current column number (1-based).
    column: u32,

    /// Columns a tab advances by.
    tab_width: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str, tab_width: u32) -> Self {
        Self {
            text,
            position: 0,
            column: 1,
            tab_width: tab_width.max(1),
        }
    }

    /// Returns the current character, or `'\0'` at the end of the line.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// ```
    /// use vlark_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc", 1);
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();
        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }
        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.column += if c == '\t' { self.tab_width } else { 1 };
        }
    }

    /// Advances `count` characters.
    #[inline]
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Consumes `expected` if it is the current character.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the remaining text starts with it.
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.advance_by(expected.chars().count());
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.is_at_end() && pred(self.current_char()) {
            self.advance();
        }
    }

    /// Moves to the end of the line.
    pub fn skip_to_end(&mut self) {
        while !self.is_at_end() {
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Text from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.text.get(start..self.position).unwrap_or("")
    }

    /// Text not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.text.get(self.position..).unwrap_or("")
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The whole line.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("abc", 1);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_empty_line() {
        let mut cursor = Cursor::new("", 1);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_tracks_bytes_and_columns() {
        let mut cursor = Cursor::new("\u{e9}a", 1);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_tab_width() {
        let mut cursor = Cursor::new("\tx", 4);
        cursor.advance();
        assert_eq!(cursor.column(), 5);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_peek_past_non_ascii() {
        let cursor = Cursor::new("\u{e9}bc", 1);
        assert_eq!(cursor.peek_char(0), '\u{e9}');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new(":=", 1);
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char(':'));
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_str() {
        let mut cursor = Cursor::new("<->x", 1);
        assert!(!cursor.match_str("<="));
        assert!(cursor.match_str("<->"));
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.column(), 4);
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("abc_12 rest", 1);
        cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        assert_eq!(cursor.slice_from(0), "abc_12");
        assert_eq!(cursor.remaining(), " rest");
    }

    #[test]
    fn test_skip_to_end() {
        let mut cursor = Cursor::new("-- comment", 1);
        cursor.skip_to_end();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.column(), 11);
    }
}
