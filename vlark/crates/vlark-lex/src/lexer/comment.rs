//! Comment skipping.
//!
//! Whole comment lines never reach the lexer; this module handles the
//! comments that share a line with code.

use crate::charset::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips blanks, `--` comments and `/* ... */` comments.
    ///
    /// This is called before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if is_whitespace(c) => {
                    self.cursor.advance();
                },
                '-' if self.cursor.peek_char(1) == '-' => {
                    self.cursor.skip_to_end();
                },
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.skip_block_comment();
                },
                _ => return,
            }
        }
    }

    /// Skips a block comment starting at the cursor.
    ///
    /// Block comments do not nest: the first `*/` closes. When the comment
    /// is not closed on this line the rest of the line is skipped; the
    /// following lines were already classified as comment body.
    fn skip_block_comment(&mut self) {
        self.cursor.advance_by(2);
        match self.cursor.remaining().find("*/") {
            Some(offset) => {
                let body = self.cursor.remaining()[..offset].chars().count();
                self.cursor.advance_by(body + 2);
            },
            None => self.cursor.skip_to_end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexerConfig, SourceBuffer, TokenKind};
    use vlark_util::Handler;

    fn kinds(code: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let buffer = SourceBuffer::from_source(code, &LexerConfig::default(), &handler).unwrap();
        tokenize(&buffer, &handler)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(kinds("   \t hello"), [TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_skip_trailing_line_comment() {
        assert_eq!(
            kinds("hello; -- comment ; with ; tokens"),
            [TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_skip_inline_block_comment() {
        assert_eq!(
            kinds("a/* comment */b"),
            [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        assert_eq!(
            kinds("a /* outer /* inner */ b */"),
            [
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::BlockCommentEnd,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_minus_is_not_comment() {
        assert_eq!(
            kinds("a - b"),
            [
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }
}
