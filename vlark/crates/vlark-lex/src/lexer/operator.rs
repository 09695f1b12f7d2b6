//! Operator and delimiter lexing.
//!
//! Every method here consumes the longest spelling that starts at the
//! cursor, so `<->` is never split into `<` and `->`.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes colon or assignment.
    ///
    /// Handles: `:`, `:=`
    pub fn lex_colon(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Assign
        } else {
            TokenKind::Colon
        }
    }

    /// Lexes equals or arrow.
    ///
    /// Handles: `=`, `=>`
    pub fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Equal
        }
    }

    /// Lexes the `<` family.
    ///
    /// Handles: `<`, `<=`, `<>`, `<<`, `<->`
    pub fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_str("->") {
            TokenKind::LeftRightArrow
        } else if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else if self.cursor.match_char('>') {
            TokenKind::Box
        } else if self.cursor.match_char('<') {
            TokenKind::DoubleLess
        } else {
            TokenKind::Less
        }
    }

    /// Lexes the `>` family.
    ///
    /// Handles: `>`, `>=`, `>>`
    pub fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else if self.cursor.match_char('>') {
            TokenKind::DoubleGreater
        } else {
            TokenKind::Greater
        }
    }

    /// Lexes slash or inequality. `/*` never gets here.
    ///
    /// Handles: `/`, `/=`
    pub fn lex_slash(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEqual
        } else {
            TokenKind::Slash
        }
    }

    /// Lexes star, exponentiation or a stray comment closer.
    ///
    /// Handles: `*`, `**`, `*/`
    pub fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            TokenKind::DoubleStar
        } else if self.cursor.match_char('/') {
            TokenKind::BlockCommentEnd
        } else {
            TokenKind::Star
        }
    }

    /// Lexes ampersand or PSL conjunction.
    ///
    /// Handles: `&`, `&&`
    pub fn lex_ampersand(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            TokenKind::DoubleAmpersand
        } else {
            TokenKind::Ampersand
        }
    }

    /// Lexes bar and the PSL implication family.
    ///
    /// Handles: `|`, `||`, `|->`, `|=>`
    pub fn lex_bar(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_str("->") {
            TokenKind::BarArrow
        } else if self.cursor.match_str("=>") {
            TokenKind::BarDoubleArrow
        } else if self.cursor.match_char('|') {
            TokenKind::DoubleBar
        } else {
            TokenKind::Bar
        }
    }

    /// Lexes minus or PSL implication. `--` never gets here.
    ///
    /// Handles: `-`, `->`
    pub fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            TokenKind::RightArrow
        } else {
            TokenKind::Minus
        }
    }

    /// Lexes the condition operator and the matching relationals.
    ///
    /// Handles: `?`, `??`, `?=`, `?/=`, `?<`, `?<=`, `?>`, `?>=`
    pub fn lex_question(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '?' => self.single(TokenKind::Condition),
            '=' => self.single(TokenKind::MatchEqual),
            '/' if self.cursor.peek_char(1) == '=' => {
                self.cursor.advance_by(2);
                TokenKind::MatchNotEqual
            },
            '<' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    TokenKind::MatchLessEqual
                } else {
                    TokenKind::MatchLess
                }
            },
            '>' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    TokenKind::MatchGreaterEqual
                } else {
                    TokenKind::MatchGreater
                }
            },
            _ => TokenKind::Question,
        }
    }

    /// Lexes left bracket and the PSL repetition brackets.
    ///
    /// Handles: `[`, `[*`, `[+]`, `[->`, `[=`
    pub fn lex_left_bracket(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            TokenKind::LeftBracketStar
        } else if self.cursor.match_str("+]") {
            TokenKind::LeftBracketPlus
        } else if self.cursor.match_str("->") {
            TokenKind::LeftBracketArrow
        } else if self.cursor.match_char('=') {
            TokenKind::LeftBracketEqual
        } else {
            TokenKind::LeftBracket
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::{tokenize, LexerConfig, SourceBuffer};
    use vlark_util::Handler;

    fn lex_op(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let buffer = SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap();
        let mut kinds: Vec<TokenKind> = tokenize(&buffer, &handler)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(kinds.pop(), Some(TokenKind::Eof));
        kinds
    }

    #[test]
    fn test_every_symbol_lexes_alone() {
        for (spelling, kind) in TokenKind::SYMBOLS {
            if *kind == TokenKind::BlockCommentStart {
                continue;
            }
            assert_eq!(lex_op(spelling), [*kind], "spelling {}", spelling);
        }
    }

    #[test]
    fn test_less_family() {
        assert_eq!(lex_op("<"), [TokenKind::Less]);
        assert_eq!(lex_op("<="), [TokenKind::LessEqual]);
        assert_eq!(lex_op("<>"), [TokenKind::Box]);
        assert_eq!(lex_op("<<"), [TokenKind::DoubleLess]);
        assert_eq!(lex_op("<->"), [TokenKind::LeftRightArrow]);
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(lex_op("<=>"), [TokenKind::LessEqual, TokenKind::Greater]);
        assert_eq!(lex_op("<-"), [TokenKind::Less, TokenKind::Minus]);
        assert_eq!(lex_op("***"), [TokenKind::DoubleStar, TokenKind::Star]);
        assert_eq!(lex_op(":=="), [TokenKind::Assign, TokenKind::Equal]);
        assert_eq!(lex_op("?/"), [TokenKind::Question, TokenKind::Slash]);
    }

    #[test]
    fn test_matching_relationals() {
        assert_eq!(lex_op("?="), [TokenKind::MatchEqual]);
        assert_eq!(lex_op("?/="), [TokenKind::MatchNotEqual]);
        assert_eq!(lex_op("?<"), [TokenKind::MatchLess]);
        assert_eq!(lex_op("?<="), [TokenKind::MatchLessEqual]);
        assert_eq!(lex_op("?>"), [TokenKind::MatchGreater]);
        assert_eq!(lex_op("?>="), [TokenKind::MatchGreaterEqual]);
        assert_eq!(lex_op("??"), [TokenKind::Condition]);
    }

    #[test]
    fn test_psl_operators() {
        assert_eq!(lex_op("|->"), [TokenKind::BarArrow]);
        assert_eq!(lex_op("|=>"), [TokenKind::BarDoubleArrow]);
        assert_eq!(lex_op("||"), [TokenKind::DoubleBar]);
        assert_eq!(lex_op("&&"), [TokenKind::DoubleAmpersand]);
        assert_eq!(lex_op("[+]"), [TokenKind::LeftBracketPlus]);
        assert_eq!(lex_op("[+"), [TokenKind::LeftBracket, TokenKind::Plus]);
        assert_eq!(lex_op("[->"), [TokenKind::LeftBracketArrow]);
        assert_eq!(lex_op("{a}"), [
            TokenKind::LeftBrace,
            TokenKind::Identifier,
            TokenKind::RightBrace
        ]);
    }

    #[test]
    fn test_assignment_statements() {
        assert_eq!(lex_op("x <= y;"), [
            TokenKind::Identifier,
            TokenKind::LessEqual,
            TokenKind::Identifier,
            TokenKind::Semicolon
        ]);
        assert_eq!(lex_op("v := a ** 2 /= b"), [
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::DoubleStar,
            TokenKind::Integer,
            TokenKind::NotEqual,
            TokenKind::Identifier
        ]);
    }
}
