//! Token model.
//!
//! [`TokenKind`] is the closed set of lexical categories. It is generated,
//! together with its spelling table, from a single list by `define_tokens!`,
//! so a variant and its canonical spelling are written exactly once.
//!
//! A [`Token`] never owns text. It records which line of the
//! [`SourceBuffer`](crate::SourceBuffer) it came from plus a byte range
//! inside that line; the buffer resolves the range back to a `&str`.

use std::fmt;

use vlark_util::SourcePosition;

use crate::error::TokenError;
use crate::line::{LineId, SourceBuffer};

macro_rules! define_tokens {
    (
        classes { $($class:ident => $cdesc:literal,)* }
        symbols { $($sym:ident => $stext:literal,)* }
        keywords { $($kw:ident => $ktext:literal,)* }
    ) => {
        /// Lexical category of a token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum TokenKind {
            $(
                #[doc = $cdesc]
                $class,
            )*
            $(
                #[doc = concat!("`", $stext, "`")]
                $sym,
            )*
            $(
                #[doc = concat!("keyword `", $ktext, "`")]
                $kw,
            )*
        }

        impl TokenKind {
            /// Every reserved word with its kind, in declaration order.
            pub const KEYWORDS: &'static [(&'static str, TokenKind)] =
                &[$(($ktext, TokenKind::$kw),)*];

            /// Every delimiter and operator with its kind.
            pub const SYMBOLS: &'static [(&'static str, TokenKind)] =
                &[$(($stext, TokenKind::$sym),)*];

            /// Canonical spelling, for kinds that have exactly one.
            pub const fn spelling(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$class => None,)*
                    $(TokenKind::$sym => Some($stext),)*
                    $(TokenKind::$kw => Some($ktext),)*
                }
            }

            /// Spelling if there is one, otherwise a short description.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$class => $cdesc,)*
                    $(TokenKind::$sym => $stext,)*
                    $(TokenKind::$kw => $ktext,)*
                }
            }

            /// Returns true for reserved words.
            pub const fn is_keyword(self) -> bool {
                matches!(self, $(TokenKind::$kw)|*)
            }

            /// Returns true for delimiters and operators.
            pub const fn is_symbol(self) -> bool {
                matches!(self, $(TokenKind::$sym)|*)
            }
        }
    };
}

define_tokens! {
    classes {
        Invalid => "invalid token",
        Eof => "end of file",
        Newline => "newline",
        LineComment => "line comment",
        BlockCommentText => "block comment text",
        Identifier => "identifier",
        Integer => "integer literal",
        Real => "real literal",
        Character => "character literal",
        String => "string literal",
        BitString => "bit-string literal",
        IntegerLetter => "integer followed by a letter",
    }
    symbols {
        BlockCommentStart => "/*",
        BlockCommentEnd => "*/",

        // Delimiters
        LeftParen => "(",
        RightParen => ")",
        LeftBracket => "[",
        RightBracket => "]",
        Colon => ":",
        Semicolon => ";",
        Comma => ",",
        Dot => ".",
        Tick => "'",
        Arrow => "=>",
        Assign => ":=",
        Bar => "|",
        Box => "<>",
        DoubleStar => "**",

        // Relational operators
        Equal => "=",
        NotEqual => "/=",
        Less => "<",
        LessEqual => "<=",
        Greater => ">",
        GreaterEqual => ">=",

        // Matching relational operators
        MatchEqual => "?=",
        MatchNotEqual => "?/=",
        MatchLess => "?<",
        MatchLessEqual => "?<=",
        MatchGreater => "?>",
        MatchGreaterEqual => "?>=",

        // Adding operators
        Plus => "+",
        Minus => "-",
        Ampersand => "&",

        // Later-revision delimiters
        Question => "?",
        Condition => "??",
        DoubleLess => "<<",
        DoubleGreater => ">>",
        Caret => "^",

        // PSL operators
        DoubleAmpersand => "&&",
        DoubleBar => "||",
        LeftBrace => "{",
        RightBrace => "}",
        Bang => "!",
        LeftBracketStar => "[*",
        LeftBracketPlus => "[+]",
        LeftBracketArrow => "[->",
        LeftBracketEqual => "[=",
        BarArrow => "|->",
        BarDoubleArrow => "|=>",
        RightArrow => "->",
        LeftRightArrow => "<->",
        At => "@",

        // Multiplying operators
        Star => "*",
        Slash => "/",
    }
    keywords {
        // VHDL-87
        Abs => "abs",
        Access => "access",
        After => "after",
        Alias => "alias",
        All => "all",
        And => "and",
        Architecture => "architecture",
        Array => "array",
        Assert => "assert",
        Attribute => "attribute",
        Begin => "begin",
        Block => "block",
        Body => "body",
        Buffer => "buffer",
        Bus => "bus",
        Case => "case",
        Component => "component",
        Configuration => "configuration",
        Constant => "constant",
        Disconnect => "disconnect",
        Downto => "downto",
        Else => "else",
        Elsif => "elsif",
        End => "end",
        Entity => "entity",
        Exit => "exit",
        File => "file",
        For => "for",
        Function => "function",
        Generate => "generate",
        Generic => "generic",
        Guarded => "guarded",
        If => "if",
        In => "in",
        Inout => "inout",
        Is => "is",
        Label => "label",
        Library => "library",
        Linkage => "linkage",
        Loop => "loop",
        Map => "map",
        Mod => "mod",
        Nand => "nand",
        New => "new",
        Next => "next",
        Nor => "nor",
        Not => "not",
        Null => "null",
        Of => "of",
        On => "on",
        Open => "open",
        Or => "or",
        Others => "others",
        Out => "out",
        Package => "package",
        Port => "port",
        Procedure => "procedure",
        Process => "process",
        Range => "range",
        Record => "record",
        Register => "register",
        Rem => "rem",
        Report => "report",
        Return => "return",
        Select => "select",
        Severity => "severity",
        Signal => "signal",
        Subtype => "subtype",
        Then => "then",
        To => "to",
        Transport => "transport",
        Type => "type",
        Units => "units",
        Until => "until",
        Use => "use",
        Variable => "variable",
        Wait => "wait",
        When => "when",
        While => "while",
        With => "with",
        Xor => "xor",

        // VHDL-93
        Group => "group",
        Impure => "impure",
        Inertial => "inertial",
        Literal => "literal",
        Postponed => "postponed",
        Pure => "pure",
        Reject => "reject",
        Rol => "rol",
        Ror => "ror",
        Shared => "shared",
        Sla => "sla",
        Sll => "sll",
        Sra => "sra",
        Srl => "srl",
        Unaffected => "unaffected",
        Xnor => "xnor",

        // VHDL-2000
        Protected => "protected",

        // VHDL-2008 and PSL
        Assume => "assume",
        AssumeGuarantee => "assume_guarantee",
        Context => "context",
        Cover => "cover",
        Default => "default",
        Fairness => "fairness",
        Force => "force",
        Inherit => "inherit",
        Parameter => "parameter",
        Property => "property",
        Release => "release",
        Restrict => "restrict",
        RestrictGuarantee => "restrict_guarantee",
        Sequence => "sequence",
        Strong => "strong",
        Vmode => "vmode",
        Vprop => "vprop",
        Vunit => "vunit",

        // VHDL-2019
        Private => "private",
        View => "view",

        // VHDL-AMS
        Across => "across",
        Break => "break",
        Limit => "limit",
        Nature => "nature",
        Noise => "noise",
        Procedural => "procedural",
        Quantity => "quantity",
        Reference => "reference",
        Spectrum => "spectrum",
        Subnature => "subnature",
        Terminal => "terminal",
        Through => "through",
        Tolerance => "tolerance",
    }
}

impl TokenKind {
    /// Returns true for literal classes.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Real
                | TokenKind::Character
                | TokenKind::String
                | TokenKind::BitString
                | TokenKind::IntegerLetter
        )
    }

    /// Returns true for the operators that are spelled as words.
    pub const fn is_word_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Abs
                | TokenKind::Not
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Nand
                | TokenKind::Nor
                | TokenKind::Xor
                | TokenKind::Xnor
                | TokenKind::Mod
                | TokenKind::Rem
                | TokenKind::Sll
                | TokenKind::Srl
                | TokenKind::Sla
                | TokenKind::Sra
                | TokenKind::Rol
                | TokenKind::Ror
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(text) => write!(f, "`{}`", text),
            None => f.write_str(self.name()),
        }
    }
}

/// Matching closer for an opening parenthesis or bracket.
///
/// Returns [`TokenKind::Invalid`] for every other kind.
pub const fn close_paren_kind(open: TokenKind) -> TokenKind {
    match open {
        TokenKind::LeftParen => TokenKind::RightParen,
        TokenKind::LeftBracket => TokenKind::RightBracket,
        _ => TokenKind::Invalid,
    }
}

/// Byte range within one source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// Line the text lives on
    pub line: LineId,
    /// Byte offset of the first byte
    pub start: u32,
    /// Length in bytes
    pub len: u32,
}

impl TextRange {
    /// Byte offset just past the range
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// One scanned token.
///
/// Two tokens are considered to have the same text when their spellings
/// match, independent of where they occur; use [`Token::text_eq`] or
/// [`SourceBuffer::same_text`] for that comparison. The derived `PartialEq`
/// compares kind, position and range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category
    pub kind: TokenKind,
    /// Position of the first character
    pub position: SourcePosition,
    /// Where the spelling lives in the source buffer
    pub range: TextRange,
}

impl Token {
    /// Create a token
    pub const fn new(kind: TokenKind, position: SourcePosition, range: TextRange) -> Self {
        Self {
            kind,
            position,
            range,
        }
    }

    /// Spelling of the token, borrowed from `buffer`
    #[inline]
    pub fn text<'b>(&self, buffer: &'b SourceBuffer) -> &'b str {
        buffer.slice(self.range)
    }

    /// Length of the spelling in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len as usize
    }

    /// Returns true for zero-length tokens such as end of file
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.len == 0
    }

    /// Compare the spelling against `text`
    pub fn text_eq(&self, buffer: &SourceBuffer, text: &str) -> bool {
        self.text(buffer) == text
    }

    /// Reclassify the token
    #[inline]
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    /// Move the reported column by `offset`
    ///
    /// Only the position changes; the spelling stays as it is.
    pub fn shift_column(&mut self, offset: i32) -> Result<(), TokenError> {
        self.position = self
            .position
            .shifted(offset)
            .ok_or(TokenError::ColumnUnderflow {
                column: self.position.column,
                offset,
            })?;
        Ok(())
    }

    /// Drop `prefix` from the front of the token
    ///
    /// Applies only when the spelling starts with `prefix` and is strictly
    /// longer than it; returns whether anything was removed. The column moves
    /// right by the number of characters removed.
    pub fn trim_prefix(&mut self, buffer: &SourceBuffer, prefix: &str) -> bool {
        let text = self.text(buffer);
        if text.len() <= prefix.len() || !text.starts_with(prefix) {
            return false;
        }
        let chars = prefix.chars().count() as u32;
        self.range.start += prefix.len() as u32;
        self.range.len -= prefix.len() as u32;
        self.position.column += chars;
        true
    }
}
