//! vlark-lex - Lexical front end for VHDL
//!
//! This crate turns VHDL source text into a position-tracked stream of
//! classified tokens. It works in two steps:
//!
//! 1. The **Line Classifier** ([`SourceBuffer`]) splits the source into
//!    physical lines and tags each one as blank, comment or code. Block
//!    comments spanning several lines are cut out here as a single region.
//! 2. The **Tokenizer** ([`Lexer`], [`tokenize`]) scans the code lines into
//!    [`Token`]s, each carrying its [`TokenKind`], its 1-based
//!    [`SourcePosition`](vlark_util::SourcePosition) and the range of its
//!    spelling in the buffer.
//!
//! Problems the scan can recover from are reported to a
//! [`Handler`](vlark_util::Handler) and do not stop it; only an unreadable
//! file, an overlong line or an empty source abort.
//!
//! # Example Usage
//!
//! ```
//! use vlark_lex::{tokenize, LexerConfig, SourceBuffer, TokenKind};
//! use vlark_util::Handler;
//!
//! let source = "entity counter is\n  -- no ports\nend entity;";
//! let handler = Handler::new();
//! let buffer = SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap();
//! let tokens = tokenize(&buffer, &handler).unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Entity);
//! assert_eq!(tokens[1].text(&buffer), "counter");
//! // The comment line still counts.
//! assert_eq!(tokens[3].position.line, 3);
//! ```
//!
//! # Module Structure
//!
//! - [`line`] - Line Classifier and the source buffer
//! - [`lexer`] - Tokenizer
//! - [`token`] - Token model and the token kind table
//! - [`keyword`] - Case-insensitive reserved-word lookup
//! - [`cursor`] - Character cursor over one line
//! - [`charset`] - Character classes
//!
//! # Token Categories
//!
//! - **Keywords**: reserved words of VHDL-87 through VHDL-2019, PSL and
//!   VHDL-AMS, matched in any case
//! - **Identifiers**: basic (`data_in`) and extended (`\my sig\`)
//! - **Literals**: integer, real, based (`16#FF#`), character (`'1'`),
//!   string (`"text"`), bit string (`x"F0"`), and integers followed by a
//!   unit or size letter (`10ns`, `12ux"F0"`)
//! - **Delimiters and operators**: from `(` and `;` to the matching
//!   relationals (`?/=`) and the PSL family (`|->`, `[*`, `<->`)
//! - **Eof**: one per source, after the last line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod line;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LoadError, LoadResult, TokenError, TokenizeError};
pub use keyword::{is_keyword, keyword_from_ident};
pub use lexer::{tokenize, Lexer};
pub use line::{LineCategory, LineId, SourceBuffer, SourceLine};
pub use token::{TextRange, Token, TokenKind};

static_assertions::assert_eq_size!(Token, [u32; 6]);
static_assertions::assert_impl_all!(SourceBuffer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use vlark_util::Handler;

    /// Collect kinds and spellings, without the end-of-file token.
    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        let buffer = SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap();
        tokenize(&buffer, &handler)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| (t.kind, t.text(&buffer).to_string()))
            .collect()
    }

    fn contains(tokens: &[(TokenKind, String)], kind: TokenKind, text: &str) -> bool {
        tokens.iter().any(|(k, t)| *k == kind && t == text)
    }

    #[test]
    fn test_entity_declaration() {
        let source = r#"
library ieee;
use ieee.std_logic_1164.all;

entity counter is
    generic (WIDTH : natural := 8);
    port (
        clk   : in  std_logic;
        count : out std_logic_vector(WIDTH - 1 downto 0)
    );
end entity counter;
"#;
        let tokens = lex_all(source);

        assert_eq!(tokens[0].0, TokenKind::Library);
        assert!(contains(&tokens, TokenKind::Identifier, "std_logic_1164"));
        assert!(contains(&tokens, TokenKind::All, "all"));
        assert!(contains(&tokens, TokenKind::Generic, "generic"));
        assert!(contains(&tokens, TokenKind::Assign, ":="));
        assert!(contains(&tokens, TokenKind::Downto, "downto"));
        assert!(contains(&tokens, TokenKind::Identifier, "WIDTH"));
        assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::Semicolon));
    }

    #[test]
    fn test_architecture_body() {
        let source = r#"
architecture rtl of counter is
    signal value : unsigned(WIDTH - 1 downto 0) := (others => '0');
begin
    process (clk)
    begin
        if rising_edge(clk) then
            value <= value + 1;
        end if;
    end process;
    count <= std_logic_vector(value);
end architecture rtl;
"#;
        let tokens = lex_all(source);

        assert!(contains(&tokens, TokenKind::Architecture, "architecture"));
        assert!(contains(&tokens, TokenKind::Others, "others"));
        assert!(contains(&tokens, TokenKind::Arrow, "=>"));
        assert!(contains(&tokens, TokenKind::Character, "'0'"));
        assert!(contains(&tokens, TokenKind::Process, "process"));
        assert!(contains(&tokens, TokenKind::LessEqual, "<="));
    }

    #[test]
    fn test_attributes_and_literals() {
        let source = r#"
constant MASK : std_logic_vector := x"FF" & 8ux"0F";
constant T : time := 10 ns;
wait for 2.5 us;
assert v'length = 16#10# report "bad ""length""" severity error;
"#;
        let tokens = lex_all(source);

        assert!(contains(&tokens, TokenKind::BitString, r#"x"FF""#));
        assert!(contains(&tokens, TokenKind::IntegerLetter, "8"));
        assert!(contains(&tokens, TokenKind::BitString, r#"ux"0F""#));
        assert!(contains(&tokens, TokenKind::Integer, "10"));
        assert!(contains(&tokens, TokenKind::Real, "2.5"));
        assert!(contains(&tokens, TokenKind::Tick, "'"));
        assert!(contains(&tokens, TokenKind::Integer, "16#10#"));
        assert!(contains(&tokens, TokenKind::String, r#""bad ""length""""#));
    }

    #[test]
    fn test_vhdl_2008_and_psl() {
        let source = r#"
y <= a ?= b;
z <= ?? en;
-- psl assert always req |-> next ack;
assert always (req -> eventually! ack);
"#;
        let tokens = lex_all(source);

        assert!(contains(&tokens, TokenKind::MatchEqual, "?="));
        assert!(contains(&tokens, TokenKind::Condition, "??"));
        assert!(!contains(&tokens, TokenKind::BarArrow, "|->"));
        assert!(contains(&tokens, TokenKind::RightArrow, "->"));
        assert!(contains(&tokens, TokenKind::Bang, "!"));
    }

    #[test]
    fn test_block_comment_region_keeps_numbering() {
        let handler = Handler::new();
        let source = "/* header\n   spanning\n   lines */\nentity e is end;";
        let buffer = SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap();
        let tokens = tokenize(&buffer, &handler).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Entity);
        assert_eq!(tokens[0].position.line, 4);
        assert_eq!(tokens[0].position.column, 1);
    }
}
