//! Tokenizer.
//!
//! The lexer implementation is split into smaller, focused components:
//! - `core` - Lexer struct, line walking and dispatch
//! - `comment` - Inline comment skipping
//! - `identifier` - Keywords, identifiers and bit-string literals
//! - `number` - Abstract literals
//! - `string` - Strings, character literals and extended identifiers
//! - `operator` - Operators and delimiters

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, Lexer};
