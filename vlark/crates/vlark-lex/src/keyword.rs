//! Keyword table.
//!
//! A process-wide, read-only map from lower-case spelling to
//! [`TokenKind`]. It is built from [`TokenKind::KEYWORDS`] on first use and
//! never written afterwards, so any number of tokenizers may consult it from
//! any thread.

use lazy_static::lazy_static;
use vlark_util::FxHashMap;

use crate::token::TokenKind;

/// Length of the longest reserved word (`restrict_guarantee`).
pub const MAX_KEYWORD_LEN: usize = 18;

lazy_static! {
    static ref KEYWORD_TABLE: FxHashMap<&'static str, TokenKind> =
        TokenKind::KEYWORDS.iter().copied().collect();
}

/// Look up a word in the keyword table, ignoring case.
///
/// ```
/// use vlark_lex::keyword::keyword_from_ident;
/// use vlark_lex::TokenKind;
///
/// assert_eq!(keyword_from_ident("begin"), Some(TokenKind::Begin));
/// assert_eq!(keyword_from_ident("BeGiN"), Some(TokenKind::Begin));
/// assert_eq!(keyword_from_ident("begin1"), None);
/// ```
pub fn keyword_from_ident(word: &str) -> Option<TokenKind> {
    if word.len() > MAX_KEYWORD_LEN || !word.is_ascii() {
        return None;
    }
    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let lowered = &mut buf[..word.len()];
    lowered.copy_from_slice(word.as_bytes());
    lowered.make_ascii_lowercase();
    let key = std::str::from_utf8(lowered).ok()?;
    KEYWORD_TABLE.get(key).copied()
}

/// Checks if a word is reserved, ignoring case.
#[inline]
pub fn is_keyword(word: &str) -> bool {
    keyword_from_ident(word).is_some()
}

/// Number of reserved words.
pub fn keyword_count() -> usize {
    KEYWORD_TABLE.len()
}
