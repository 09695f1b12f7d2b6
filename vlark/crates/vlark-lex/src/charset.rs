//! Character classes for the lexer.
//!
//! Source text is treated as single-byte text: letters and digits are the
//! ASCII ones, and every other printable character is only ever valid inside
//! a literal or comment.

/// Checks if a character separates tokens.
///
/// Includes the carriage return left behind by CRLF line endings and the
/// Latin-1 non-breaking space.
///
/// ```
/// use vlark_lex::charset::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('_'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0b' | '\x0c' | '\u{a0}')
}

/// Checks if a character starts a word (identifier or keyword candidate).
#[inline]
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character continues a word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character may appear inside a string, character or
/// bit-string literal.
#[inline]
pub fn is_graphic(c: char) -> bool {
    !c.is_control()
}

/// Numeric value of an extended digit (`0-9`, `a-f`, `A-F`).
///
/// ```
/// use vlark_lex::charset::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('c'), Some(12));
/// assert_eq!(digit_value('G'), None);
/// ```
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Checks if a character is a digit in the given base (2 through 16).
///
/// ```
/// use vlark_lex::charset::is_digit_in_base;
///
/// assert!(is_digit_in_base('1', 2));
/// assert!(!is_digit_in_base('2', 2));
/// assert!(is_digit_in_base('F', 16));
/// assert!(is_digit_in_base('6', 7));
/// assert!(!is_digit_in_base('7', 7));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    (2..=16).contains(&base) && digit_value(c).is_some_and(|d| d < base)
}

/// Length of the leading run of letters, digits and underscores.
///
/// ```
/// use vlark_lex::charset::get_name_len;
///
/// assert_eq!(get_name_len("abs_23_d wok"), 8);
/// assert_eq!(get_name_len("+x"), 0);
/// ```
pub fn get_name_len(text: &str) -> usize {
    text.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

/// Checks the basic-identifier rules.
///
/// A basic identifier starts with a letter, contains only letters, digits
/// and underscores, never has two underscores in a row and does not end in
/// an underscore.
///
/// ```
/// use vlark_lex::charset::is_valid_identifier;
///
/// assert!(is_valid_identifier("data_in"));
/// assert!(is_valid_identifier("begin1"));
/// assert!(!is_valid_identifier("_begin"));
/// assert!(!is_valid_identifier("a__b"));
/// assert!(!is_valid_identifier("a_"));
/// assert!(!is_valid_identifier("1a"));
/// ```
pub fn is_valid_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if bytes.last() == Some(&b'_') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'_')
        && !text.contains("__")
}

/// Explain why `text` is not a valid basic identifier.
///
/// Returns `None` for valid identifiers.
pub fn identifier_problem(text: &str) -> Option<&'static str> {
    let first = text.chars().next()?;
    if first == '_' {
        Some("identifiers cannot start with an underscore")
    } else if !first.is_ascii_alphabetic() {
        Some("identifiers must start with a letter")
    } else if text.contains("__") {
        Some("identifiers cannot contain consecutive underscores")
    } else if text.ends_with('_') {
        Some("identifiers cannot end with an underscore")
    } else if !text.chars().all(is_word_char) {
        Some("identifiers may only contain letters, digits and underscores")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_name_len() {
        assert_eq!(get_name_len("abs_23_d wok"), 8);
        assert_ne!(get_name_len("abs_23_d wok"), 0);
        assert_eq!(get_name_len(""), 0);
        assert_eq!(get_name_len("x"), 1);
        assert_eq!(get_name_len("_a(1)"), 2);
    }

    #[test]
    fn test_is_digit_in_base_rejects_bad_bases() {
        assert!(!is_digit_in_base('0', 1));
        assert!(!is_digit_in_base('0', 17));
        assert!(!is_digit_in_base('0', 0));
    }

    #[test]
    fn test_is_digit_in_base_hex() {
        for c in ('0'..='9').chain('a'..='f').chain('A'..='F') {
            assert!(is_digit_in_base(c, 16), "{} should be hex digit", c);
        }
        assert!(!is_digit_in_base('g', 16));
    }

    #[test]
    fn test_valid_identifiers() {
        for ok in ["a", "Z", "clk_50mhz", "a1_b2_c3", "BEGIN1"] {
            assert!(is_valid_identifier(ok), "{} should be valid", ok);
            assert_eq!(identifier_problem(ok), None);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for bad in ["", "_", "_a", "9a", "a__b", "a_", "a-b"] {
            assert!(!is_valid_identifier(bad), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_identifier_problem_messages() {
        assert_eq!(
            identifier_problem("_begin"),
            Some("identifiers cannot start with an underscore")
        );
        assert_eq!(
            identifier_problem("a__b"),
            Some("identifiers cannot contain consecutive underscores")
        );
        assert_eq!(
            identifier_problem("tail_"),
            Some("identifiers cannot end with an underscore")
        );
    }

    #[test]
    fn test_whitespace_classes() {
        for c in [' ', '\t', '\r', '\x0b', '\x0c', '\u{a0}'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('a'));
    }

    #[test]
    fn test_word_classes() {
        assert!(is_word_start('_'));
        assert!(is_word_start('q'));
        assert!(!is_word_start('3'));
        assert!(is_word_char('3'));
        assert!(!is_word_char('\u{e9}'));
    }

    #[test]
    fn test_graphic() {
        assert!(is_graphic('a'));
        assert!(is_graphic('\u{e9}'));
        assert!(!is_graphic('\x07'));
    }
}
