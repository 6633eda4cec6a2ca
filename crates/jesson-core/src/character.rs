//! Character classification for the tokenizer.
//!
//! Every predicate takes a single character code and answers from a fixed
//! ASCII table. None of them fail.

/// `{ } [ ] : ,`
pub fn is_punctuator(ch: u8) -> bool {
    matches!(ch, b'{' | b'}' | b'[' | b']' | b':' | b',')
}

/// ASCII letters `A-Z` and `a-z`.
pub fn is_identifier(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_string_start(ch: u8) -> bool {
    ch == b'"'
}

/// ASCII digits `0-9`.
pub fn is_integer(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// A minus sign or a digit.
pub fn is_integer_start(ch: u8) -> bool {
    ch == b'-' || is_integer(ch)
}

/// The only two whitespace codes the tokenizer skips: space and newline.
/// Tabs and carriage returns are not whitespace here.
pub fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\n'
}
