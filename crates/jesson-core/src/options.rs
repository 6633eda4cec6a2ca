//! Configuration for [`parse_with`](crate::parse_with) and
//! [`stringify_with`](crate::stringify_with).

use crate::limits::Limits;

/// How raw string text is turned into native strings by `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEscapes {
    /// Drop every backslash and keep the character after it. `\"` becomes `"`,
    /// but `\n` becomes `n`.
    #[default]
    Strip,
    /// Resolve the JSON escapes `\" \\ \/ \b \f \n \r \t \uXXXX`. Unknown
    /// escapes are kept verbatim and unpaired surrogates become U+FFFD.
    ///
    /// Decoded strings do not survive `stringify`: only bare quotes are
    /// escaped on output, so a decoded backslash or control character is
    /// written raw and the result may not parse again.
    Decode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub limits: Limits,
    pub escapes: StringEscapes,
}

impl Options {
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_escapes(mut self, escapes: StringEscapes) -> Self {
        self.escapes = escapes;
        self
    }
}
