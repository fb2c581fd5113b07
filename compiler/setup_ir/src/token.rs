//! Classified tokens as produced by the setup lexer.

use std::fmt;

/// Lexical classification of a token.
///
/// The lexer has already decided what each token is; the evaluator trusts
/// this tag and never re-inspects the token's shape to second-guess it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare identifier: `install_root`
    Identifier,
    /// Hexadecimal integer: `0x1F`
    HexInteger,
    /// Octal integer (leading zero): `017`
    OctalInteger,
    /// Decimal integer: `42`
    DecimalInteger,
    /// Double-quoted string with C escapes: `"a\tb"`
    String,
    /// Reserved word (`if`, `else`, ...)
    Keyword,
    /// Operators and delimiters (`[`, `{`, `:`, `,`, ...)
    Punctuator,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::HexInteger => "hex integer",
            TokenKind::OctalInteger => "octal integer",
            TokenKind::DecimalInteger => "decimal integer",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Punctuator => "punctuator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its classification plus the byte range it covers in the script.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character in the script.
    pub position: u32,
    /// Length in bytes.
    pub size: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, position: u32, size: u32) -> Self {
        Token {
            kind,
            position,
            size,
        }
    }

    /// Byte range of the token, or `None` if it does not fit in `usize`.
    pub fn range(&self) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(self.position).ok()?;
        let len = usize::try_from(self.size).ok()?;
        Some(start..start.checked_add(len)?)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}+{}", self.kind, self.position, self.size)
    }
}

#[cfg(test)]
mod tests;
