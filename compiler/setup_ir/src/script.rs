//! The source buffer tokens refer into.

use std::fmt;

use crate::Token;

/// An immutable setup script.
///
/// Tokens carry byte offsets, not text, so every consumer that needs a
/// token's characters goes through [`Script::token_text`].
#[derive(Clone, PartialEq, Eq)]
pub struct Script {
    data: Box<[u8]>,
}

impl Script {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Script {
            data: data.into().into_boxed_slice(),
        }
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes covered by `token`, or `None` if the token points outside the script.
    pub fn token_text(&self, token: &Token) -> Option<&[u8]> {
        self.data.get(token.range()?)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script").field("len", &self.data.len()).finish()
    }
}
