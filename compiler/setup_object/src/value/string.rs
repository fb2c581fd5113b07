//! String objects.
//!
//! A string's buffer always ends in a NUL terminator, and the stored size
//! counts it: `size() == as_bytes().len() + 1`. Scripts hand these buffers to
//! C-string consumers, which is why the terminator is part of the object
//! rather than something added on the way out.

use std::borrow::Cow;
use std::fmt;

use super::heap::{LiveGuard, ObjectHeap};
use crate::EvalError;

/// Byte string with a counted trailing terminator.
pub struct SetupString {
    /// Content followed by exactly one NUL.
    buffer: Vec<u8>,
    _live: LiveGuard,
}

impl SetupString {
    /// Copy `bytes` into a new string, appending the terminator.
    ///
    /// The buffer is sized for the raw bytes plus the terminator, which is
    /// also enough room for an in-place escape decode of those bytes.
    pub fn from_raw(heap: &ObjectHeap, bytes: &[u8]) -> Result<Self, EvalError> {
        let live = heap.allocate()?;
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(bytes.len().saturating_add(1))?;
        buffer.extend_from_slice(bytes);
        buffer.push(0);
        Ok(SetupString {
            buffer,
            _live: live,
        })
    }

    /// Rewrite the buffer in place.
    ///
    /// `rewrite` gets the whole buffer, terminator slot included, and returns
    /// the new stored size. It must have written a NUL at `size - 1`. The
    /// buffer can only shrink.
    pub fn rewrite_in_place(&mut self, rewrite: impl FnOnce(&mut [u8]) -> usize) {
        let size = rewrite(&mut self.buffer);
        debug_assert!(
            size >= 1 && size <= self.buffer.len(),
            "rewrite returned size {size} for a buffer of {}",
            self.buffer.len()
        );
        self.buffer.truncate(size);
        if self.buffer.last() != Some(&0) {
            // Keep the terminator invariant even if the rewrite broke it.
            self.buffer.push(0);
        }
    }

    /// Stored size, terminator included.
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Content without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.split_last().map_or(&[], |(_, content)| content)
    }

    /// Content plus terminator.
    #[inline]
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl PartialEq for SetupString {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl Eq for SetupString {}

impl fmt::Debug for SetupString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

/// Write `bytes` as a quoted script literal, escaping what the decoder would
/// otherwise interpret.
pub(super) fn write_quoted(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("\"")?;
    for &byte in bytes {
        match byte {
            b'"' => f.write_str("\\\"")?,
            b'\\' => f.write_str("\\\\")?,
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            b'\t' => f.write_str("\\t")?,
            0x20..=0x7e => write!(f, "{}", char::from(byte))?,
            _ => write!(f, "\\x{byte:02x}")?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
