//! In-place decoding of C-style string literal escapes.
//!
//! Recognised escapes:
//!
//! - `\r` `\n` `\f` `\v` `\t` `\a` `\b`: the matching control byte
//! - `\xH` / `\xHH`: one byte from up to two hex digits
//! - `\O` / `\OO` / `\OOO`: one byte from up to three octal digits
//! - `\` followed by anything else: that byte, literally (`\"`, `\\`, `\q`)
//!
//! Malformed numeric escapes are not errors: a `\x` followed by a non-hex
//! byte decodes to `0x00` and consumes nothing more.

/// Decode the literal in `buffer` in place and return the stored size.
///
/// `buffer` holds the literal text starting just past the opening quote,
/// through the closing quote, followed by one spare byte for the
/// terminator. Decoding stops at the first unescaped `"` (or at the spare
/// byte if there is none), writes a NUL after the decoded bytes, and
/// returns the number of bytes in use *including* that NUL.
///
/// Every escape is at least two source bytes producing one output byte, so
/// the write cursor never passes the read cursor and the buffer only
/// shrinks.
pub fn decode_escapes(buffer: &mut [u8]) -> usize {
    let Some(end) = buffer.len().checked_sub(1) else {
        return 0;
    };

    let mut read = 0;
    let mut write = 0;
    while read < end && buffer[read] != b'"' {
        debug_assert!(write <= read, "escape decoder overran its input");
        let byte = buffer[read];
        read += 1;

        let decoded = if byte == b'\\' {
            if read == end {
                // A lone backslash with nothing after it.
                break;
            }
            let designator = buffer[read];
            read += 1;
            match designator {
                b'r' => b'\r',
                b'n' => b'\n',
                b'f' => 0x0c,
                b'v' => 0x0b,
                b't' => b'\t',
                b'a' => 0x07,
                b'b' => 0x08,
                b'x' => {
                    let (value, consumed) = hex_escape(&buffer[read..end]);
                    read += consumed;
                    value
                }
                b'0'..=b'7' => {
                    let (value, consumed) = octal_escape(designator, &buffer[read..end]);
                    read += consumed;
                    value
                }
                other => other,
            }
        } else {
            byte
        };

        buffer[write] = decoded;
        write += 1;
    }

    debug_assert!(write <= end, "no room left for the terminator");
    buffer[write] = 0;
    write + 1
}

/// Up to two hex digits from the front of `digits`.
fn hex_escape(digits: &[u8]) -> (u8, usize) {
    let mut value: u8 = 0;
    let mut consumed = 0;
    for &digit in digits.iter().take(2) {
        let Some(nibble) = char::from(digit).to_digit(16) else {
            break;
        };
        value = (value << 4) | nibble_byte(nibble);
        consumed += 1;
    }
    (value, consumed)
}

/// An octal escape whose first digit is `first`, extended by up to two more
/// digits from the front of `rest`. Wraps to eight bits.
fn octal_escape(first: u8, rest: &[u8]) -> (u8, usize) {
    let mut value = first - b'0';
    let mut consumed = 0;
    for &digit in rest.iter().take(2) {
        if !(b'0'..=b'7').contains(&digit) {
            break;
        }
        value = value.wrapping_shl(3).wrapping_add(digit - b'0');
        consumed += 1;
    }
    (value, consumed)
}

#[inline]
fn nibble_byte(nibble: u32) -> u8 {
    u8::try_from(nibble).unwrap_or(0)
}
