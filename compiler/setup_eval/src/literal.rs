//! Integer literal parsing.
//!
//! Follows `strtoull` rather than `str::parse`: the longest run of valid
//! digits is read and anything after it ignored, an empty run is zero, and
//! values past `u64::MAX` saturate instead of failing. Hex literals may keep
//! their `0x`/`0X` prefix.

/// Parse the leading digits of `text` in `radix` (2..=36).
pub fn parse_unsigned(text: &[u8], radix: u32) -> u64 {
    let digits = if radix == 16 {
        strip_hex_prefix(text)
    } else {
        text
    };

    let mut value: u64 = 0;
    for &byte in digits {
        let Some(digit) = char::from(byte).to_digit(radix) else {
            break;
        };
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .unwrap_or(u64::MAX);
    }
    value
}

/// Drop a `0x`/`0X` prefix, but only when a hex digit follows it; `0x` on
/// its own reads as the digit `0`.
fn strip_hex_prefix(text: &[u8]) -> &[u8] {
    match text {
        [b'0', b'x' | b'X', rest @ ..] if rest.first().is_some_and(u8::is_ascii_hexdigit) => rest,
        _ => text,
    }
}
