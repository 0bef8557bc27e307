//! String checks shared by the value types.

use crate::error::{CoreError, CoreResult};

/// Returns whether a string is empty or consists only of whitespace.
///
/// Whitespace is the Unicode `White_Space` property, as in
/// [`char::is_whitespace`]. Usable in `const` contexts so that enumeration
/// declarations are checked at compile time.
#[must_use]
pub const fn is_blank(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let (code, width) = decode_utf8(bytes, i);
        match char::from_u32(code) {
            Some(c) if c.is_whitespace() => {}
            _ => return false,
        }
        i += width;
    }
    true
}

/// Decodes the scalar starting at `bytes[i]`; `bytes` must be valid UTF-8.
const fn decode_utf8(bytes: &[u8], i: usize) -> (u32, usize) {
    let lead = bytes[i] as u32;
    if lead < 0x80 {
        (lead, 1)
    } else if lead < 0xE0 {
        (((lead & 0x1F) << 6) | continuation(bytes, i + 1), 2)
    } else if lead < 0xF0 {
        (
            ((lead & 0x0F) << 12)
                | (continuation(bytes, i + 1) << 6)
                | continuation(bytes, i + 2),
            3,
        )
    } else {
        (
            ((lead & 0x07) << 18)
                | (continuation(bytes, i + 1) << 12)
                | (continuation(bytes, i + 2) << 6)
                | continuation(bytes, i + 3),
            4,
        )
    }
}

const fn continuation(bytes: &[u8], i: usize) -> u32 {
    (bytes[i] & 0x3F) as u32
}

/// ## Summary
/// Rejects empty or whitespace-only arguments.
///
/// ## Errors
/// Returns `InvalidArgument` naming `name` when `value` is blank.
pub fn require_not_blank(name: &str, value: &str) -> CoreResult<()> {
    if is_blank(value) {
        return Err(CoreError::invalid_argument(
            name,
            "cannot be empty or whitespace",
        ));
    }
    Ok(())
}

/// ## Summary
/// Converts a signed integer argument to `u32`, rejecting negatives.
///
/// ## Errors
/// Returns `InvalidArgument` naming `name` when `value` is negative.
pub fn require_non_negative(name: &str, value: i32) -> CoreResult<u32> {
    u32::try_from(value).map_err(|_err| {
        CoreError::invalid_argument(name, &format!("must be non-negative, got {value}"))
    })
}

/// Compares two strings ignoring case using simple lowercase folding.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}
