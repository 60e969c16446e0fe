//! Fixed-width Unicode transform decoding (UTF-16 and UTF-32, both orders).
//!
//! Substitution policy: an unpaired surrogate, a non-scalar UTF-32 unit, or
//! a truncated trailing unit each yield one U+FFFD. Byte-order marks are not
//! stripped — payload bytes are authoritative, so a leading BOM decodes to
//! U+FEFF like any other unit.

/// Decode byte pairs as UTF-16 code units, combining surrogate pairs.
pub(crate) fn append_utf16(out: &mut String, bytes: &[u8], unit: fn([u8; 2]) -> u16) {
    let units = bytes.chunks_exact(2).map(|c| unit([c[0], c[1]]));
    out.extend(char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)));
    if !bytes.chunks_exact(2).remainder().is_empty() {
        out.push(char::REPLACEMENT_CHARACTER);
    }
}

/// Decode 4-byte groups, each yielding exactly one code point.
pub(crate) fn append_utf32(out: &mut String, bytes: &[u8], unit: fn([u8; 4]) -> u32) {
    let groups = bytes.chunks_exact(4);
    let truncated = !groups.remainder().is_empty();
    out.extend(groups.map(|c| {
        char::from_u32(unit([c[0], c[1], c[2], c[3]])).unwrap_or(char::REPLACEMENT_CHARACTER)
    }));
    if truncated {
        out.push(char::REPLACEMENT_CHARACTER);
    }
}
