//! Charset inference for payloads that carry no encoding indicator.

use crate::charset::CharacterSet;

/// Guesses the character set of an untagged payload.
///
/// Heuristic, in priority order:
///
/// 1. empty input returns `fallback`;
/// 2. a UTF-16 byte-order mark selects the matching UTF-16 order;
/// 3. input that is valid UTF-8 *and* uses at least one multi-byte sequence
///    selects [`CharacterSet::Utf8`]; pure ASCII returns `fallback`, which
///    reads it identically;
/// 4. a buffer whose high bytes all form structurally valid Shift_JIS
///    (paired lead/trail bytes or half-width katakana) selects
///    [`CharacterSet::ShiftJis`];
/// 5. anything else returns `fallback`.
///
/// Callers pass their regional default as `fallback`, conventionally
/// [`CharacterSet::Iso8859_1`].
#[must_use]
pub fn guess_charset(bytes: &[u8], fallback: CharacterSet) -> CharacterSet {
    if bytes.is_empty() {
        return fallback;
    }
    match bytes {
        [0xFE, 0xFF, ..] => return CharacterSet::Utf16Be,
        [0xFF, 0xFE, ..] => return CharacterSet::Utf16Le,
        _ => {}
    }
    if let Ok(text) = core::str::from_utf8(bytes) {
        return if text.is_ascii() { fallback } else { CharacterSet::Utf8 };
    }
    if looks_like_shift_jis(bytes) {
        return CharacterSet::ShiftJis;
    }
    fallback
}

/// Structural Shift_JIS scan.
///
/// Every byte must be ASCII, half-width katakana (0xA1–0xDF), or a JIS X
/// 0208 lead byte followed by a valid trail byte; at least one non-ASCII
/// character must occur before the buffer counts as a match. The
/// user-defined lead range 0xF0–0xFC is deliberately not accepted — mostly
/// Latin data with stray high bytes would otherwise slip through.
fn looks_like_shift_jis(bytes: &[u8]) -> bool {
    let mut japanese = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x00..=0x7F => i += 1,
            0xA1..=0xDF => {
                japanese += 1;
                i += 1;
            }
            0x81..=0x9F | 0xE0..=0xEF => {
                let Some(&trail) = bytes.get(i + 1) else {
                    return false;
                };
                if !matches!(trail, 0x40..=0x7E | 0x80..=0xFC) {
                    return false;
                }
                japanese += 1;
                i += 2;
            }
            _ => return false,
        }
    }
    japanese > 0
}
