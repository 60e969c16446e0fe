//! Byte-buffer decoding: one strategy per character set.
//!
//! Every variant of [`CharacterSet`] dispatches to one of four strategies:
//!
//! * identity passthrough (Binary, ASCII, ISO-8859-1);
//! * native single-byte table lookup, for the sets whose required mapping
//!   differs from the WHATWG Encoding Standard registry (CP437, ISO-8859-9,
//!   ISO-8859-11);
//! * fixed-width code-unit decoding with byte-order swap (UTF-16, UTF-32);
//! * delegation to `encoding_rs` for everything the WHATWG registry covers
//!   faithfully, including the variable-width CJK sets.
//!
//! Decoding is total: undefined bytes and malformed sequences become U+FFFD
//! and no input ever raises an error.

mod single_byte;
mod unicode;

use crate::charset::CharacterSet;

/// Decodes a byte buffer under the given character set.
///
/// The result holds only Unicode scalar values; its `char` count depends on
/// the charset's unit width and need not equal the byte count.
#[must_use]
pub fn decode(bytes: &[u8], charset: CharacterSet) -> String {
    // Starting estimate; ASCII-heavy payloads never reallocate.
    let mut out = String::with_capacity(bytes.len());
    decode_into(&mut out, bytes, charset);
    out
}

/// Decodes a byte buffer under the given character set, appending to `out`.
///
/// This is the primitive `decode` wraps: multi-segment payloads switch
/// charsets mid-stream (an ECI designator can occur between segments), and
/// readers accumulate the segments into one text field.
pub fn decode_into(out: &mut String, bytes: &[u8], charset: CharacterSet) {
    use CharacterSet as Cs;

    match charset {
        Cs::Binary | Cs::Ascii | Cs::Iso8859_1 => single_byte::append_latin1(out, bytes),
        Cs::Iso8859_9 => single_byte::append_upper_table(out, bytes, &single_byte::LATIN5_UPPER),
        Cs::Iso8859_11 => single_byte::append_upper_table(out, bytes, &single_byte::TIS620_UPPER),
        Cs::Cp437 => single_byte::append_high_table(out, bytes, &single_byte::CP437_HIGH),
        Cs::Utf8 => out.push_str(&String::from_utf8_lossy(bytes)),
        Cs::Utf16Be => unicode::append_utf16(out, bytes, u16::from_be_bytes),
        Cs::Utf16Le => unicode::append_utf16(out, bytes, u16::from_le_bytes),
        Cs::Utf32Be => unicode::append_utf32(out, bytes, u32::from_be_bytes),
        Cs::Utf32Le => unicode::append_utf32(out, bytes, u32::from_le_bytes),
        Cs::Iso8859_2
        | Cs::Iso8859_3
        | Cs::Iso8859_4
        | Cs::Iso8859_5
        | Cs::Iso8859_6
        | Cs::Iso8859_7
        | Cs::Iso8859_8
        | Cs::Iso8859_10
        | Cs::Iso8859_13
        | Cs::Iso8859_14
        | Cs::Iso8859_15
        | Cs::Iso8859_16
        | Cs::Cp1250
        | Cs::Cp1251
        | Cs::Cp1252
        | Cs::Cp1256
        | Cs::ShiftJis
        | Cs::Big5
        | Cs::Gb2312
        | Cs::Gb18030
        | Cs::EucJp
        | Cs::EucKr => {
            // Lossy conversion: encoding_rs substitutes U+FFFD for undefined
            // bytes and malformed sequences, matching the native paths.
            let (text, _had_errors) = registry(charset).decode_without_bom_handling(bytes);
            out.push_str(&text);
        }
    }
}

/// The `encoding_rs` encoding backing a delegated charset.
///
/// Only called for the delegated variants of the `decode_into` match; the
/// natively decoded sets are unreachable here.
fn registry(charset: CharacterSet) -> &'static encoding_rs::Encoding {
    use CharacterSet as Cs;

    match charset {
        Cs::Iso8859_2 => encoding_rs::ISO_8859_2,
        Cs::Iso8859_3 => encoding_rs::ISO_8859_3,
        Cs::Iso8859_4 => encoding_rs::ISO_8859_4,
        Cs::Iso8859_5 => encoding_rs::ISO_8859_5,
        Cs::Iso8859_6 => encoding_rs::ISO_8859_6,
        Cs::Iso8859_7 => encoding_rs::ISO_8859_7,
        Cs::Iso8859_8 => encoding_rs::ISO_8859_8,
        Cs::Iso8859_10 => encoding_rs::ISO_8859_10,
        Cs::Iso8859_13 => encoding_rs::ISO_8859_13,
        Cs::Iso8859_14 => encoding_rs::ISO_8859_14,
        Cs::Iso8859_15 => encoding_rs::ISO_8859_15,
        Cs::Iso8859_16 => encoding_rs::ISO_8859_16,
        Cs::Cp1250 => encoding_rs::WINDOWS_1250,
        Cs::Cp1251 => encoding_rs::WINDOWS_1251,
        Cs::Cp1252 => encoding_rs::WINDOWS_1252,
        Cs::Cp1256 => encoding_rs::WINDOWS_1256,
        Cs::ShiftJis => encoding_rs::SHIFT_JIS,
        Cs::Big5 => encoding_rs::BIG5,
        // GB2312 is decoded through GBK, its strict superset; the GB18030
        // table adds the four-byte sequences on top of that.
        Cs::Gb2312 => encoding_rs::GBK,
        Cs::Gb18030 => encoding_rs::GB18030,
        Cs::EucJp => encoding_rs::EUC_JP,
        Cs::EucKr => encoding_rs::EUC_KR,
        Cs::Binary
        | Cs::Ascii
        | Cs::Iso8859_1
        | Cs::Iso8859_9
        | Cs::Iso8859_11
        | Cs::Cp437
        | Cs::Utf8
        | Cs::Utf16Be
        | Cs::Utf16Le
        | Cs::Utf32Be
        | Cs::Utf32Le => unreachable!("{charset} is decoded natively"),
    }
}
