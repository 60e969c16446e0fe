//! Single-byte decoding: identity passthrough and native lookup tables.
//!
//! Only three sets need tables of their own; everything else single-byte
//! goes through the WHATWG registry. CP437 is absent from that registry
//! altogether, and the registry aliases ISO-8859-9 and ISO-8859-11 to
//! windows-1254/windows-874, which reassign 0x80–0x9F — this decoder keeps
//! the C1 range as direct passthrough for the whole ISO-8859 family.

const REPLACEMENT: u16 = 0xFFFD;

/// Identity mapping: Latin-1 is the first 256 code points, and the
/// BINARY/ASCII pseudo-charsets deliberately share it so that arbitrary and
/// mislabelled payloads round-trip.
pub(crate) fn append_latin1(out: &mut String, bytes: &[u8]) {
    out.extend(bytes.iter().map(|&b| char::from(b)));
}

/// Decode through a table covering 0xA0–0xFF; bytes below 0xA0 pass through.
pub(crate) fn append_upper_table(out: &mut String, bytes: &[u8], table: &[u16; 96]) {
    out.extend(bytes.iter().map(|&b| match b {
        0x00..=0x9F => char::from(b),
        _ => scalar(table[usize::from(b - 0xA0)]),
    }));
}

/// Decode through a table covering 0x80–0xFF; bytes below 0x80 are ASCII.
pub(crate) fn append_high_table(out: &mut String, bytes: &[u8], table: &[u16; 128]) {
    out.extend(bytes.iter().map(|&b| match b {
        0x00..=0x7F => char::from(b),
        _ => scalar(table[usize::from(b - 0x80)]),
    }));
}

fn scalar(v: u16) -> char {
    // Table entries are BMP scalars; surrogate values cannot appear.
    char::from_u32(u32::from(v)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// ISO-8859-9 (Latin-5, Turkish) upper range.
///
/// Latin-1 with six positions reassigned to dotless-i and the G/S-breve and
/// S-cedilla pairs.
#[rustfmt::skip]
pub(crate) static LATIN5_UPPER: [u16; 96] = [
    // 0xA0..0xAF
    0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
    0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
    // 0xB0..0xBF
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
    0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
    // 0xC0..0xCF
    0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
    0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
    // 0xD0 Ğ                                 0xD7..
    0x011E, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
    // 0xD8..                          0xDD İ  0xDE Ş
    0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x0130, 0x015E, 0x00DF,
    // 0xE0..0xEF
    0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
    0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
    // 0xF0 ğ
    0x011F, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
    // 0xF8..                          0xFD ı  0xFE ş
    0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x0131, 0x015F, 0x00FF,
];

/// ISO-8859-11 (Latin/Thai) upper range: the TIS-620 repertoire plus NBSP.
///
/// 0xDB–0xDE and 0xFC–0xFF carry no assignment.
#[rustfmt::skip]
pub(crate) static TIS620_UPPER: [u16; 96] = [
    // 0xA0 NBSP, then ก..ฏ
    0x00A0, 0x0E01, 0x0E02, 0x0E03, 0x0E04, 0x0E05, 0x0E06, 0x0E07,
    0x0E08, 0x0E09, 0x0E0A, 0x0E0B, 0x0E0C, 0x0E0D, 0x0E0E, 0x0E0F,
    // 0xB0 ฐ..
    0x0E10, 0x0E11, 0x0E12, 0x0E13, 0x0E14, 0x0E15, 0x0E16, 0x0E17,
    0x0E18, 0x0E19, 0x0E1A, 0x0E1B, 0x0E1C, 0x0E1D, 0x0E1E, 0x0E1F,
    // 0xC0 ภ..
    0x0E20, 0x0E21, 0x0E22, 0x0E23, 0x0E24, 0x0E25, 0x0E26, 0x0E27,
    0x0E28, 0x0E29, 0x0E2A, 0x0E2B, 0x0E2C, 0x0E2D, 0x0E2E, 0x0E2F,
    // 0xD0 ะ.. 0xDA, then four holes, 0xDF ฿
    0x0E30, 0x0E31, 0x0E32, 0x0E33, 0x0E34, 0x0E35, 0x0E36, 0x0E37,
    0x0E38, 0x0E39, 0x0E3A, REPLACEMENT, REPLACEMENT, REPLACEMENT, REPLACEMENT, 0x0E3F,
    // 0xE0 เ..
    0x0E40, 0x0E41, 0x0E42, 0x0E43, 0x0E44, 0x0E45, 0x0E46, 0x0E47,
    0x0E48, 0x0E49, 0x0E4A, 0x0E4B, 0x0E4C, 0x0E4D, 0x0E4E, 0x0E4F,
    // 0xF0 ๐..๛, then four holes
    0x0E50, 0x0E51, 0x0E52, 0x0E53, 0x0E54, 0x0E55, 0x0E56, 0x0E57,
    0x0E58, 0x0E59, 0x0E5A, 0x0E5B, REPLACEMENT, REPLACEMENT, REPLACEMENT, REPLACEMENT,
];

/// CP437 (the original IBM PC codepage) high half.
#[rustfmt::skip]
pub(crate) static CP437_HIGH: [u16; 128] = [
    // 0x80 Ç ü é â ä à å ç
    0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7,
    // 0x88 ê ë è ï î ì Ä Å
    0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5,
    // 0x90 É æ Æ ô ö ò û ù
    0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9,
    // 0x98 ÿ Ö Ü ¢ £ ¥ ₧ ƒ
    0x00FF, 0x00D6, 0x00DC, 0x00A2, 0x00A3, 0x00A5, 0x20A7, 0x0192,
    // 0xA0 á í ó ú ñ Ñ ª º
    0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA,
    // 0xA8 ¿ ⌐ ¬ ½ ¼ ¡ « »
    0x00BF, 0x2310, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB,
    // 0xB0 ░ ▒ ▓ │ ┤ ╡ ╢ ╖
    0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x2561, 0x2562, 0x2556,
    // 0xB8 ╕ ╣ ║ ╗ ╝ ╜ ╛ ┐
    0x2555, 0x2563, 0x2551, 0x2557, 0x255D, 0x255C, 0x255B, 0x2510,
    // 0xC0 └ ┴ ┬ ├ ─ ┼ ╞ ╟
    0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x255E, 0x255F,
    // 0xC8 ╚ ╔ ╩ ╦ ╠ ═ ╬ ╧
    0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x2567,
    // 0xD0 ╨ ╤ ╥ ╙ ╘ ╒ ╓ ╫
    0x2568, 0x2564, 0x2565, 0x2559, 0x2558, 0x2552, 0x2553, 0x256B,
    // 0xD8 ╪ ┘ ┌ █ ▄ ▌ ▐ ▀
    0x256A, 0x2518, 0x250C, 0x2588, 0x2584, 0x258C, 0x2590, 0x2580,
    // 0xE0 α ß Γ π Σ σ µ τ
    0x03B1, 0x00DF, 0x0393, 0x03C0, 0x03A3, 0x03C3, 0x00B5, 0x03C4,
    // 0xE8 Φ Θ Ω δ ∞ φ ε ∩
    0x03A6, 0x0398, 0x03A9, 0x03B4, 0x221E, 0x03C6, 0x03B5, 0x2229,
    // 0xF0 ≡ ± ≥ ≤ ⌠ ⌡ ÷ ≈
    0x2261, 0x00B1, 0x2265, 0x2264, 0x2320, 0x2321, 0x00F7, 0x2248,
    // 0xF8 ° ∙ · √ ⁿ ² ■ nbsp
    0x00B0, 0x2219, 0x00B7, 0x221A, 0x207F, 0x00B2, 0x25A0, 0x00A0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_hold_scalar_values_only() {
        for &v in LATIN5_UPPER.iter().chain(&TIS620_UPPER).chain(&CP437_HIGH) {
            assert!(char::from_u32(u32::from(v)).is_some(), "bad entry {v:#06X}");
        }
    }

    #[test]
    fn latin5_diverges_from_latin1_in_exactly_six_positions() {
        let diverging: Vec<u8> = (0xA0u16..=0xFF)
            .filter(|&b| LATIN5_UPPER[usize::from(b - 0xA0)] != b)
            .map(|b| u8::try_from(b).unwrap())
            .collect();
        assert_eq!(diverging, [0xD0, 0xDD, 0xDE, 0xF0, 0xFD, 0xFE]);
    }

    #[test]
    fn cp437_spot_checks() {
        let mut out = String::new();
        append_high_table(&mut out, &[0x80, 0x9B, 0xE1, 0xF6, 0xFF], &CP437_HIGH);
        assert_eq!(out, "Ç¢ß÷\u{00A0}");
    }

    #[test]
    fn tis620_holes_substitute() {
        let mut out = String::new();
        append_upper_table(&mut out, &[0xA1, 0xDB, 0xDF, 0xFC], &TIS620_UPPER);
        assert_eq!(out, "\u{0E01}\u{FFFD}\u{0E3F}\u{FFFD}");
    }
}
