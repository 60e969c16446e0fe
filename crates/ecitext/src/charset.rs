//! The closed set of character encodings a symbol payload can declare.

use core::fmt;
use core::str::FromStr;

use crate::error::CharsetLabelError;

/// A character set a byte payload can be tagged with.
///
/// The set is closed: decoding dispatches by exhaustive match, so adding a
/// variant without wiring up its strategy fails to compile. Variants cover
/// the encodings assignable through ECI designators plus the
/// [`Binary`](CharacterSet::Binary) identity pseudo-charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CharacterSet {
    /// 7-bit ASCII, decoded permissively: bytes above 0x7F pass through as
    /// raw code points rather than failing, since payloads are routinely
    /// mislabelled.
    Ascii,
    /// Identity pseudo-charset: byte value n decodes to code point U+00n.
    Binary,
    Iso8859_1,
    Iso8859_2,
    Iso8859_3,
    Iso8859_4,
    Iso8859_5,
    Iso8859_6,
    Iso8859_7,
    Iso8859_8,
    Iso8859_9,
    Iso8859_10,
    /// Latin/Thai (TIS-620 repertoire). There is no ISO 8859 part 12.
    Iso8859_11,
    Iso8859_13,
    Iso8859_14,
    Iso8859_15,
    Iso8859_16,
    Cp437,
    Cp1250,
    Cp1251,
    Cp1252,
    Cp1256,
    ShiftJis,
    Big5,
    Gb2312,
    Gb18030,
    EucJp,
    EucKr,
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
}

impl CharacterSet {
    /// Every supported character set, in declaration order.
    ///
    /// Useful for exhaustive conformance sweeps.
    pub const ALL: &'static [CharacterSet] = &[
        Self::Ascii,
        Self::Binary,
        Self::Iso8859_1,
        Self::Iso8859_2,
        Self::Iso8859_3,
        Self::Iso8859_4,
        Self::Iso8859_5,
        Self::Iso8859_6,
        Self::Iso8859_7,
        Self::Iso8859_8,
        Self::Iso8859_9,
        Self::Iso8859_10,
        Self::Iso8859_11,
        Self::Iso8859_13,
        Self::Iso8859_14,
        Self::Iso8859_15,
        Self::Iso8859_16,
        Self::Cp437,
        Self::Cp1250,
        Self::Cp1251,
        Self::Cp1252,
        Self::Cp1256,
        Self::ShiftJis,
        Self::Big5,
        Self::Gb2312,
        Self::Gb18030,
        Self::EucJp,
        Self::EucKr,
        Self::Utf8,
        Self::Utf16Be,
        Self::Utf16Le,
        Self::Utf32Be,
        Self::Utf32Le,
    ];

    /// The canonical name for this character set.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ASCII",
            Self::Binary => "BINARY",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::Iso8859_2 => "ISO-8859-2",
            Self::Iso8859_3 => "ISO-8859-3",
            Self::Iso8859_4 => "ISO-8859-4",
            Self::Iso8859_5 => "ISO-8859-5",
            Self::Iso8859_6 => "ISO-8859-6",
            Self::Iso8859_7 => "ISO-8859-7",
            Self::Iso8859_8 => "ISO-8859-8",
            Self::Iso8859_9 => "ISO-8859-9",
            Self::Iso8859_10 => "ISO-8859-10",
            Self::Iso8859_11 => "ISO-8859-11",
            Self::Iso8859_13 => "ISO-8859-13",
            Self::Iso8859_14 => "ISO-8859-14",
            Self::Iso8859_15 => "ISO-8859-15",
            Self::Iso8859_16 => "ISO-8859-16",
            Self::Cp437 => "CP437",
            Self::Cp1250 => "CP1250",
            Self::Cp1251 => "CP1251",
            Self::Cp1252 => "CP1252",
            Self::Cp1256 => "CP1256",
            Self::ShiftJis => "Shift_JIS",
            Self::Big5 => "Big5",
            Self::Gb2312 => "GB2312",
            Self::Gb18030 => "GB18030",
            Self::EucJp => "EUC-JP",
            Self::EucKr => "EUC-KR",
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf32Be => "UTF-32BE",
            Self::Utf32Le => "UTF-32LE",
        }
    }

    /// Resolves an ECI designator value to its character set.
    ///
    /// Covers the assignments symbols use to declare their payload encoding,
    /// including the historical duplicates (0/2 for CP437, 1/3 for
    /// ISO-8859-1, 170 for the invariant ASCII subset). Unassigned and
    /// reserved designators yield `None`.
    #[must_use]
    pub const fn from_eci(eci: u32) -> Option<CharacterSet> {
        Some(match eci {
            0 | 2 => Self::Cp437,
            1 | 3 => Self::Iso8859_1,
            4 => Self::Iso8859_2,
            5 => Self::Iso8859_3,
            6 => Self::Iso8859_4,
            7 => Self::Iso8859_5,
            8 => Self::Iso8859_6,
            9 => Self::Iso8859_7,
            10 => Self::Iso8859_8,
            11 => Self::Iso8859_9,
            12 => Self::Iso8859_10,
            13 => Self::Iso8859_11,
            15 => Self::Iso8859_13,
            16 => Self::Iso8859_14,
            17 => Self::Iso8859_15,
            18 => Self::Iso8859_16,
            20 => Self::ShiftJis,
            21 => Self::Cp1250,
            22 => Self::Cp1251,
            23 => Self::Cp1252,
            24 => Self::Cp1256,
            25 => Self::Utf16Be,
            26 => Self::Utf8,
            27 | 170 => Self::Ascii,
            28 => Self::Big5,
            29 => Self::Gb2312,
            30 => Self::EucKr,
            // GBK shares the GB18030 two-byte plane; both designators land
            // on the four-byte-capable superset.
            31 | 32 => Self::Gb18030,
            33 => Self::Utf16Le,
            34 => Self::Utf32Be,
            35 => Self::Utf32Le,
            899 => Self::Binary,
            _ => return None,
        })
    }

    /// The canonical ECI designator for this character set, if one is
    /// assigned. EUC-JP has no designator.
    #[must_use]
    pub const fn eci(self) -> Option<u32> {
        Some(match self {
            Self::Cp437 => 2,
            Self::Iso8859_1 => 3,
            Self::Iso8859_2 => 4,
            Self::Iso8859_3 => 5,
            Self::Iso8859_4 => 6,
            Self::Iso8859_5 => 7,
            Self::Iso8859_6 => 8,
            Self::Iso8859_7 => 9,
            Self::Iso8859_8 => 10,
            Self::Iso8859_9 => 11,
            Self::Iso8859_10 => 12,
            Self::Iso8859_11 => 13,
            Self::Iso8859_13 => 15,
            Self::Iso8859_14 => 16,
            Self::Iso8859_15 => 17,
            Self::Iso8859_16 => 18,
            Self::ShiftJis => 20,
            Self::Cp1250 => 21,
            Self::Cp1251 => 22,
            Self::Cp1252 => 23,
            Self::Cp1256 => 24,
            Self::Utf16Be => 25,
            Self::Utf8 => 26,
            Self::Ascii => 27,
            Self::Big5 => 28,
            Self::Gb2312 => 29,
            Self::EucKr => 30,
            Self::Gb18030 => 32,
            Self::Utf16Le => 33,
            Self::Utf32Be => 34,
            Self::Utf32Le => 35,
            Self::Binary => 899,
            Self::EucJp => return None,
        })
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterSet {
    type Err = CharsetLabelError;

    /// Parses a charset label the way payload metadata spells them in the
    /// wild: matching is case-insensitive and ignores `-`, `_` and spaces,
    /// so `"ISO-8859-1"`, `"ISO8859_1"` and `"iso88591"` all resolve.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let folded: String = label
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(match folded.as_str() {
            "ascii" | "usascii" | "iso646irv" => Self::Ascii,
            "binary" => Self::Binary,
            "iso88591" | "latin1" | "l1" | "cp819" | "ibm819" => Self::Iso8859_1,
            "iso88592" | "latin2" | "l2" => Self::Iso8859_2,
            "iso88593" | "latin3" | "l3" => Self::Iso8859_3,
            "iso88594" | "latin4" | "l4" => Self::Iso8859_4,
            "iso88595" | "cyrillic" => Self::Iso8859_5,
            "iso88596" | "arabic" => Self::Iso8859_6,
            "iso88597" | "greek" => Self::Iso8859_7,
            "iso88598" | "hebrew" => Self::Iso8859_8,
            "iso88599" | "latin5" | "l5" => Self::Iso8859_9,
            "iso885910" | "latin6" | "l6" => Self::Iso8859_10,
            "iso885911" | "tis620" | "thai" => Self::Iso8859_11,
            "iso885913" | "latin7" | "l7" => Self::Iso8859_13,
            "iso885914" | "latin8" | "l8" => Self::Iso8859_14,
            "iso885915" | "latin9" | "l9" => Self::Iso8859_15,
            "iso885916" | "latin10" | "l10" => Self::Iso8859_16,
            "cp437" | "ibm437" => Self::Cp437,
            "cp1250" | "windows1250" => Self::Cp1250,
            "cp1251" | "windows1251" => Self::Cp1251,
            "cp1252" | "windows1252" => Self::Cp1252,
            "cp1256" | "windows1256" => Self::Cp1256,
            "shiftjis" | "sjis" | "ms932" | "windows31j" => Self::ShiftJis,
            "big5" | "cnbig5" => Self::Big5,
            "gb2312" | "euccn" => Self::Gb2312,
            "gb18030" | "gbk" => Self::Gb18030,
            "eucjp" => Self::EucJp,
            "euckr" | "ksc5601" | "ksx1001" => Self::EucKr,
            "utf8" => Self::Utf8,
            "utf16" | "utf16be" | "unicodebig" => Self::Utf16Be,
            "utf16le" | "unicodelittle" => Self::Utf16Le,
            "utf32" | "utf32be" => Self::Utf32Be,
            "utf32le" => Self::Utf32Le,
            _ => {
                return Err(CharsetLabelError {
                    label: label.to_owned(),
                });
            }
        })
    }
}
