//! Charset labels and ECI designators.

use core::str::FromStr;

use rstest::rstest;

use crate::CharacterSet;

#[rstest]
#[case("ISO-8859-1", CharacterSet::Iso8859_1)]
#[case("ISO8859_1", CharacterSet::Iso8859_1)]
#[case("iso88591", CharacterSet::Iso8859_1)]
#[case("latin1", CharacterSet::Iso8859_1)]
#[case("Latin-5", CharacterSet::Iso8859_9)]
#[case("TIS-620", CharacterSet::Iso8859_11)]
#[case("US-ASCII", CharacterSet::Ascii)]
#[case("BINARY", CharacterSet::Binary)]
#[case("Shift_JIS", CharacterSet::ShiftJis)]
#[case("shift-jis", CharacterSet::ShiftJis)]
#[case("SJIS", CharacterSet::ShiftJis)]
#[case("windows-31j", CharacterSet::ShiftJis)]
#[case("windows-1252", CharacterSet::Cp1252)]
#[case("Cp1252", CharacterSet::Cp1252)]
#[case("IBM437", CharacterSet::Cp437)]
#[case("GBK", CharacterSet::Gb18030)]
#[case("gb2312", CharacterSet::Gb2312)]
#[case("EUC-KR", CharacterSet::EucKr)]
#[case("KS_C 5601", CharacterSet::EucKr)]
#[case("UTF-8", CharacterSet::Utf8)]
#[case("utf8", CharacterSet::Utf8)]
#[case("UTF-16", CharacterSet::Utf16Be)]
#[case("UTF-16LE", CharacterSet::Utf16Le)]
#[case("UTF-32", CharacterSet::Utf32Be)]
fn labels_resolve(#[case] label: &str, #[case] expected: CharacterSet) {
    assert_eq!(label.parse::<CharacterSet>(), Ok(expected), "label: {label}");
}

#[test]
fn unknown_labels_are_rejected_with_the_offending_label() {
    let err = CharacterSet::from_str("klingon-pIqaD").unwrap_err();
    assert_eq!(err.label(), "klingon-pIqaD");
    assert_eq!(err.to_string(), "unknown character set label \"klingon-pIqaD\"");
}

#[test]
fn canonical_names_parse_back() {
    for &cs in CharacterSet::ALL {
        assert_eq!(cs.name().parse::<CharacterSet>(), Ok(cs), "name: {}", cs.name());
    }
}

#[test]
fn eci_designators_round_trip() {
    for &cs in CharacterSet::ALL {
        let Some(eci) = cs.eci() else {
            assert_eq!(cs, CharacterSet::EucJp, "only EUC-JP lacks a designator");
            continue;
        };
        assert_eq!(CharacterSet::from_eci(eci), Some(cs), "eci: {eci}");
    }
}

#[rstest]
#[case::legacy_cp437(0, Some(CharacterSet::Cp437))]
#[case::legacy_latin1(1, Some(CharacterSet::Iso8859_1))]
#[case::invariant_ascii(170, Some(CharacterSet::Ascii))]
#[case::gbk_lands_on_gb18030(31, Some(CharacterSet::Gb18030))]
#[case::binary(899, Some(CharacterSet::Binary))]
#[case::reserved_14(14, None)]
#[case::reserved_19(19, None)]
#[case::unassigned(36, None)]
#[case::far_out(100_000, None)]
fn eci_assignments(#[case] eci: u32, #[case] expected: Option<CharacterSet>) {
    assert_eq!(CharacterSet::from_eci(eci), expected);
}
