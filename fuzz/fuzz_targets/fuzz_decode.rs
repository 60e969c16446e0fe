#![no_main]
use arbitrary::Arbitrary;
use ecitext::{CharacterSet, decode, encode, guess_charset};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    charset_selector: u8,
    bytes: Vec<u8>,
}

fn check(input: &Input) {
    let charset = CharacterSet::ALL[usize::from(input.charset_selector) % CharacterSet::ALL.len()];

    // Decode is total: no charset/byte combination may panic or error.
    let text = decode(&input.bytes, charset);

    // The output is scalar values by construction, so re-encoding the code
    // points must succeed and reproduce the UTF-8 form exactly.
    let utf8 = encode(text.chars().map(u32::from)).expect("decoded text is scalar values");
    assert_eq!(utf8, text.as_bytes());

    match charset {
        // Identity charsets must preserve every byte value through the
        // code-point layer.
        CharacterSet::Binary | CharacterSet::Ascii | CharacterSet::Iso8859_1 => {
            let bytes_back: Vec<u8> = text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).expect("identity decode stays in 0..=255"))
                .collect();
            assert_eq!(bytes_back, input.bytes);
        }
        _ => {}
    }

    // Guessing must stay within the supported set and never panic.
    let guessed = guess_charset(&input.bytes, charset);
    assert!(CharacterSet::ALL.contains(&guessed));
}

fuzz_target!(|input: Input| check(&input));
