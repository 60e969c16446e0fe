//! Charset-tagged byte payloads to Unicode text.
//!
//! Barcode symbols deliver their payload as raw bytes plus a character-set
//! designator — declared by an ECI indicator, implied by the symbology's
//! legacy default, or absent entirely. This crate turns such a payload into
//! canonical Unicode text, and provides the inverse UTF-8 encoding primitive
//! used when composing payloads for a writer.
//!
//! Decoding is a pure, total function: every byte buffer decodes under every
//! [`CharacterSet`], with undefined bytes and malformed multi-byte sequences
//! substituted by U+FFFD. The [`CharacterSet::Binary`] pseudo-charset maps
//! each byte to the code point of the same value, so non-text payloads
//! survive the text pipeline unchanged.
//!
//! ```
//! use ecitext::{decode, CharacterSet};
//!
//! let text = decode(&[0x82, 0xB1, 0x82, 0xF1], CharacterSet::ShiftJis);
//! assert_eq!(text, "こん");
//! ```

mod charset;
mod decoder;
mod encoder;
mod error;
mod guess;

#[cfg(test)]
mod tests;

pub use charset::CharacterSet;
pub use decoder::{decode, decode_into};
pub use encoder::{Utf8CodePoint, encode, encode_code_point};
pub use error::{CharsetLabelError, EncodeError};
pub use guess::guess_charset;
