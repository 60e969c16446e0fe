//! Error types for charset identification and code-point encoding.
//!
//! Decoding itself never fails: malformed input is substituted, not
//! reported. Errors exist only at the contract boundaries — resolving an
//! unknown charset label and encoding a value that is not a Unicode scalar.

use thiserror::Error;

/// A charset label that names no supported character set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown character set label {label:?}")]
pub struct CharsetLabelError {
    pub(crate) label: String,
}

impl CharsetLabelError {
    /// The label that failed to resolve, as given by the caller.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A code point that has no UTF-8 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value lies in the surrogate range 0xD800–0xDFFF, which UTF-16
    /// reserves for pair halves; surrogates are not scalar values.
    #[error("code point {0:#06X} is an unpaired surrogate")]
    SurrogateCodePoint(u32),
    /// The value exceeds U+10FFFF.
    #[error("code point {0:#X} lies beyond U+10FFFF")]
    CodePointOutOfRange(u32),
}
