//! Error types for the integer codes library
//!

use crate::settings::CodingKind;

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid code settings
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A value could not be encoded
    #[error("error encoding value: {0}")]
    Encode(#[from] EncodeError),
    /// A bit string could not be decoded
    #[error("error decoding bits: {0}")]
    Decode(#[from] DecodeError),
    /// Text could not be parsed as a bit string
    #[error("error parsing bits: {0}")]
    ParseBits(#[from] ParseBitsError),
}

/// Invalid settings for a code family. These are reported once, when the
/// settings are constructed, and never by the codecs themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Chunk sizes need at least two bits (VLQ spends one on continuation).
    #[error("chunk size must be at least 2, got {0}")]
    ChunkSizeTooSmall(u32),

    /// Chunk size above the supported maximum.
    #[error("chunk size must be at most 4096, got {0}")]
    ChunkSizeTooLarge(u32),

    /// The Golomb–Rice modulus must be positive.
    #[error("modulus must be at least 1, got {0}")]
    ModulusTooSmall(u64),

    /// The selected family needs an option that was not supplied.
    #[error("the selected coding requires the `{0}` option")]
    MissingOption(&'static str),

    /// The family name is not one of the known codings.
    #[error("unknown coding: {0}")]
    UnknownCoding(String),
}

/// The value is not representable under the current settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Elias codes have no codeword for zero.
    #[error("{0} coding cannot encode zero")]
    ZeroNotEncodable(CodingKind),

    /// The minimal binary form of the value does not fit the fixed chunk.
    #[error("value {value} needs {bits} bits, too large for chunk size {chunk_size}")]
    ValueTooLarge {
        /// The value that was being encoded
        value: u64,
        /// Bits in the minimal binary form of the value
        bits: usize,
        /// Configured chunk size
        chunk_size: u32,
    },

    /// The codeword would exceed [`crate::MAX_CODEWORD_BITS`].
    #[error("codeword of {bits} bits exceeds the limit of {limit} bits")]
    CodewordTooLong {
        /// Length the codeword would have had
        bits: u64,
        /// The allowed maximum
        limit: u64,
    },
}

/// The bit string does not start with a complete, valid codeword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Nothing to decode
    #[error("empty input")]
    EmptyInput,

    /// A unary run (or the omega terminator) never ended
    #[error("missing codeword terminator")]
    MissingTerminator,

    /// The codeword was cut short
    #[error("unexpected end of data: needed {needed} bits, {available} available")]
    UnexpectedEndOfData {
        /// Number of bits the codeword requires from the decode position
        needed: usize,
        /// Number of bits left in the input from the decode position
        available: usize,
    },

    /// The decoded value does not fit in 64 bits
    #[error("decoded value exceeds {} bits", u64::BITS)]
    IntegerOverflow,

    /// Arithmetic overflow while reconstructing a value
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// A decoder reported success without consuming any bits
    #[error("decoder made no progress")]
    NoProgress,
}

/// Errors when parsing the canonical `"0101…"` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseBitsError {
    /// Only `'0'` and `'1'` are allowed.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Its character index in the input
        position: usize,
    },
}
