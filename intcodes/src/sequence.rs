//! Encoding and decoding of concatenated codewords.
//!
//! Encoding a sequence fails on the first value that cannot be encoded.
//! Decoding is best effort instead: a decodable prefix of the stream is
//! returned entry by entry, and the first failure turns the rest of the
//! stream into a single remainder entry with no integer. Every decoded
//! integer in the result is trustworthy, and the remainder (if any) shows
//! exactly how many trailing bits could not be interpreted.

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::codes::Decoded;
use crate::error::DecodeError;
use crate::error::EncodeError;

/// One element of a decoded sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceEntry {
    /// The decoded value, or `None` for the undecodable remainder.
    pub integer: Option<u64>,
    /// The codeword, or the whole remainder when `integer` is `None`.
    pub code: BitString,
}

impl SequenceEntry {
    /// Whether this entry holds the bits that could not be decoded.
    pub fn is_remainder(&self) -> bool {
        self.integer.is_none()
    }
}

impl From<Decoded> for SequenceEntry {
    fn from(decoded: Decoded) -> Self {
        Self { integer: Some(decoded.integer), code: decoded.code }
    }
}

/// Encodes every value with `encode` and concatenates the codewords, in
/// order, onto an initially empty bit string.
pub fn encode_sequence_with<F>(encode: F, values: &[u64]) -> Result<BitString, EncodeError>
where
    F: Fn(u64) -> Result<BitString, EncodeError>,
{
    values.iter().try_fold(BitString::empty(), |output, &value| {
        Ok(output.concat(&encode(value)?))
    })
}

/// Decodes consecutive codewords from `bits` with `decode`.
///
/// Decoding continues until the input is exhausted. On the first failure
/// the remaining bits are appended as a single entry with no integer and
/// decoding stops; entries decoded before the failure are kept. A decoder
/// that succeeds without consuming anything is treated as a failure.
pub fn decode_sequence_with<F>(decode: F, bits: &BitString) -> Vec<SequenceEntry>
where
    F: Fn(&BitString) -> Result<Decoded, DecodeError>,
{
    let mut entries: Vec<SequenceEntry> = Vec::new();
    let mut position = 0;

    while position < bits.len() {
        let rest = bits.tail(position);

        let result = decode(&rest).and_then(|decoded| match decoded.code.len() {
            0 => Err(DecodeError::NoProgress),
            _ => Ok(decoded),
        });

        match result {
            Ok(decoded) => {
                position += decoded.code.len();
                entries.push(decoded.into());
            }
            Err(error) => {
                tracing::debug!(
                    %error,
                    offset = position,
                    remainder_bits = rest.len(),
                    "stopped decoding sequence"
                );
                entries.push(SequenceEntry { integer: None, code: rest });
                break;
            }
        }
    }

    entries
}
