//! Fixed-length binary code.

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::settings::ChunkSize;

use super::read_value;
use super::Decoded;
use super::IntegerCode;

/// Plain binary, left-padded to exactly `chunk_size` bits.
///
/// The only family here that is prefix-free merely because every codeword
/// has the same length. Values wider than the chunk cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedBinary {
    /// Width of every codeword in bits.
    pub chunk_size: ChunkSize,
}

impl FixedBinary {
    /// Creates a fixed-length binary code.
    pub fn new(chunk_size: ChunkSize) -> Self {
        Self { chunk_size }
    }
}

impl IntegerCode for FixedBinary {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        let minimal = BitString::from_integer(value);
        if minimal.len() > self.chunk_size.bits() {
            return Err(EncodeError::ValueTooLarge {
                value,
                bits: minimal.len(),
                chunk_size: self.chunk_size.get(),
            });
        }

        Ok(minimal.pad_start(self.chunk_size.bits()))
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        if bits.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let width = self.chunk_size.bits();
        let integer = read_value(bits, 0, width)?;
        Ok(Decoded::new(integer, bits, width))
    }
}
