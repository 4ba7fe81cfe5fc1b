//! Variable-length quantity.
//!
//! The value is split into groups of `chunk_size - 1` payload bits, most
//! significant group first. Every group is prefixed by a continuation flag:
//! `1` when more groups follow, `0` on the last one. This is the bit-level,
//! big-endian sibling of LEB128, where a chunk is a byte and the groups are
//! stored least significant first.
//!
//! For example, with a chunk size of 4, decimal 300 (`100101100`) encodes
//! as `1100 1101 0100`:
//! - `1|100`: continuation set, payload bits 8-6
//! - `1|101`: continuation set, payload bits 5-3
//! - `0|100`: final group, payload bits 2-0

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::settings::ChunkSize;

use super::read_bits;
use super::Decoded;
use super::IntegerCode;

/// Variable-length quantity with `chunk_size`-bit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vlq {
    /// Bits per group, including the continuation flag.
    pub chunk_size: ChunkSize,
}

impl Vlq {
    /// Creates a VLQ code.
    pub fn new(chunk_size: ChunkSize) -> Self {
        Self { chunk_size }
    }

    /// Number of value bits stored in each group.
    fn payload_bits(self) -> usize {
        self.chunk_size.bits() - 1
    }
}

impl IntegerCode for Vlq {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        let width = self.payload_bits();
        let minimal = BitString::from_integer(value);
        let groups = minimal.len().div_ceil(width);
        let padded = minimal.pad_start(groups * width);

        let code = (0..groups).fold(BitString::empty(), |code, group| {
            let is_last = group + 1 == groups;
            let payload = padded.slice(group * width, (group + 1) * width);
            code.append(!is_last).concat(&payload)
        });

        Ok(code)
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        if bits.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let chunk = self.chunk_size.bits();
        let mut payload = BitString::empty();
        let mut position = 0;

        loop {
            let group = read_bits(bits, position, chunk)?;
            let (flag, value_bits) = group.split_at(1);
            payload = payload.concat(&value_bits);
            position += chunk;

            // No continuation bit - we're done
            if flag.get(0) != Some(true) {
                break;
            }
        }

        let integer = payload.to_u64().ok_or(DecodeError::IntegerOverflow)?;
        Ok(Decoded::new(integer, bits, position))
    }
}
