//! Elias omega code: the value is preceded by its bit length minus one,
//! which is preceded by *its* bit length minus one, and so on down to 1.
//! A final `0` bit terminates the codeword.

use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::settings::CodingKind;

use super::read_value;
use super::Decoded;
use super::IntegerCode;

/// Elias omega code for values `>= 1`. It has no settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EliasOmega;

impl IntegerCode for EliasOmega {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        if value == 0 {
            return Err(EncodeError::ZeroNotEncodable(CodingKind::EliasOmega));
        }

        let mut code = BitString::zeros(1);
        let mut value = value;

        // Each round replaces the value by its bit length minus one, so this
        // runs O(log* value) times.
        while value != 1 {
            let group = BitString::from_integer(value);
            value = group.len() as u64 - 1;
            code = group.concat(&code);
        }

        Ok(code)
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        if bits.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let mut integer: u64 = 1;
        let mut position = 0;

        loop {
            match bits.get(position) {
                Some(false) => break,
                Some(true) => {
                    if integer >= u64::BITS as u64 {
                        return Err(DecodeError::IntegerOverflow);
                    }
                    let width = integer as usize + 1;
                    integer = read_value(bits, position, width)?;
                    position += width;
                }
                None => return Err(DecodeError::MissingTerminator),
            }
        }

        // The terminating zero is part of the codeword.
        Ok(Decoded::new(integer, bits, position + 1))
    }
}
