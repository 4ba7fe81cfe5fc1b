//! Elias gamma code: the bit length of the value in unary, followed by the
//! value without its leading one bit.

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::settings::CodingKind;

use super::read_with_leading_one;
use super::Decoded;
use super::IntegerCode;
use super::Unary;

/// Elias gamma code for values `>= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EliasGamma {
    /// Invert the polarity of the unary length prefix.
    pub alternative: bool,
}

impl EliasGamma {
    /// Creates an Elias gamma code with the given prefix polarity.
    pub fn new(alternative: bool) -> Self {
        Self { alternative }
    }

    /// The unary code used for the length prefix. The default gamma code
    /// writes the length as zeros ended by the value's leading one, so it
    /// uses the opposite polarity to the default unary code.
    fn prefix(self) -> Unary {
        Unary::new(!self.alternative)
    }
}

impl IntegerCode for EliasGamma {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        if value == 0 {
            return Err(EncodeError::ZeroNotEncodable(CodingKind::EliasGamma));
        }

        let body = BitString::from_integer(value).tail(1);
        let prefix = self.prefix().encode(body.len() as u64)?;
        Ok(prefix.concat(&body))
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        let prefix = self.prefix().decode(bits)?;
        let prefix_len = prefix.code.len();

        if prefix.integer >= u64::BITS as u64 {
            return Err(DecodeError::IntegerOverflow);
        }
        let body_len = prefix.integer as usize;

        let integer = read_with_leading_one(bits, prefix_len, body_len)?;
        Ok(Decoded::new(integer, bits, prefix_len + body_len))
    }
}
