//! Elias delta code: the bit length of the value in Elias gamma, followed
//! by the value without its leading one bit.

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::settings::CodingKind;

use super::read_with_leading_one;
use super::Decoded;
use super::EliasGamma;
use super::IntegerCode;

/// Elias delta code for values `>= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EliasDelta {
    /// Polarity of the gamma-coded length prefix.
    pub alternative: bool,
}

impl EliasDelta {
    /// Creates an Elias delta code with the given prefix polarity.
    pub fn new(alternative: bool) -> Self {
        Self { alternative }
    }

    fn prefix(self) -> EliasGamma {
        EliasGamma::new(self.alternative)
    }
}

impl IntegerCode for EliasDelta {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        if value == 0 {
            return Err(EncodeError::ZeroNotEncodable(CodingKind::EliasDelta));
        }

        let binary = BitString::from_integer(value);
        let prefix = self.prefix().encode(binary.len() as u64)?;
        Ok(prefix.concat(&binary.tail(1)))
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        let length = self.prefix().decode(bits)?;
        let prefix_len = length.code.len();

        if length.integer > u64::BITS as u64 {
            return Err(DecodeError::IntegerOverflow);
        }
        // Gamma never yields zero, so the length is at least one.
        let body_len = length.integer as usize - 1;

        let integer = read_with_leading_one(bits, prefix_len, body_len)?;
        Ok(Decoded::new(integer, bits, prefix_len + body_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const DEFAULT: EliasDelta = EliasDelta { alternative: false };
    const ALTERNATIVE: EliasDelta = EliasDelta { alternative: true };

    #[test_case(1, "1")]
    #[test_case(2, "0100")]
    #[test_case(3, "0101")]
    #[test_case(4, "01100")]
    #[test_case(5, "01101")]
    #[test_case(6, "01110")]
    #[test_case(7, "01111")]
    #[test_case(8, "00100000")]
    #[test_case(9, "00100001")]
    #[test_case(10, "00100010")]
    #[test_case(11, "00100011")]
    #[test_case(12, "00100100")]
    #[test_case(13, "00100101")]
    #[test_case(14, "00100110")]
    #[test_case(15, "00100111")]
    #[test_case(16, "001010000")]
    #[test_case(17, "001010001")]
    fn test_fixtures(value: u64, expected: &str) {
        let encoded = DEFAULT.encode(value).unwrap();
        assert_eq!(encoded.to_string(), expected);

        let decoded = DEFAULT.decode(&expected.parse().unwrap()).unwrap();
        assert_eq!(decoded, Decoded { integer: value, code: encoded });
    }

    #[test_case(1 => "0" ; "one")]
    #[test_case(2 => "1000" ; "two")]
    #[test_case(9 => "11000001" ; "nine")]
    fn test_alternative_encode(value: u64) -> String {
        ALTERNATIVE.encode(value).unwrap().to_string()
    }

    #[test]
    fn test_zero_not_encodable() {
        assert_eq!(
            ALTERNATIVE.encode(0),
            Err(EncodeError::ZeroNotEncodable(CodingKind::EliasDelta))
        );
    }

    #[test]
    fn test_max_value() {
        let encoded = DEFAULT.encode(u64::MAX).unwrap();
        // gamma(64) is 13 bits, followed by 63 value bits.
        assert_eq!(encoded.len(), 76);
        assert_eq!(DEFAULT.decode(&encoded).unwrap().integer, u64::MAX);
    }

    #[test_case("" => DecodeError::EmptyInput ; "empty")]
    #[test_case("00" => DecodeError::MissingTerminator ; "gamma prefix never ends")]
    #[test_case("01" => DecodeError::UnexpectedEndOfData { needed: 1, available: 0 } ; "truncated gamma prefix")]
    #[test_case("0110" => DecodeError::UnexpectedEndOfData { needed: 2, available: 1 } ; "truncated body")]
    // gamma(65) = 0000001000001
    #[test_case("0000001000001" => DecodeError::IntegerOverflow ; "length wider than a word")]
    fn test_decode_failure(text: &str) -> DecodeError {
        DEFAULT.decode(&text.parse().unwrap()).unwrap_err()
    }

    #[test]
    fn test_error_handling_sequence() {
        let entries = DEFAULT.decode_sequence(&"10100010".parse().unwrap());
        let entries: Vec<_> = entries
            .into_iter()
            .map(|entry| (entry.integer, entry.code.to_string()))
            .collect();

        assert_eq!(
            entries,
            vec![
                (Some(1), "1".to_string()),
                (Some(2), "0100".to_string()),
                (None, "010".to_string()),
            ]
        );
    }
}
