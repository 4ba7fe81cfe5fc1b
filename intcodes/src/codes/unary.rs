//! Unary code: a run of one bit value, ended by a single opposite bit.

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::MAX_CODEWORD_BITS;

use super::Decoded;
use super::IntegerCode;

/// Unary code.
///
/// The default polarity writes `x` one bits followed by a zero; the
/// alternative polarity writes `x` zero bits followed by a one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Unary {
    /// Use zeros for the run and a one as terminator.
    pub alternative: bool,
}

impl Unary {
    /// Creates a unary code with the given polarity.
    pub fn new(alternative: bool) -> Self {
        Self { alternative }
    }

    /// The bit repeated in the run.
    fn run_bit(self) -> bool {
        !self.alternative
    }

    /// The bit ending the run.
    fn terminator(self) -> bool {
        self.alternative
    }
}

impl IntegerCode for Unary {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        let bits = value.saturating_add(1);
        if bits > MAX_CODEWORD_BITS {
            return Err(EncodeError::CodewordTooLong { bits, limit: MAX_CODEWORD_BITS });
        }

        // Bounded by MAX_CODEWORD_BITS above.
        let run = BitString::repeat(self.run_bit(), value as usize);
        Ok(run.append(self.terminator()))
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        if bits.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let index = bits
            .position(self.terminator())
            .ok_or(DecodeError::MissingTerminator)?;

        Ok(Decoded::new(index as u64, bits, index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_case::test_case;

    const DEFAULT: Unary = Unary { alternative: false };
    const ALTERNATIVE: Unary = Unary { alternative: true };

    #[test_case(DEFAULT, 0 => "0" ; "default zero")]
    #[test_case(DEFAULT, 1 => "10" ; "default one")]
    #[test_case(DEFAULT, 4 => "11110" ; "default four")]
    #[test_case(ALTERNATIVE, 0 => "1" ; "alternative zero")]
    #[test_case(ALTERNATIVE, 3 => "0001" ; "alternative three")]
    #[test_case(ALTERNATIVE, 9 => "0000000001" ; "alternative nine")]
    fn test_encode(code: Unary, value: u64) -> String {
        code.encode(value).unwrap().to_string()
    }

    #[test_case(DEFAULT, "0" => (0, "0".to_string()) ; "default zero")]
    #[test_case(DEFAULT, "11011" => (2, "110".to_string()) ; "default trailing bits")]
    #[test_case(ALTERNATIVE, "001" => (2, "001".to_string()) ; "alternative two")]
    #[test_case(ALTERNATIVE, "1000" => (0, "1".to_string()) ; "alternative zero then garbage")]
    fn test_decode(code: Unary, text: &str) -> (u64, String) {
        let decoded = code.decode(&text.parse().unwrap()).unwrap();
        (decoded.integer, decoded.code.to_string())
    }

    #[test_case(DEFAULT, "111" => DecodeError::MissingTerminator ; "default run never ends")]
    #[test_case(ALTERNATIVE, "000" => DecodeError::MissingTerminator ; "alternative run never ends")]
    #[test_case(DEFAULT, "" => DecodeError::EmptyInput ; "empty")]
    fn test_decode_failure(code: Unary, text: &str) -> DecodeError {
        code.decode(&text.parse().unwrap()).unwrap_err()
    }

    #[test]
    fn test_encode_limit() {
        assert!(DEFAULT.encode(MAX_CODEWORD_BITS - 1).is_ok());
        assert_matches!(
            DEFAULT.encode(MAX_CODEWORD_BITS),
            Err(EncodeError::CodewordTooLong { bits, .. }) if bits == MAX_CODEWORD_BITS + 1
        );
        assert_matches!(
            ALTERNATIVE.encode(u64::MAX),
            Err(EncodeError::CodewordTooLong { .. })
        );
    }

    #[test]
    fn test_alternative_sequence() {
        let entries = ALTERNATIVE.decode_sequence(&"01001000".parse().unwrap());
        let entries: Vec<_> = entries
            .iter()
            .map(|entry| (entry.integer, entry.code.to_string()))
            .collect();

        assert_eq!(
            entries,
            vec![
                (Some(1), "01".to_string()),
                (Some(2), "001".to_string()),
                (None, "000".to_string()),
            ]
        );
    }
}
