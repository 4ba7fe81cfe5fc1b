//! The code families and the trait they share.
//!
//! Each family is a small `Copy` struct whose fields are its settings. A
//! family is picked once, either by constructing its struct directly or
//! through [`Coding`], and then used for any number of encode/decode calls.

mod binary;
mod elias_delta;
mod elias_gamma;
mod elias_omega;
mod golomb_rice;
mod unary;
mod vlq;

use serde::Deserialize;
use serde::Serialize;

use crate::bits::BitString;
use crate::error::ConfigError;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::sequence;
use crate::sequence::SequenceEntry;
use crate::settings::ChunkSize;
use crate::settings::CodingKind;
use crate::settings::CodingOptions;
use crate::settings::Modulus;

pub use binary::FixedBinary;
pub use elias_delta::EliasDelta;
pub use elias_gamma::EliasGamma;
pub use elias_omega::EliasOmega;
pub use golomb_rice::GolombRice;
pub use unary::Unary;
pub use vlq::Vlq;

/// A successfully decoded codeword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    /// The decoded value
    pub integer: u64,
    /// Exactly the prefix of the input that was consumed
    pub code: BitString,
}

impl Decoded {
    fn new(integer: u64, bits: &BitString, consumed: usize) -> Self {
        Self { integer, code: bits.slice(0, consumed) }
    }
}

/// A prefix code over unsigned integers.
///
/// Implementors must be prefix-free: for fixed settings no codeword may be
/// a prefix of another, and `decode` must consume exactly the bits `encode`
/// produced. The sequence methods rely on both.
pub trait IntegerCode {
    /// Encodes a single value into its codeword.
    fn encode(&self, value: u64) -> Result<BitString, EncodeError>;

    /// Decodes the codeword at the start of `bits`. Trailing bits after the
    /// codeword are ignored.
    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError>;

    /// Encodes `values` and concatenates their codewords.
    fn encode_sequence(&self, values: &[u64]) -> Result<BitString, EncodeError> {
        sequence::encode_sequence_with(|value| self.encode(value), values)
    }

    /// Decodes consecutive codewords until `bits` is exhausted or a codeword
    /// fails to decode. See [`sequence::decode_sequence_with`].
    fn decode_sequence(&self, bits: &BitString) -> Vec<SequenceEntry> {
        sequence::decode_sequence_with(|rest| self.decode(rest), bits)
    }
}

/// Returns `len` bits of `bits` starting at `start`, or the shortfall.
fn read_bits(bits: &BitString, start: usize, len: usize) -> Result<BitString, DecodeError> {
    let available = bits.len().saturating_sub(start);
    if available < len {
        return Err(DecodeError::UnexpectedEndOfData { needed: len, available });
    }
    Ok(bits.slice(start, start + len))
}

/// Reads `len` bits at `start` as an unsigned integer.
fn read_value(bits: &BitString, start: usize, len: usize) -> Result<u64, DecodeError> {
    read_bits(bits, start, len)?
        .to_u64()
        .ok_or(DecodeError::IntegerOverflow)
}

/// Reads `len` bits at `start` behind an implicit leading `1` bit, the way
/// the Elias codes store a value without its most significant bit.
fn read_with_leading_one(bits: &BitString, start: usize, len: usize) -> Result<u64, DecodeError> {
    read_bits(bits, start, len)?
        .prepend(true)
        .to_u64()
        .ok_or(DecodeError::IntegerOverflow)
}

/// Any one of the code families, selected at configuration time.
///
/// Deserializes from a map tagged by `coding`, e.g.
/// `{"coding": "golomb-rice", "modulus": 10}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "coding", rename_all = "kebab-case")]
pub enum Coding {
    /// Unary code
    Unary(Unary),
    /// Fixed-length binary code
    Binary(FixedBinary),
    /// Variable-length quantity
    Vlq(Vlq),
    /// Elias gamma code
    EliasGamma(EliasGamma),
    /// Elias delta code
    EliasDelta(EliasDelta),
    /// Elias omega code, which has no settings
    EliasOmega,
    /// Golomb–Rice code
    GolombRice(GolombRice),
}

impl Coding {
    /// Builds the coding named by `kind`, validating the options it needs.
    pub fn new(kind: CodingKind, options: CodingOptions) -> Result<Self, ConfigError> {
        let chunk_size = || {
            options
                .chunk_size
                .ok_or(ConfigError::MissingOption("chunk_size"))
                .and_then(ChunkSize::new)
        };

        let coding = match kind {
            CodingKind::Unary => Coding::Unary(Unary::new(options.alternative)),
            CodingKind::Binary => Coding::Binary(FixedBinary::new(chunk_size()?)),
            CodingKind::Vlq => Coding::Vlq(Vlq::new(chunk_size()?)),
            CodingKind::EliasGamma => Coding::EliasGamma(EliasGamma::new(options.alternative)),
            CodingKind::EliasDelta => Coding::EliasDelta(EliasDelta::new(options.alternative)),
            CodingKind::EliasOmega => Coding::EliasOmega,
            CodingKind::GolombRice => {
                let modulus = options
                    .modulus
                    .ok_or(ConfigError::MissingOption("modulus"))
                    .and_then(Modulus::new)?;
                Coding::GolombRice(GolombRice::new(modulus))
            }
        };

        Ok(coding)
    }

    /// The family of this coding.
    pub fn kind(&self) -> CodingKind {
        match self {
            Coding::Unary(_) => CodingKind::Unary,
            Coding::Binary(_) => CodingKind::Binary,
            Coding::Vlq(_) => CodingKind::Vlq,
            Coding::EliasGamma(_) => CodingKind::EliasGamma,
            Coding::EliasDelta(_) => CodingKind::EliasDelta,
            Coding::EliasOmega => CodingKind::EliasOmega,
            Coding::GolombRice(_) => CodingKind::GolombRice,
        }
    }

    fn as_code(&self) -> &dyn IntegerCode {
        match self {
            Coding::Unary(code) => code,
            Coding::Binary(code) => code,
            Coding::Vlq(code) => code,
            Coding::EliasGamma(code) => code,
            Coding::EliasDelta(code) => code,
            Coding::EliasOmega => &EliasOmega,
            Coding::GolombRice(code) => code,
        }
    }
}

impl IntegerCode for Coding {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        self.as_code().encode(value)
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        self.as_code().decode(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_case::test_case;

    fn bits(text: &str) -> BitString {
        text.parse().unwrap()
    }

    #[test_case("1011", 1, 2 => Ok(bits("01")) ; "inside")]
    #[test_case("1011", 4, 0 => Ok(BitString::empty()) ; "empty at end")]
    #[test_case("1011", 2, 3 => Err(DecodeError::UnexpectedEndOfData { needed: 3, available: 2 }) ; "short")]
    #[test_case("1011", 9, 1 => Err(DecodeError::UnexpectedEndOfData { needed: 1, available: 0 }) ; "past the end")]
    fn test_read_bits(text: &str, start: usize, len: usize) -> Result<BitString, DecodeError> {
        read_bits(&bits(text), start, len)
    }

    #[test]
    fn test_read_with_leading_one() {
        assert_eq!(read_with_leading_one(&bits("01"), 0, 2), Ok(5));
        assert_eq!(read_with_leading_one(&bits("111"), 3, 0), Ok(1));
        assert_eq!(
            read_with_leading_one(&BitString::zeros(64), 0, 64),
            Err(DecodeError::IntegerOverflow)
        );
    }

    #[test]
    fn test_coding_new() {
        let options = CodingOptions { alternative: true, chunk_size: Some(4), modulus: Some(3) };

        assert_eq!(
            Coding::new(CodingKind::Unary, options),
            Ok(Coding::Unary(Unary::new(true)))
        );
        assert_eq!(
            Coding::new(CodingKind::Vlq, options),
            Ok(Coding::Vlq(Vlq::new(ChunkSize::new(4).unwrap())))
        );
        assert_eq!(
            Coding::new(CodingKind::GolombRice, options),
            Ok(Coding::GolombRice(GolombRice::new(Modulus::new(3).unwrap())))
        );

        for kind in CodingKind::ALL {
            assert_eq!(Coding::new(kind, options).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_coding_new_rejects_bad_options() {
        let options = CodingOptions::default();
        assert_matches!(
            Coding::new(CodingKind::Binary, options),
            Err(ConfigError::MissingOption("chunk_size"))
        );
        assert_matches!(
            Coding::new(CodingKind::GolombRice, options),
            Err(ConfigError::MissingOption("modulus"))
        );

        let options = CodingOptions { chunk_size: Some(1), modulus: Some(0), ..options };
        assert_matches!(
            Coding::new(CodingKind::Vlq, options),
            Err(ConfigError::ChunkSizeTooSmall(1))
        );
        assert_matches!(
            Coding::new(CodingKind::GolombRice, options),
            Err(ConfigError::ModulusTooSmall(0))
        );
        // Options the family does not use are not validated.
        assert!(Coding::new(CodingKind::EliasOmega, options).is_ok());
    }

    #[test]
    fn test_coding_deserialize() {
        let coding: Coding =
            serde_json::from_str(r#"{"coding": "golomb-rice", "modulus": 10}"#).unwrap();
        assert_eq!(coding.encode(42).unwrap().to_string(), "11110010");

        let coding: Coding =
            serde_json::from_str(r#"{"coding": "elias-gamma", "alternative": true}"#).unwrap();
        assert_eq!(coding, Coding::EliasGamma(EliasGamma::new(true)));

        assert_eq!(
            serde_json::to_string(&Coding::EliasOmega).unwrap(),
            r#"{"coding":"elias-omega"}"#
        );
        let coding: Coding = serde_json::from_str(r#"{"coding": "elias-omega"}"#).unwrap();
        assert_eq!(coding.kind(), CodingKind::EliasOmega);

        let coding: Coding = serde_json::from_str(r#"{"coding": "unary"}"#).unwrap();
        assert_eq!(coding, Coding::Unary(Unary::new(false)));

        assert!(serde_json::from_str::<Coding>(r#"{"coding": "vlq", "chunk_size": 1}"#).is_err());
        assert!(serde_json::from_str::<Coding>(r#"{"coding": "binary"}"#).is_err());
        assert!(serde_json::from_str::<Coding>(r#"{"coding": "huffman"}"#).is_err());
    }

    #[test]
    fn test_coding_dispatch() {
        let coding = Coding::EliasGamma(EliasGamma::new(false));
        let encoded = coding.encode(5).unwrap();
        assert_eq!(encoded.to_string(), "00101");
        assert_eq!(coding.decode(&encoded), Ok(Decoded { integer: 5, code: encoded }));
    }
}
