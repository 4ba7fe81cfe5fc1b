#![deny(missing_docs)]

//! # Integer codes
//!
//! Bit-exact variable-length integer codes over an immutable [`BitString`]:
//! unary, fixed-length binary, VLQ, Elias gamma/delta/omega and
//! Golomb–Rice, plus a sequence driver that decodes concatenated codewords
//! and reports an undecodable tail instead of failing the whole stream.
//!
//! ## Usage Example
//!
//! ```
//! use intcodes::{BitString, GolombRice, IntegerCode, Modulus};
//!
//! let code = GolombRice::new(Modulus::new(10).unwrap());
//! assert_eq!(code.encode(42).unwrap().to_string(), "11110010");
//!
//! let bits: BitString = "111100101111".parse().unwrap();
//! let entries = code.decode_sequence(&bits);
//! assert_eq!(entries[0].integer, Some(42));
//! assert!(entries[1].is_remainder());
//! ```

mod arithmetic;
pub mod bits;
pub mod codes;
pub mod error;
pub mod sequence;
pub mod settings;


pub use bits::BitString;

pub use codes::Coding;
pub use codes::Decoded;
pub use codes::EliasDelta;
pub use codes::EliasGamma;
pub use codes::EliasOmega;
pub use codes::FixedBinary;
pub use codes::GolombRice;
pub use codes::IntegerCode;
pub use codes::Unary;
pub use codes::Vlq;

pub use error::ConfigError;
pub use error::DecodeError;
pub use error::EncodeError;
pub use error::Error;
pub use error::ParseBitsError;

pub use sequence::decode_sequence_with;
pub use sequence::encode_sequence_with;
pub use sequence::SequenceEntry;

pub use settings::ChunkSize;
pub use settings::CodingKind;
pub use settings::CodingOptions;
pub use settings::Modulus;

/// Maximum number of bits a single unary run may occupy when encoding
/// (2^23 bits, 1MB). Guards the unary and Golomb–Rice quotient encoders
/// against allocating gigantic codewords for large values; decoding is
/// always bounded by the length of the input.
pub const MAX_CODEWORD_BITS: u64 = 1 << 23;
