//! Validated settings for the code families.
//!
//! Settings are plain immutable values. The numeric parameters are wrapped
//! in newtypes that can only be constructed through validation, so a codec
//! holding a [`ChunkSize`] or a [`Modulus`] never has to re-check it.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Smallest valid chunk size. VLQ spends one bit of every chunk on the
/// continuation flag, so a chunk needs at least one payload bit.
pub const MIN_CHUNK_SIZE: u32 = 2;

/// Largest accepted chunk size.
///
/// Every fixed-length binary codeword and every VLQ group is exactly one
/// chunk wide, so this bounds the allocation for a single codeword. Values
/// are at most 64 bits, so wider chunks only add zero padding.
pub const MAX_CHUNK_SIZE: u32 = 4096;

/// Number of bits per chunk for the fixed-length binary and VLQ codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ChunkSize(u32);

impl ChunkSize {
    /// Validates `bits` as a chunk size.
    pub fn new(bits: u32) -> Result<Self, ConfigError> {
        if bits < MIN_CHUNK_SIZE {
            return Err(ConfigError::ChunkSizeTooSmall(bits));
        }
        if bits > MAX_CHUNK_SIZE {
            return Err(ConfigError::ChunkSizeTooLarge(bits));
        }
        Ok(Self(bits))
    }

    /// The chunk size in bits.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The chunk size in bits, as an index width.
    pub fn bits(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for ChunkSize {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<ChunkSize> for u32 {
    fn from(value: ChunkSize) -> Self {
        value.0
    }
}

/// The Golomb–Rice divisor `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Modulus(NonZeroU64);

impl Modulus {
    /// Validates `m` as a modulus.
    pub fn new(m: u64) -> Result<Self, ConfigError> {
        NonZeroU64::new(m)
            .map(Self)
            .ok_or(ConfigError::ModulusTooSmall(m))
    }

    /// The modulus value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for Modulus {
    type Error = ConfigError;

    fn try_from(m: u64) -> Result<Self, Self::Error> {
        Self::new(m)
    }
}

impl From<Modulus> for u64 {
    fn from(value: Modulus) -> Self {
        value.get()
    }
}

/// Names of the code families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodingKind {
    /// Unary code
    Unary,
    /// Fixed-length binary code
    Binary,
    /// Variable-length quantity
    Vlq,
    /// Elias gamma code
    EliasGamma,
    /// Elias delta code
    EliasDelta,
    /// Elias omega code
    EliasOmega,
    /// Golomb–Rice code
    GolombRice,
}

impl CodingKind {
    /// Every family, in presentation order.
    pub const ALL: [CodingKind; 7] = [
        CodingKind::Unary,
        CodingKind::Binary,
        CodingKind::Vlq,
        CodingKind::EliasGamma,
        CodingKind::EliasDelta,
        CodingKind::EliasOmega,
        CodingKind::GolombRice,
    ];

    /// The kebab-case name used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CodingKind::Unary => "unary",
            CodingKind::Binary => "binary",
            CodingKind::Vlq => "vlq",
            CodingKind::EliasGamma => "elias-gamma",
            CodingKind::EliasDelta => "elias-delta",
            CodingKind::EliasOmega => "elias-omega",
            CodingKind::GolombRice => "golomb-rice",
        }
    }
}

impl fmt::Display for CodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodingKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodingKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownCoding(s.to_string()))
    }
}

/// Loose, unvalidated options for selecting a coding by name, as they come
/// from a command line or a form. [`crate::Coding::new`] validates the ones
/// the selected family needs and ignores the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodingOptions {
    /// Bit polarity for unary, Elias gamma and Elias delta.
    pub alternative: bool,
    /// Chunk size for fixed-length binary and VLQ.
    pub chunk_size: Option<u32>,
    /// Modulus for Golomb–Rice.
    pub modulus: Option<u64>,
}
