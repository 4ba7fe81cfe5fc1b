//! Immutable bit strings.
//!
//! A [`BitString`] is the value every codec produces and consumes. It is an
//! ordered, 0-indexed, fully materialized sequence of bits with the most
//! significant bit first. Every operation returns a new value; nothing is
//! modified in place, so bit strings can be shared freely between threads.
//!
//! The canonical text form is a string of `'0'` and `'1'` characters, used
//! for display, test fixtures and persisting encoded buffers.

use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;

use crate::error::ParseBitsError;

type Bits = BitVec<u8, Msb0>;

/// An immutable sequence of bits.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Bits,
}

impl BitString {
    /// Returns the empty bit string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the minimal binary representation of `value`, most
    /// significant bit first. Zero maps to a single `0` bit.
    pub fn from_integer(value: u64) -> Self {
        let width = (u64::BITS - value.leading_zeros()).max(1) as usize;
        Self::with_width(value, width)
    }

    /// Returns `value` as exactly `width` bits, left-padded with zeros.
    ///
    /// A width of zero yields the empty bit string. The caller guarantees
    /// that `value` fits; any bits above `width` are dropped.
    pub fn with_width(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .rev()
            .map(|shift| shift < u64::BITS as usize && (value >> shift) & 1 == 1)
            .collect();
        Self { bits }
    }

    /// Returns `len` copies of `bit`.
    pub fn repeat(bit: bool, len: usize) -> Self {
        Self { bits: Bits::repeat(bit, len) }
    }

    /// Returns `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self::repeat(false, len)
    }

    /// Returns `len` one bits.
    pub fn ones(len: usize) -> Self {
        Self::repeat(true, len)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the bit string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Iterates over the bits, first to last.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Index of the first bit equal to `bit`.
    pub fn position(&self, bit: bool) -> Option<usize> {
        if bit {
            self.bits.first_one()
        } else {
            self.bits.first_zero()
        }
    }

    /// Whether `prefix` is a prefix of this bit string.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(prefix.bits.as_bitslice())
    }

    /// Returns `self` followed by `other`.
    pub fn concat(&self, other: &BitString) -> Self {
        let mut bits = Bits::with_capacity(self.len() + other.len());
        bits.extend_from_bitslice(self.bits.as_bitslice());
        bits.extend_from_bitslice(other.bits.as_bitslice());
        Self { bits }
    }

    /// Returns `bit` followed by `self`.
    pub fn prepend(&self, bit: bool) -> Self {
        let mut bits = Bits::with_capacity(self.len() + 1);
        bits.push(bit);
        bits.extend_from_bitslice(self.bits.as_bitslice());
        Self { bits }
    }

    /// Returns `self` followed by `bit`.
    pub fn append(&self, bit: bool) -> Self {
        let mut bits = self.bits.clone();
        bits.push(bit);
        Self { bits }
    }

    /// Returns the bits in `start..end`. Both bounds are clamped to the
    /// length, and an inverted range yields the empty bit string.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self { bits: self.bits[start..end].to_bitvec() }
    }

    /// Returns the bits from `start` to the end.
    pub fn tail(&self, start: usize) -> Self {
        self.slice(start, self.len())
    }

    /// Splits into the first `index` bits and the rest.
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        (self.slice(0, index), self.tail(index))
    }

    /// Left-pads with zero bits up to `len` bits. Longer bit strings are
    /// returned unchanged.
    pub fn pad_start(&self, len: usize) -> Self {
        match len.checked_sub(self.len()) {
            Some(padding) if padding > 0 => Self::zeros(padding).concat(self),
            _ => self.clone(),
        }
    }

    /// The unsigned binary value of the bits, most significant bit first.
    ///
    /// Leading zeros are ignored and the empty bit string is zero. Returns
    /// `None` when more than 64 significant bits remain.
    pub fn to_u64(&self) -> Option<u64> {
        let significant = match self.bits.first_one() {
            Some(index) => &self.bits[index..],
            None => return Some(0),
        };

        if significant.len() > u64::BITS as usize {
            return None;
        }

        Some(
            significant
                .iter()
                .by_vals()
                .fold(0u64, |value, bit| (value << 1) | u64::from(bit)),
        )
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl FromStr for BitString {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseBitsError::InvalidCharacter { character, position }),
            })
            .collect()
    }
}

/// Canonical text form: `'0'`/`'1'` characters, most significant first.
impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Debug representation matching the text form, e.g. `BitString("0101")`.
impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{self}\")")
    }
}

impl serde::Serialize for BitString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BitString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
