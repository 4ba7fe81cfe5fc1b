//! Golomb–Rice code.
//!
//! A value `N` is split by the modulus `M` into a quotient `q = N / M` and
//! a remainder `r = N % M`. The quotient is written in unary (`q` ones and
//! a zero), the remainder in truncated binary:
//!
//! - `b = ceil(log2(M))` and `cutoff = 2^b - M`
//! - `r < cutoff` is written in `b - 1` bits
//! - otherwise `r + cutoff` is written in `b` bits
//!
//! When `M` is a power of two the cutoff is zero and every remainder takes
//! exactly `b` bits, which is the Rice special case. `M = 1` has no
//! remainder bits at all.

use serde::Deserialize;
use serde::Serialize;

use crate::arithmetic::CheckedArithmetic;
use crate::bits::BitString;
use crate::error::DecodeError;
use crate::error::EncodeError;
use crate::settings::Modulus;

use super::read_value;
use super::Decoded;
use super::IntegerCode;
use super::Unary;

/// The quotient is always written with the default unary polarity.
const QUOTIENT: Unary = Unary { alternative: false };

/// Golomb–Rice code with divisor `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GolombRice {
    /// The divisor `M`.
    pub modulus: Modulus,
}

/// Truncated binary parameters for a modulus greater than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Remainder {
    /// `ceil(log2(M))`
    bits: usize,
    /// `2^bits - M`
    cutoff: u64,
}

impl Remainder {
    fn new(modulus: u64) -> Self {
        debug_assert!(modulus > 1);
        let bits = (u64::BITS - (modulus - 1).leading_zeros()) as usize;
        // Below 2^(bits-1) <= 2^63, so it always fits.
        let cutoff = ((1u128 << bits) - u128::from(modulus)) as u64;
        Self { bits, cutoff }
    }
}

impl GolombRice {
    /// Creates a Golomb–Rice code.
    pub fn new(modulus: Modulus) -> Self {
        Self { modulus }
    }

    fn remainder(self) -> Option<Remainder> {
        match self.modulus.get() {
            1 => None,
            modulus => Some(Remainder::new(modulus)),
        }
    }
}

impl IntegerCode for GolombRice {
    fn encode(&self, value: u64) -> Result<BitString, EncodeError> {
        let modulus = self.modulus.get();
        let quotient = QUOTIENT.encode(value / modulus)?;

        let Some(Remainder { bits, cutoff }) = self.remainder() else {
            return Ok(quotient);
        };

        let remainder = value % modulus;
        let code = if remainder < cutoff {
            BitString::with_width(remainder, bits - 1)
        } else {
            BitString::with_width(remainder + cutoff, bits)
        };

        Ok(quotient.concat(&code))
    }

    fn decode(&self, bits: &BitString) -> Result<Decoded, DecodeError> {
        let quotient = QUOTIENT.decode(bits)?;
        let start = quotient.code.len();

        let Some(Remainder { bits: width, cutoff }) = self.remainder() else {
            return Ok(quotient);
        };

        let base = quotient
            .integer
            .checked_op("quotient multiply", |q| q.checked_mul(self.modulus.get()))?;

        let short = read_value(bits, start, width - 1)?;
        if short < cutoff {
            let integer = base.checked_op("remainder add", |base| base.checked_add(short))?;
            return Ok(Decoded::new(integer, bits, start + width - 1));
        }

        // The long form holds `r + cutoff`, which is at least `cutoff`.
        let remainder = read_value(bits, start, width)? - cutoff;
        let integer = base.checked_op("remainder add", |base| base.checked_add(remainder))?;
        Ok(Decoded::new(integer, bits, start + width))
    }
}
