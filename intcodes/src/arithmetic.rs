//! Checked arithmetic for value reconstruction during decoding.
//!
//! Decoders never wrap: any overflow while rebuilding a value from its
//! codeword becomes a [`DecodeError`] so that the sequence driver can treat
//! it like any other malformed codeword.

use crate::error::DecodeError;

/// Helper for concise error handling when dealing with arithmetic operations.
pub trait CheckedArithmetic {
    /// Performs a checked arithmetic operation that might overflow.
    ///
    /// # Parameters
    /// * `op_name` - Name of the operation for error context
    /// * `op` - The checked operation to perform, returning Option<Self>
    fn checked_op<F>(self, op_name: &str, op: F) -> Result<Self, DecodeError>
    where
        F: FnOnce(Self) -> Option<Self>,
        Self: Sized;
}

impl CheckedArithmetic for u64 {
    fn checked_op<F>(self, op_name: &str, op: F) -> Result<Self, DecodeError>
    where
        F: FnOnce(Self) -> Option<Self>,
    {
        op(self).ok_or_else(|| {
            DecodeError::ArithmeticOverflow(format!("{op_name} overflow: value={self}"))
        })
    }
}
