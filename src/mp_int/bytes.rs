//! Big-endian byte serialization, unsigned and sign-prefixed.

use super::{MpInt, Sign};
use crate::error::CoreError;

impl MpInt {
    /// Decodes an unsigned big-endian byte string.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut digits = vec![0u32; bytes.len().div_ceil(4)];
        for (i, &b) in bytes.iter().rev().enumerate() {
            let digit_idx = i / 4;
            let shift = (i % 4) * 8;
            digits[digit_idx] |= (b as u32) << shift;
        }
        if digits.is_empty() {
            digits.push(0);
        }
        let mut v = MpInt { sign: Sign::Positive, digits };
        v.clamp();
        v
    }

    /// Encodes the unsigned magnitude as big-endian bytes, minimal length
    /// (no leading zero byte unless the value is zero).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let byte_len = self.byte_count();
        self.to_bytes_be_exact(byte_len).expect("byte_count() is always sufficient")
    }

    /// Encodes the unsigned magnitude as exactly `length` big-endian bytes,
    /// left-padding with zeros or left-truncating to fit. Truncation that
    /// would drop a significant (non-zero) byte is reported as an error
    /// rather than silently producing a wrong value.
    pub fn to_bytes_be_exact(&self, length: usize) -> Result<Vec<u8>, CoreError> {
        let needed = self.byte_count();
        if length < needed && !self.is_zero() {
            return Err(CoreError::TooBig);
        }
        let mut out = vec![0u8; length];
        for i in 0..length {
            let digit_idx = i / 4;
            let shift = (i % 4) * 8;
            let byte = self.digits.get(digit_idx).map(|d| (d >> shift) as u8).unwrap_or(0);
            out[length - 1 - i] = byte;
        }
        Ok(out)
    }

    /// Decodes a sign-prefixed byte string: one leading sign byte (0 for
    /// non-negative, 1 for negative) followed by the unsigned magnitude.
    pub fn from_signed_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let (&sign_byte, magnitude) = bytes.split_first().ok_or(CoreError::BadArgument)?;
        let mut v = Self::from_bytes_be(magnitude);
        v.sign = match sign_byte {
            0 => Sign::Positive,
            1 => Sign::Negative,
            _ => return Err(CoreError::BadArgument),
        };
        v.clamp();
        Ok(v)
    }

    /// Encodes this value as a sign byte followed by the unsigned magnitude.
    pub fn to_signed_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.byte_count());
        out.push(if self.is_negative() { 1 } else { 0 });
        out.extend(self.to_bytes_be());
        out
    }
}
