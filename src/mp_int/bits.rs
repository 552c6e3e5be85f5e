//! Bit-level operations: get/set bit, powers of two, bit shifts, and
//! two's-complement-based bitwise and/or/xor on (possibly negative) operands.

use super::{MpInt, Sign};

impl MpInt {
    /// Returns the value of bit `index` (0 = least significant) of the
    /// unsigned magnitude.
    pub fn get_bit(&self, index: usize) -> bool {
        let digit_idx = index / 32;
        let bit_idx = index % 32;
        match self.digits.get(digit_idx) {
            Some(d) => (d >> bit_idx) & 1 == 1,
            None => false,
        }
    }

    /// Sets bit `index` of the magnitude to 1, growing storage if needed.
    pub fn set_bit(&mut self, index: usize) {
        let digit_idx = index / 32;
        let bit_idx = index % 32;
        if digit_idx >= self.digits.len() {
            self.digits.resize(digit_idx + 1, 0);
        }
        self.digits[digit_idx] |= 1 << bit_idx;
    }

    /// Clears bit `index` of the magnitude.
    pub fn clear_bit(&mut self, index: usize) {
        let digit_idx = index / 32;
        let bit_idx = index % 32;
        if let Some(d) = self.digits.get_mut(digit_idx) {
            *d &= !(1u32 << bit_idx);
        }
        self.clamp();
    }

    /// `2^exponent` as an `MpInt`.
    pub fn pow2(exponent: usize) -> Self {
        let mut v = MpInt::zero();
        v.set_bit(exponent);
        v
    }

    /// Left shift by an arbitrary bit count (multiplication by `2^count`).
    pub fn shl(&self, count: usize) -> Self {
        if self.is_zero() || count == 0 {
            return self.clone();
        }
        let digit_shift = count / 32;
        let bit_shift = (count % 32) as u32;
        let mut out = vec![0u32; digit_shift];
        if bit_shift == 0 {
            out.extend_from_slice(&self.digits);
        } else {
            let mut carry = 0u32;
            for &d in &self.digits {
                out.push((d << bit_shift) | carry);
                carry = d >> (32 - bit_shift);
            }
            if carry != 0 {
                out.push(carry);
            }
        }
        let mut v = MpInt { sign: self.sign, digits: out };
        v.clamp();
        v
    }

    /// Right shift by an arbitrary bit count (floor division by `2^count`
    /// on the magnitude; sign is preserved).
    pub fn shr(&self, count: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let digit_shift = count / 32;
        let bit_shift = (count % 32) as u32;
        if digit_shift >= self.digits.len() {
            return MpInt::zero();
        }
        let src = &self.digits[digit_shift..];
        let mut out = vec![0u32; src.len()];
        if bit_shift == 0 {
            out.copy_from_slice(src);
        } else {
            for i in 0..src.len() {
                let lo = src[i] >> bit_shift;
                let hi = if i + 1 < src.len() { src[i + 1] << (32 - bit_shift) } else { 0 };
                out[i] = lo | hi;
            }
        }
        let mut v = MpInt { sign: self.sign, digits: out };
        v.clamp();
        v
    }

    /// Produces the `width`-digit two's-complement bit pattern of this
    /// value's magnitude, used to implement bitwise and/or/xor on negative
    /// operands.
    pub(crate) fn to_twos_complement(&self, width: usize) -> Vec<u32> {
        let mut digits = self.digits.clone();
        digits.resize(width, 0);
        if self.sign == Sign::Negative {
            let mut carry = 1u64;
            for d in digits.iter_mut() {
                let inverted = (!*d) as u64 + carry;
                *d = inverted as u32;
                carry = inverted >> 32;
            }
        }
        digits
    }

    fn from_twos_complement(digits: Vec<u32>) -> Self {
        let negative = digits.last().map(|d| d & 0x8000_0000 != 0).unwrap_or(false);
        if !negative {
            let mut v = MpInt { sign: Sign::Positive, digits };
            v.clamp();
            return v;
        }
        let mut carry = 1u64;
        let mut out = Vec::with_capacity(digits.len());
        for d in digits {
            let inverted = (!d) as u64 + carry;
            out.push(inverted as u32);
            carry = inverted >> 32;
        }
        let mut v = MpInt { sign: Sign::Negative, digits: out };
        v.clamp();
        v
    }

    fn bitwise(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let width = self.digits.len().max(other.digits.len()) + 1;
        let a = self.to_twos_complement(width);
        let b = other.to_twos_complement(width);
        let out: Vec<u32> = a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect();
        Self::from_twos_complement(out)
    }

    /// Bitwise AND, two's-complement semantics for negative operands.
    pub fn bitand(&self, other: &Self) -> Self {
        self.bitwise(other, |a, b| a & b)
    }

    /// Bitwise OR, two's-complement semantics for negative operands.
    pub fn bitor(&self, other: &Self) -> Self {
        self.bitwise(other, |a, b| a | b)
    }

    /// Bitwise XOR, two's-complement semantics for negative operands.
    pub fn bitxor(&self, other: &Self) -> Self {
        self.bitwise(other, |a, b| a ^ b)
    }

    /// Bitwise complement (`~self`), equal to `-(self + 1)`.
    pub fn bitcomp(&self) -> Self {
        self.neg().sub(&MpInt::from_u64(1))
    }
}
