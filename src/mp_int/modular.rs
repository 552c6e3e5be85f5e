//! Modular arithmetic: `addmod`/`submod`/`mulmod`/`sqrmod`, and Barrett-reduced
//! modular exponentiation.

use super::{MpInt, Sign};
use crate::error::CoreError;

impl MpInt {
    /// `(self + other) mod m`.
    pub fn addmod(&self, other: &Self, m: &Self) -> Result<Self, CoreError> {
        self.add(other).modulo(m)
    }

    /// `(self - other) mod m`.
    pub fn submod(&self, other: &Self, m: &Self) -> Result<Self, CoreError> {
        self.sub(other).modulo(m)
    }

    /// `(self * other) mod m`.
    pub fn mulmod(&self, other: &Self, m: &Self) -> Result<Self, CoreError> {
        self.mul(other).modulo(m)
    }

    /// `self^2 mod m`.
    pub fn sqrmod(&self, m: &Self) -> Result<Self, CoreError> {
        self.square().modulo(m)
    }

    /// Truncating right shift by whole 32-bit digits: `floor(self / b^k)`.
    pub(crate) fn shr_digits(&self, k: usize) -> Self {
        if k >= self.digits.len() {
            return MpInt::zero();
        }
        let mut v = MpInt { sign: self.sign, digits: self.digits[k..].to_vec() };
        v.clamp();
        v
    }

    /// Truncation to the lowest `k` digits: `self mod b^k`.
    pub(crate) fn low_digits(&self, k: usize) -> Self {
        if k >= self.digits.len() {
            return self.clone();
        }
        let mut digits = self.digits[..k].to_vec();
        if digits.is_empty() {
            digits.push(0);
        }
        let mut v = MpInt { sign: Sign::Positive, digits };
        v.clamp();
        v
    }

    /// Left shift by whole 32-bit digits: `self * b^k`.
    pub(crate) fn shl_digits(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut digits = vec![0u32; k];
        digits.extend_from_slice(&self.digits);
        let mut v = MpInt { sign: self.sign, digits };
        v.clamp();
        v
    }

    /// Modular exponentiation `self^exponent mod modulus`, via Barrett
    /// reduction: precompute
    /// `mu = floor(b^(2k) / modulus)` once, then reduce each intermediate
    /// product with multiplications and shifts instead of a full division.
    pub fn exptmod(&self, exponent: &Self, modulus: &Self) -> Result<Self, CoreError> {
        if modulus.is_zero() {
            return Err(CoreError::Range);
        }
        if exponent.is_negative() {
            // Negative exponents require a modular inverse first.
            let inv = self.invmod(modulus)?;
            return inv.exptmod(&exponent.neg(), modulus);
        }

        let reducer = BarrettReducer::new(modulus)?;
        let mut base = self.modulo(modulus)?;
        let mut result = MpInt::from_u64(1);

        let bits = exponent.count_bits();
        for i in 0..bits {
            if exponent.get_bit(i) {
                result = reducer.reduce(&result.mul(&base))?;
            }
            base = reducer.reduce(&base.square())?;
        }
        Ok(result)
    }
}

/// Precomputed Barrett reduction context for a fixed modulus.
pub(crate) struct BarrettReducer {
    modulus: MpInt,
    mu: MpInt,
    k: usize,
}

impl BarrettReducer {
    pub(crate) fn new(modulus: &MpInt) -> Result<Self, CoreError> {
        if modulus.is_zero() {
            return Err(CoreError::Range);
        }
        let k = modulus.digit_count();
        // mu = floor(b^(2k) / modulus)
        let b_2k = MpInt::from_u64(1).shl_digits(2 * k);
        let (mu, _) = b_2k.div_rem(modulus)?;
        Ok(BarrettReducer { modulus: modulus.abs(), mu, k })
    }

    /// Reduces `x` modulo the reducer's modulus, assuming `0 <= x < b^(2k)`.
    pub(crate) fn reduce(&self, x: &MpInt) -> Result<MpInt, CoreError> {
        let k = self.k;
        let q1 = x.shr_digits(k.saturating_sub(1));
        let q2 = q1.mul(&self.mu);
        let q3 = q2.shr_digits(k + 1);

        let r1 = x.low_digits(k + 1);
        let r2 = q3.mul(&self.modulus).low_digits(k + 1);

        let mut r = r1.sub(&r2);
        if r.is_negative() {
            r = r.add(&MpInt::from_u64(1).shl_digits(k + 1));
        }
        while r.cmp_magnitude_and_sign(&self.modulus) != std::cmp::Ordering::Less {
            r = r.sub(&self.modulus);
        }
        r.clamp();
        Ok(r)
    }
}
