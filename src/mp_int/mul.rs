//! Schoolbook multiplication and squaring.

use super::{MpInt, Sign};

impl MpInt {
    /// Signed multiplication, schoolbook O(n·m) with a 64-bit accumulator.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return MpInt::zero();
        }

        let mut out = vec![0u32; self.digits.len() + other.digits.len()];
        for (i, &a) in self.digits.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry = 0u64;
            let a = a as u64;
            for (j, &b) in other.digits.iter().enumerate() {
                let idx = i + j;
                let product = a * (b as u64) + out[idx] as u64 + carry;
                out[idx] = product as u32;
                carry = product >> 32;
            }
            let mut idx = i + other.digits.len();
            while carry != 0 {
                let sum = out[idx] as u64 + carry;
                out[idx] = sum as u32;
                carry = sum >> 32;
                idx += 1;
            }
        }

        let sign = if self.sign == other.sign { Sign::Positive } else { Sign::Negative };
        let mut result = MpInt { sign, digits: out };
        result.clamp();
        result
    }

    /// Squaring, specialized so that cross terms `a[i]*a[j]` (j != i) are
    /// computed once and doubled, rather than computed twice as a generic
    /// multiply would. The doubling can itself overflow a 32-bit lane, so
    /// the running sum is tracked in a 128-bit-equivalent pair of `u64`s
    /// (hi:lo) per column rather than a single accumulator.
    pub fn square(&self) -> Self {
        if self.is_zero() {
            return MpInt::zero();
        }
        let n = self.digits.len();
        let mut out = vec![0u32; 2 * n];

        for i in 0..n {
            // out[2i] += a[i]^2, with carry propagated upward.
            let square = self.digits[i] as u64 * self.digits[i] as u64;
            let mut carry = add_with_carry(&mut out, 2 * i, square);

            // Cross terms a[i]*a[j] for j > i, counted twice.
            let mut col_carry: u64 = 0;
            for j in (i + 1)..n {
                let cross = self.digits[i] as u64 * self.digits[j] as u64;
                // doubled cross term plus any carry from the lower column
                let (doubled, overflow1) = cross.overflowing_mul(2);
                let mut extra_carry: u64 = if overflow1 { 1u64 << 32 } else { 0 };
                let (sum, overflow2) = doubled.overflowing_add(col_carry);
                if overflow2 {
                    extra_carry += 1u64 << 32;
                }
                let idx = i + j;
                let placed = add_with_carry(&mut out, idx, sum);
                col_carry = (extra_carry >> 32) + placed;
            }
            if col_carry != 0 {
                carry = add_with_carry(&mut out, i + n, col_carry) + carry;
            }
            if carry != 0 {
                let mut idx = i + n + 1;
                let mut c = carry;
                while c != 0 && idx < out.len() {
                    let s = out[idx] as u64 + c;
                    out[idx] = s as u32;
                    c = s >> 32;
                    idx += 1;
                }
            }
        }

        let mut result = MpInt { sign: Sign::Positive, digits: out };
        result.clamp();
        result
    }
}

/// Adds `value` (which may itself need more than one 32-bit limb) into
/// `out` starting at digit `idx`, propagating carries, and returns the
/// carry that still needs to flow beyond the two limbs touched here.
fn add_with_carry(out: &mut [u32], idx: usize, value: u64) -> u64 {
    let lo = value as u32;
    let hi = (value >> 32) as u32;

    let sum0 = out[idx] as u64 + lo as u64;
    out[idx] = sum0 as u32;
    let carry0 = sum0 >> 32;

    let sum1 = out[idx + 1] as u64 + hi as u64 + carry0;
    out[idx + 1] = sum1 as u32;
    sum1 >> 32
}
