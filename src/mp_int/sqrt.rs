//! Integer square root, used by property tests and by curve code that
//! needs a cheap magnitude check: `sqrt(n)^2 <= n < (sqrt(n)+1)^2`.

use super::MpInt;

impl MpInt {
    /// Floor of the square root of the (non-negative) magnitude, via
    /// Newton's method over `MpInt`.
    pub fn isqrt(&self) -> Self {
        if self.is_zero() {
            return MpInt::zero();
        }
        let bits = self.count_bits();
        let mut x = MpInt::from_u64(1).shl(bits.div_ceil(2));
        loop {
            let (q, _) = self.div_rem(&x).expect("x is nonzero by construction");
            let next = x.add(&q).shr(1);
            if next.cmp_magnitude_and_sign(&x) != std::cmp::Ordering::Less {
                break;
            }
            x = next;
        }
        x
    }
}
