//! Greatest common divisor and modular inverse via the binary extended GCD
//! algorithm (Stein's algorithm, HAC Algorithm 14.61).

use super::MpInt;
use crate::error::CoreError;

impl MpInt {
    /// Plain (non-extended) GCD via Stein's binary algorithm.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }
        let mut shift = 0usize;
        while a.is_even() && b.is_even() {
            a = a.shr(1);
            b = b.shr(1);
            shift += 1;
        }
        while a.is_even() {
            a = a.shr(1);
        }
        loop {
            while b.is_even() {
                b = b.shr(1);
            }
            if a.cmp_magnitude_and_sign(&b) == std::cmp::Ordering::Greater {
                std::mem::swap(&mut a, &mut b);
            }
            b = b.sub(&a);
            if b.is_zero() {
                break;
            }
        }
        a.shl(shift)
    }

    /// Binary extended GCD: returns `(g, a, b)` with `a*self + b*other = g`
    /// and `g = gcd(self, other)`.
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let x = self.abs();
        let y = other.abs();

        if x.is_zero() {
            return (y, MpInt::zero(), MpInt::from_u64(1));
        }
        if y.is_zero() {
            return (x, MpInt::from_u64(1), MpInt::zero());
        }

        let mut g = MpInt::from_u64(1);
        let mut u = x.clone();
        let mut v = y.clone();
        while u.is_even() && v.is_even() {
            u = u.shr(1);
            v = v.shr(1);
            g = g.shl(1);
        }

        let mut a = MpInt::from_u64(1);
        let mut b = MpInt::zero();
        let mut c = MpInt::zero();
        let mut d = MpInt::from_u64(1);
        let u0 = u.clone();
        let v0 = v.clone();

        loop {
            while u.is_even() {
                u = u.shr(1);
                if a.is_even() && b.is_even() {
                    a = a.shr(1);
                    b = b.shr(1);
                } else {
                    a = a.add(&v0).shr(1);
                    b = b.sub(&u0).shr(1);
                }
            }
            while v.is_even() {
                v = v.shr(1);
                if c.is_even() && d.is_even() {
                    c = c.shr(1);
                    d = d.shr(1);
                } else {
                    c = c.add(&v0).shr(1);
                    d = d.sub(&u0).shr(1);
                }
            }
            if u.cmp_magnitude_and_sign(&v) != std::cmp::Ordering::Less {
                u = u.sub(&v);
                a = a.sub(&c);
                b = b.sub(&d);
            } else {
                v = v.sub(&u);
                c = c.sub(&a);
                d = d.sub(&b);
            }
            if u.is_zero() {
                break;
            }
        }

        // a*x + b*y = g*v  (HAC 14.61 terminal identity); c,d hold the
        // coefficients for gcd = g*v. Apply the original signs of self/other.
        let mut a_out = c;
        let mut b_out = d;
        if self.is_negative() {
            a_out = a_out.neg();
        }
        if other.is_negative() {
            b_out = b_out.neg();
        }
        (g.mul(&v), a_out, b_out)
    }

    /// Modular inverse: `self^-1 mod m`. Fails with [`CoreError::Undefined`]
    /// when `gcd(self, m) != 1`.
    pub fn invmod(&self, m: &Self) -> Result<Self, CoreError> {
        if m.is_zero() {
            return Err(CoreError::Range);
        }
        let value = self.modulo(m)?;
        let (g, a, _b) = value.extended_gcd(m);
        if g.cmp_magnitude_and_sign(&MpInt::from_u64(1)) != std::cmp::Ordering::Equal {
            return Err(CoreError::Undefined);
        }
        a.modulo(m)
    }
}
