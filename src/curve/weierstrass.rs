//! Affine short-Weierstrass point arithmetic: `y^2 = x^3 + a*x + b mod p`.
//!
//! Point addition/doubling/scalar multiplication are the textbook affine
//! formulas, not a constant-time Jacobian ladder — ECDSA/ECDH verification
//! work and general point arithmetic do not need constant time the way a
//! private-scalar Montgomery ladder does (that discipline lives in
//! `curve::montgomery` instead, which X25519/X448 always go through).

use super::params::CurveParams;
use crate::digest::Digest;
use crate::error::CoreError;
use crate::mp_int::MpInt;
use crate::prng::RandomGenerator;

/// An affine point on a short-Weierstrass curve, or the point at infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffinePoint {
    Infinity,
    Finite { x: MpInt, y: MpInt },
}

impl AffinePoint {
    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// Checks `y^2 = x^3 + a*x + b (mod p)`.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        match self {
            AffinePoint::Infinity => true,
            AffinePoint::Finite { x, y } => {
                let lhs = match y.sqrmod(&curve.p) {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                let rhs = x
                    .mulmod(x, &curve.p)
                    .and_then(|x2| x2.mulmod(x, &curve.p))
                    .and_then(|x3| x3.addmod(&curve.a.mulmod(x, &curve.p).unwrap_or_else(|_| MpInt::zero()), &curve.p))
                    .and_then(|v| v.addmod(&curve.b, &curve.p));
                matches!(rhs, Ok(r) if r == lhs)
            }
        }
    }

    /// Point negation: `(x, -y mod p)`.
    pub fn negate(&self, curve: &CurveParams) -> Self {
        match self {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Finite { x, y } => AffinePoint::Finite {
                x: x.clone(),
                y: curve.p.sub(y).modulo(&curve.p).unwrap_or_else(|_| MpInt::zero()),
            },
        }
    }

    /// Point addition (handles doubling and the identity transparently).
    pub fn add(&self, other: &Self, curve: &CurveParams) -> Result<Self, CoreError> {
        match (self, other) {
            (AffinePoint::Infinity, p) => Ok(p.clone()),
            (p, AffinePoint::Infinity) => Ok(p.clone()),
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                if x1 == x2 {
                    let y_sum = y1.addmod(y2, &curve.p)?;
                    if y_sum.is_zero() {
                        return Ok(AffinePoint::Infinity);
                    }
                    return self.double(curve);
                }
                let num = y2.submod(y1, &curve.p)?;
                let den = x2.submod(x1, &curve.p)?;
                let lambda = num.mulmod(&den.invmod(&curve.p)?, &curve.p)?;
                let x3 = lambda
                    .sqrmod(&curve.p)?
                    .submod(x1, &curve.p)?
                    .submod(x2, &curve.p)?;
                let y3 = lambda.mulmod(&x1.submod(&x3, &curve.p)?, &curve.p)?.submod(y1, &curve.p)?;
                Ok(AffinePoint::Finite { x: x3, y: y3 })
            }
        }
    }

    /// Point doubling.
    pub fn double(&self, curve: &CurveParams) -> Result<Self, CoreError> {
        match self {
            AffinePoint::Infinity => Ok(AffinePoint::Infinity),
            AffinePoint::Finite { x, y } => {
                if y.is_zero() {
                    return Ok(AffinePoint::Infinity);
                }
                let three_x2 = MpInt::from_u64(3).mulmod(&x.sqrmod(&curve.p)?, &curve.p)?;
                let num = three_x2.addmod(&curve.a, &curve.p)?;
                let den = MpInt::from_u64(2).mulmod(y, &curve.p)?;
                let lambda = num.mulmod(&den.invmod(&curve.p)?, &curve.p)?;
                let x3 = lambda.sqrmod(&curve.p)?.submod(x, &curve.p)?.submod(x, &curve.p)?;
                let y3 = lambda.mulmod(&x.submod(&x3, &curve.p)?, &curve.p)?.submod(y, &curve.p)?;
                Ok(AffinePoint::Finite { x: x3, y: y3 })
            }
        }
    }

    /// Scalar multiplication. By default this runs the plain
    /// most-significant-bit-first double-and-add below, which skips an
    /// operation per zero scalar bit and leaks the scalar's Hamming weight
    /// through timing. With the `constant-time-scalar-mul` feature enabled,
    /// the fixed-shape add-and-double ladder runs instead, so the sequence
    /// of point operations executed never depends on the scalar's value,
    /// only on the curve order's bit length (public data).
    pub fn scalar_mul(&self, scalar: &MpInt, curve: &CurveParams) -> Result<Self, CoreError> {
        if scalar.is_zero() || self.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }
        #[cfg(feature = "constant-time-scalar-mul")]
        {
            self.scalar_mul_ladder(scalar, curve)
        }
        #[cfg(not(feature = "constant-time-scalar-mul"))]
        {
            self.scalar_mul_fast(scalar, curve)
        }
    }

    /// Montgomery-ladder-style scalar multiplication over affine points: at
    /// every bit, exactly one addition and one doubling run, and the bit
    /// only picks which accumulator receives which result. Loop length is
    /// fixed by the curve order's bit count, not the scalar's.
    fn scalar_mul_ladder(&self, scalar: &MpInt, curve: &CurveParams) -> Result<Self, CoreError> {
        let bits = curve.n.count_bits().max(scalar.count_bits()).max(1);
        let mut r0 = AffinePoint::Infinity;
        let mut r1 = self.clone();
        for i in (0..bits).rev() {
            if scalar.get_bit(i) {
                r0 = r0.add(&r1, curve)?;
                r1 = r1.double(curve)?;
            } else {
                r1 = r0.add(&r1, curve)?;
                r0 = r0.double(curve)?;
            }
        }
        Ok(r0)
    }

    /// Most-significant-bit-first double-and-add: the crate's default.
    fn scalar_mul_fast(&self, scalar: &MpInt, curve: &CurveParams) -> Result<Self, CoreError> {
        let mut result = AffinePoint::Infinity;
        let bits = scalar.count_bits();
        for i in (0..bits).rev() {
            result = result.double(curve)?;
            if scalar.get_bit(i) {
                result = result.add(self, curve)?;
            }
        }
        Ok(result)
    }

    /// SEC1 uncompressed encoding: `0x04 || X || Y`, each field fixed-width.
    pub fn to_uncompressed(&self, curve: &CurveParams) -> Result<Vec<u8>, CoreError> {
        match self {
            AffinePoint::Infinity => Ok(vec![0x00]),
            AffinePoint::Finite { x, y } => {
                let w = curve.byte_size();
                let mut out = Vec::with_capacity(1 + 2 * w);
                out.push(0x04);
                out.extend(x.to_bytes_be_exact(w)?);
                out.extend(y.to_bytes_be_exact(w)?);
                Ok(out)
            }
        }
    }

    /// SEC1 compressed encoding: `0x02|0x03 || X`, sign in the tag byte.
    pub fn to_compressed(&self, curve: &CurveParams) -> Result<Vec<u8>, CoreError> {
        match self {
            AffinePoint::Infinity => Ok(vec![0x00]),
            AffinePoint::Finite { x, y } => {
                let w = curve.byte_size();
                let mut out = Vec::with_capacity(1 + w);
                out.push(if y.is_odd() { 0x03 } else { 0x02 });
                out.extend(x.to_bytes_be_exact(w)?);
                Ok(out)
            }
        }
    }

    /// Decodes a SEC1 compressed or uncompressed point, recovering `y` via
    /// the modular square root for compressed encodings (p is prime so
    /// `p mod 4 == 3` curves use the Tonelli-Shanks shortcut
    /// `y = (x^3+ax+b)^((p+1)/4) mod p`; all curves in this table satisfy
    /// that congruence).
    pub fn from_sec1(bytes: &[u8], curve: &CurveParams) -> Result<Self, CoreError> {
        let w = curve.byte_size();
        match bytes.first() {
            Some(0x00) => Ok(AffinePoint::Infinity),
            Some(0x04) if bytes.len() == 1 + 2 * w => {
                let x = MpInt::from_bytes_be(&bytes[1..1 + w]);
                let y = MpInt::from_bytes_be(&bytes[1 + w..1 + 2 * w]);
                Ok(AffinePoint::Finite { x, y })
            }
            Some(tag @ (0x02 | 0x03)) if bytes.len() == 1 + w => {
                let x = MpInt::from_bytes_be(&bytes[1..1 + w]);
                let rhs = x
                    .mulmod(&x, &curve.p)?
                    .mulmod(&x, &curve.p)?
                    .addmod(&curve.a.mulmod(&x, &curve.p)?, &curve.p)?
                    .addmod(&curve.b, &curve.p)?;
                let exponent = curve.p.add(&MpInt::from_u64(1)).shr(2);
                let mut y = rhs.exptmod(&exponent, &curve.p)?;
                let want_odd = *tag == 0x03;
                if y.is_odd() != want_odd {
                    y = curve.p.sub(&y).modulo(&curve.p)?;
                }
                Ok(AffinePoint::Finite { x, y })
            }
            _ => Err(CoreError::BadArgument),
        }
    }

    /// Draws a uniformly random point by rejection sampling an x-coordinate
    /// until `x^3+ax+b` is a quadratic residue mod p, then taking the even-y
    /// root. Used for curve-parameter self-tests and for generating
    /// auxiliary base points; key generation itself uses the scalar ladder
    /// against the registered generator, never this.
    pub fn random<D: Digest>(curve: &CurveParams, rng: &mut RandomGenerator<D>) -> Result<Self, CoreError> {
        loop {
            let mut bytes = vec![0u8; curve.byte_size()];
            rng.fill_bytes(&mut bytes);
            let x = MpInt::from_bytes_be(&bytes).modulo(&curve.p)?;
            let rhs = x
                .mulmod(&x, &curve.p)?
                .mulmod(&x, &curve.p)?
                .addmod(&curve.a.mulmod(&x, &curve.p)?, &curve.p)?
                .addmod(&curve.b, &curve.p)?;
            let exponent = curve.p.add(&MpInt::from_u64(1)).shr(2);
            let y = rhs.exptmod(&exponent, &curve.p)?;
            if y.sqrmod(&curve.p)? == rhs {
                return Ok(AffinePoint::Finite { x, y });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::params::SECP256K1;

    fn generator() -> AffinePoint {
        AffinePoint::Finite { x: SECP256K1.gx.clone(), y: SECP256K1.gy.clone() }
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(generator().is_on_curve(&SECP256K1));
    }

    #[test]
    fn doubling_matches_self_addition() {
        let g = generator();
        let doubled = g.double(&SECP256K1).unwrap();
        let added = g.add(&g, &SECP256K1).unwrap();
        assert_eq!(doubled, added);
        assert!(doubled.is_on_curve(&SECP256K1));
    }

    #[test]
    fn scalar_mul_by_order_is_infinity() {
        let g = generator();
        let result = g.scalar_mul(&SECP256K1.n, &SECP256K1).unwrap();
        assert!(result.is_infinity());
    }

    #[test]
    fn scalar_mul_by_two_matches_doubling() {
        let g = generator();
        let doubled = g.double(&SECP256K1).unwrap();
        let via_scalar = g.scalar_mul(&MpInt::from_u64(2), &SECP256K1).unwrap();
        assert_eq!(doubled, via_scalar);
    }

    #[test]
    fn sec1_uncompressed_round_trips() {
        let g = generator();
        let encoded = g.to_uncompressed(&SECP256K1).unwrap();
        let decoded = AffinePoint::from_sec1(&encoded, &SECP256K1).unwrap();
        assert_eq!(g, decoded);
    }

    #[test]
    fn sec1_compressed_round_trips() {
        let g = generator();
        let encoded = g.to_compressed(&SECP256K1).unwrap();
        let decoded = AffinePoint::from_sec1(&encoded, &SECP256K1).unwrap();
        assert_eq!(g, decoded);
    }

    #[test]
    fn ladder_scalar_mul_matches_double_and_add() {
        let g = generator();
        let scalar = MpInt::from_u64(123_456_789);
        let via_ladder = g.scalar_mul_ladder(&scalar, &SECP256K1).unwrap();
        let mut via_double_and_add = AffinePoint::Infinity;
        for i in (0..scalar.count_bits()).rev() {
            via_double_and_add = via_double_and_add.double(&SECP256K1).unwrap();
            if scalar.get_bit(i) {
                via_double_and_add = via_double_and_add.add(&g, &SECP256K1).unwrap();
            }
        }
        assert_eq!(via_ladder, via_double_and_add);
        assert!(via_ladder.is_on_curve(&SECP256K1));
    }

    #[test]
    fn ladder_scalar_mul_is_insensitive_to_extra_leading_zero_bits() {
        let g = generator();
        let small = MpInt::from_u64(7);
        let via_small_loop = g.scalar_mul_ladder(&small, &SECP256K1).unwrap();
        let via_full_loop = g.scalar_mul(&small, &SECP256K1).unwrap();
        assert_eq!(via_small_loop, via_full_loop);
    }
}
