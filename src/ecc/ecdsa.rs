//! ECDSA sign/verify over short-Weierstrass curves.
//!
//! The nonce is derived deterministically via an HKDF-like two-step hash
//! rather than drawn from an RNG, so repeated signing of the same message
//! under the same key never reuses a nonce against a different message
//! (the classic ECDSA nonce-reuse key-recovery failure mode).

use super::EccError;
use crate::curve::{AffinePoint, CurveParams};
use crate::digest::Digest;
use crate::mp_int::MpInt;

/// Domain-separation tag mixed into the first hash of the deterministic
/// nonce derivation. An arbitrary but fixed constant — any fixed value
/// works as long as it never collides with real key material.
const NONCE_TAG: &[u8] = b"pkcore-ecdsa-nonce-v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    pub r: MpInt,
    pub s: MpInt,
}

/// Truncates a hash to the leftmost `min(h.len(), byte_count(n))` bytes and
/// interprets the result as an `MpInt`, per FIPS 186-4's `h_trunc` step.
fn truncate_hash(h: &[u8], curve: &CurveParams) -> MpInt {
    let n_bytes = curve.n.byte_count().max(1);
    let take = h.len().min(n_bytes);
    MpInt::from_bytes_be(&h[..take])
}

/// Builds the deterministic nonce `k = H(H(tag || priv_bytes) || h) mod n`,
/// reduced into `[1, n)` (degenerate zero collapses to a guard value rather
/// than ever being used as a real nonce).
fn deterministic_nonce<D: Digest>(private: &MpInt, h: &[u8], curve: &CurveParams) -> Result<MpInt, EccError> {
    let priv_bytes = private.to_bytes_be_exact(curve.byte_size())?;
    let mut d1_input = NONCE_TAG.to_vec();
    d1_input.extend_from_slice(&priv_bytes);
    let d1 = D::digest(&d1_input);

    let mut k_input = d1;
    k_input.extend_from_slice(h);
    let k_bytes = D::digest(&k_input);

    let mut k = MpInt::from_bytes_be(&k_bytes).modulo(&curve.n)?;
    if k.is_zero() {
        k = MpInt::from_u64(1);
    }
    Ok(k)
}

/// Signs a (pre-hashed) message digest `h` with the given private scalar.
/// `nonce_override` lets test vectors pin `k` verbatim.
pub fn sign<D: Digest>(
    private: &MpInt,
    h: &[u8],
    curve: &CurveParams,
    nonce_override: Option<MpInt>,
) -> Result<EcdsaSignature, EccError> {
    let k = match nonce_override {
        Some(k) => k,
        None => deterministic_nonce::<D>(private, h, curve)?,
    };

    let generator = AffinePoint::Finite { x: curve.gx.clone(), y: curve.gy.clone() };
    let r_point = generator.scalar_mul(&k, curve)?;
    let r = match &r_point {
        AffinePoint::Finite { x, .. } => x.modulo(&curve.n)?,
        AffinePoint::Infinity => return Err(EccError::DegenerateNonce),
    };
    if r.is_zero() {
        return Err(EccError::DegenerateNonce);
    }

    let h_int = truncate_hash(h, curve).modulo(&curve.n)?;
    let k_inv = k.invmod(&curve.n)?;
    let s = k_inv.mulmod(&h_int.addmod(&private.mulmod(&r, &curve.n)?, &curve.n)?, &curve.n)?;
    if s.is_zero() {
        return Err(EccError::DegenerateNonce);
    }

    Ok(EcdsaSignature { r, s })
}

/// Verifies `(r, s)` against digest `h` and public point `q`.
pub fn verify(h: &[u8], sig: &EcdsaSignature, q: &AffinePoint, curve: &CurveParams) -> bool {
    let zero = MpInt::zero();
    if sig.r.cmp_magnitude_and_sign(&zero) != std::cmp::Ordering::Greater
        || sig.r.cmp_magnitude_and_sign(&curve.n) != std::cmp::Ordering::Less
        || sig.s.cmp_magnitude_and_sign(&zero) != std::cmp::Ordering::Greater
        || sig.s.cmp_magnitude_and_sign(&curve.n) != std::cmp::Ordering::Less
    {
        return false;
    }

    let w = match sig.s.invmod(&curve.n) {
        Ok(w) => w,
        Err(_) => return false,
    };
    let h_int = match truncate_hash(h, curve).modulo(&curve.n) {
        Ok(v) => v,
        Err(_) => return false,
    };
    let u1 = match h_int.mulmod(&w, &curve.n) {
        Ok(v) => v,
        Err(_) => return false,
    };
    let u2 = match sig.r.mulmod(&w, &curve.n) {
        Ok(v) => v,
        Err(_) => return false,
    };

    let generator = AffinePoint::Finite { x: curve.gx.clone(), y: curve.gy.clone() };
    let p1 = match generator.scalar_mul(&u1, curve) {
        Ok(p) => p,
        Err(_) => return false,
    };
    let p2 = match q.scalar_mul(&u2, curve) {
        Ok(p) => p,
        Err(_) => return false,
    };
    let sum = match p1.add(&p2, curve) {
        Ok(p) => p,
        Err(_) => return false,
    };

    match sum {
        AffinePoint::Infinity => false,
        AffinePoint::Finite { x, .. } => match x.modulo(&curve.n) {
            Ok(xr) => xr == sig.r,
            Err(_) => false,
        },
    }
}
