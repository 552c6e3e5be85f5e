//! ECC key lifecycle: generation, ECDSA, ECDH, and EdDSA (Ed25519), plus the
//! signature-algorithm registry consumed by ASN.1 AlgorithmIdentifiers.

pub mod ecdh;
pub mod ecdsa;
pub mod eddsa;
pub mod registry;

use crate::curve::{AffinePoint, CurveId, CurveParams};
use crate::digest::Digest;
use crate::error::CoreError;
use crate::mp_int::MpInt;
use crate::prng::RandomGenerator;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EccError {
    #[error("curve arithmetic error: {0}")]
    Core(#[from] CoreError),
    #[error("signature nonce degenerated to zero")]
    DegenerateNonce,
    #[error("not a short-Weierstrass curve")]
    NotWeierstrass,
    #[error("point is not on the curve")]
    PointNotOnCurve,
}

/// An elliptic-curve keypair (or public-key-only handle). "Has private" iff
/// `private` is `Some`.
pub struct EccKey {
    pub curve: CurveId,
    pub private: Option<MpInt>,
    pub public: AffinePoint,
}

// No explicit Drop impl needed: `MpInt` already zeroizes its own digit
// storage on drop, so `private: Option<MpInt>` is
// scrubbed automatically when the key is dropped.

impl EccKey {
    /// Generates a fresh keypair on a short-Weierstrass curve: draw a
    /// private scalar in `[1, n)`, public = scalar * G.
    pub fn generate<D: Digest>(
        curve_id: CurveId,
        rng: &mut RandomGenerator<D>,
    ) -> Result<Self, EccError> {
        let curve = crate::curve::params::weierstrass_params(curve_id).ok_or(EccError::NotWeierstrass)?;
        let private = random_scalar(curve, rng)?;
        let generator = AffinePoint::Finite { x: curve.gx.clone(), y: curve.gy.clone() };
        let public = generator.scalar_mul(&private, curve)?;
        Ok(EccKey { curve: curve_id, private: Some(private), public })
    }

    pub fn has_private(&self) -> bool {
        self.private.is_some()
    }
}

fn random_scalar<D: Digest>(
    curve: &CurveParams,
    rng: &mut RandomGenerator<D>,
) -> Result<MpInt, EccError> {
    loop {
        let mut bytes = vec![0u8; curve.byte_size()];
        rng.fill_bytes(&mut bytes);
        let candidate = MpInt::from_bytes_be(&bytes);
        if !candidate.is_zero() && candidate.cmp_magnitude_and_sign(&curve.n) == std::cmp::Ordering::Less {
            return Ok(candidate);
        }
    }
}
