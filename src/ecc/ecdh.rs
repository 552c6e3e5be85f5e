//! Elliptic-curve Diffie-Hellman over short-Weierstrass curves.
//! X25519/X448 key agreement is the Montgomery `x_function` directly
//! (`curve::montgomery`) and does not go through this module.

use super::EccError;
use crate::curve::{AffinePoint, CurveParams};
use crate::mp_int::MpInt;

/// Computes `local_private * peer_public` and returns its x-coordinate as
/// the shared secret.
pub fn shared_secret(
    local_private: &MpInt,
    peer_public: &AffinePoint,
    curve: &CurveParams,
) -> Result<MpInt, EccError> {
    match peer_public.scalar_mul(local_private, curve)? {
        AffinePoint::Finite { x, .. } => Ok(x),
        AffinePoint::Infinity => Err(EccError::PointNotOnCurve),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::params::SECP256R1;
    use crate::ecc::EccKey;
    use crate::prng::{Mother, RandomGenerator};
    use crate::testutil::TestSha256;

    #[test]
    fn shared_secret_is_commutative() {
        let mut r: RandomGenerator<TestSha256> = RandomGenerator::Mother(Mother::new(1));
        let alice = EccKey::generate(crate::curve::CurveId::Secp256r1, &mut r).unwrap();
        let bob = EccKey::generate(crate::curve::CurveId::Secp256r1, &mut r).unwrap();

        let shared_a = shared_secret(alice.private.as_ref().unwrap(), &bob.public, &SECP256R1).unwrap();
        let shared_b = shared_secret(bob.private.as_ref().unwrap(), &alice.public, &SECP256R1).unwrap();
        assert_eq!(shared_a, shared_b);
    }
}
