//! RSA key lifecycle: generation, PKCS#1 v1.5 padding, blinded private-key
//! operations, and DigestInfo-wrapped signatures.

pub mod blinding;
pub mod pkcs1;
pub mod signature;

use crate::digest::Digest;
use crate::error::CoreError;
use crate::mp_int::MpInt;
use crate::primes::{invent_firstbits, quality_prime};
use crate::prng::RandomGenerator;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RsaError {
    #[error("arithmetic error: {0}")]
    Core(#[from] CoreError),
    #[error("key generation did not converge to a verifiable key")]
    KeygenFailed,
    #[error("message is too long for this modulus/padding combination")]
    MessageTooLong,
    #[error("padding was malformed on decode")]
    BadPadding,
    #[error("signature verification failed")]
    VerifyFailed,
}

/// Block type selecting the PKCS#1 v1.5 padding shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Zero padding (legacy; block type 0).
    Zero,
    /// All-0xff padding, used by the private-key (signing) operation.
    PrivateSign,
    /// Non-zero random padding, used by the public-key (encrypting) operation.
    PublicEncrypt,
}

/// An RSA keypair. "Has private" iff `d`/`p`/`q`/`iqmp` are all present.
pub struct RsaKey {
    pub bit_len: usize,
    pub n: MpInt,
    pub e: MpInt,
    pub d: Option<MpInt>,
    pub p: Option<MpInt>,
    pub q: Option<MpInt>,
    pub iqmp: Option<MpInt>,
}

impl RsaKey {
    pub fn byte_len(&self) -> usize {
        self.bit_len.div_ceil(8)
    }

    pub fn has_private(&self) -> bool {
        self.d.is_some()
    }

    /// Generates an `nbits`-bit keypair with public exponent `e`:
    /// pick a `firstbits` pair, generate `p`/`q` each `nbits/2` bits with
    /// `P mod e != 1` (so `P - 1` is always coprime to `e`), swap so `p > q`,
    /// then derive `n`, `d`, `iqmp`, verifying the result before returning.
    pub fn generate<D: Digest>(
        nbits: usize,
        e: u64,
        rng: &mut RandomGenerator<D>,
    ) -> Result<Self, RsaError> {
        let half_bits = nbits / 2;
        let e_mp = MpInt::from_u64(e);
        let residue = MpInt::from_u64(1);
        let ((prefix_p, bits_p), (prefix_q, bits_q)) = invent_firstbits(8);

        let mut p = quality_prime(half_bits, &e_mp, &residue, None, Some((prefix_p, bits_p)), rng);
        let mut q = quality_prime(half_bits, &e_mp, &residue, None, Some((prefix_q, bits_q)), rng);
        if p.cmp_magnitude_and_sign(&q) == std::cmp::Ordering::Less {
            std::mem::swap(&mut p, &mut q);
        }

        let n = p.mul(&q);
        let p_minus_1 = p.sub(&MpInt::from_u64(1));
        let q_minus_1 = q.sub(&MpInt::from_u64(1));
        let phi = p_minus_1.mul(&q_minus_1);

        let d = e_mp.invmod(&phi).map_err(|_| RsaError::KeygenFailed)?;
        let iqmp = q.invmod(&p).map_err(|_| RsaError::KeygenFailed)?;

        let key = RsaKey { bit_len: nbits, n, e: e_mp, d: Some(d), p: Some(p), q: Some(q), iqmp: Some(iqmp) };
        if !key.verify_keys() {
            return Err(RsaError::KeygenFailed);
        }
        Ok(key)
    }

    /// Checks `n = p*q`, `e*d == 1 (mod p-1)` and `(mod q-1)`, and
    /// `iqmp*q == 1 (mod p)`.
    pub fn verify_keys(&self) -> bool {
        let (Some(d), Some(p), Some(q), Some(iqmp)) = (&self.d, &self.p, &self.q, &self.iqmp) else {
            return false;
        };
        if p.mul(q) != self.n {
            return false;
        }
        let p_minus_1 = p.sub(&MpInt::from_u64(1));
        let q_minus_1 = q.sub(&MpInt::from_u64(1));
        let one = MpInt::from_u64(1);
        let ed_mod_p = match self.e.mulmod(d, &p_minus_1) {
            Ok(v) => v,
            Err(_) => return false,
        };
        let ed_mod_q = match self.e.mulmod(d, &q_minus_1) {
            Ok(v) => v,
            Err(_) => return false,
        };
        if ed_mod_p != one || ed_mod_q != one {
            return false;
        }
        match iqmp.mulmod(q, p) {
            Ok(v) => v == one,
            Err(_) => false,
        }
    }

    /// Raw public-key operation: `x^e mod n`.
    pub fn public_op(&self, x: &MpInt) -> Result<MpInt, RsaError> {
        Ok(x.exptmod(&self.e, &self.n)?)
    }

    /// Raw private-key operation via CRT for speed isn't required by the
    /// spec; this goes through the blinded path in `rsa::blinding` instead
    /// so every private operation gets the same timing protection.
    pub fn private_op<D: Digest>(&self, x: &MpInt, rng: &mut RandomGenerator<D>) -> Result<MpInt, RsaError> {
        let d = self.d.as_ref().ok_or(RsaError::KeygenFailed)?;
        blinding::blinded_private_op::<D>(x, d, &self.e, &self.n, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::{Mother, RandomGenerator};
    use crate::testutil::TestSha256;

    fn rng() -> RandomGenerator<TestSha256> {
        RandomGenerator::Mother(Mother::new(0x1234_5678))
    }

    #[test]
    fn generated_key_verifies_and_round_trips() {
        let mut r = rng();
        let key = RsaKey::generate(256, 65537, &mut r).unwrap();
        assert!(key.verify_keys());

        let m = MpInt::from_u64(42);
        let c = key.public_op(&m).unwrap();
        let recovered = key.private_op(&c, &mut r).unwrap();
        assert_eq!(recovered, m);
    }

    #[test]
    fn corrupting_d_fails_verification() {
        let mut r = rng();
        let mut key = RsaKey::generate(256, 65537, &mut r).unwrap();
        key.d = Some(key.d.as_ref().unwrap().add(&MpInt::from_u64(2)));
        assert!(!key.verify_keys());
    }
}
