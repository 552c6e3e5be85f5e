//! Blinded RSA private-key operation, to keep timing independent of
//! the secret exponent: `r` is drawn pseudo-randomly but deterministically
//! from a running counter mixed with `d` and the input, so the blinding
//! factor changes every call without needing the caller's RNG to be
//! cryptographically strong on every draw.

use crate::digest::Digest;
use crate::error::CoreError;
use crate::mp_int::MpInt;
use crate::prng::RandomGenerator;
use crate::rsa::RsaError;
use std::sync::atomic::{AtomicU64, Ordering};

static BLINDING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Draws a blinding factor `r` uniform in `[2, n-1]` by hashing
/// `counter || d_bytes || x_bytes` and reducing into range, retrying the
/// counter on the rare out-of-range draw.
fn draw_blinding_factor<D: Digest>(d: &MpInt, x: &MpInt, n: &MpInt) -> Result<MpInt, CoreError> {
    let d_bytes = d.to_bytes_be();
    let x_bytes = x.to_bytes_be();
    loop {
        let counter = BLINDING_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut input = counter.to_be_bytes().to_vec();
        input.extend_from_slice(&d_bytes);
        input.extend_from_slice(&x_bytes);
        let digest = D::digest(&input);
        let candidate = MpInt::from_bytes_be(&digest).modulo(n)?;
        let two = MpInt::from_u64(2);
        if candidate.cmp_magnitude_and_sign(&two) != std::cmp::Ordering::Less {
            return Ok(candidate);
        }
    }
}

/// Computes `x^d mod n` without exposing `d`'s bit pattern to the exponent
/// schedule of a single `exptmod` call on attacker-controlled `x`:
/// 1. draw blinding factor `r`;
/// 2. `r' = r^e mod n` (cheap, `e` is public and usually small);
/// 3. `y = x * r' mod n`; `z = y^d mod n`;
/// 4. `result = z * r^-1 mod n`.
pub fn blinded_private_op<D: Digest>(
    x: &MpInt,
    d: &MpInt,
    e: &MpInt,
    n: &MpInt,
    _rng: &mut RandomGenerator<D>,
) -> Result<MpInt, RsaError> {
    let r = draw_blinding_factor::<D>(d, x, n)?;
    let r_inv = r.invmod(n)?;
    let r_prime = r.exptmod(e, n)?;
    let y = x.mulmod(&r_prime, n)?;
    let z = y.exptmod(d, n)?;
    Ok(z.mulmod(&r_inv, n)?)
}
