//! Miller-Rabin primality testing and prime generation.

use super::SMALL_PRIMES;
use crate::digest::Digest;
use crate::mp_int::MpInt;
use crate::prng::RandomGenerator;

/// Witness-round count used by [`is_prime`], fixed at 64 unconditionally —
/// the standard figure for >=1024-bit candidates — rather than scaling it
/// with bit length.
pub const MILLER_RABIN_ROUNDS: u32 = 64;

/// Miller-Rabin primality test with trial division by small primes first.
/// Returns composite for `p < 2`, prime for `p in {2, 3}`.
pub fn is_prime<D: Digest>(p: &MpInt, rng: &mut RandomGenerator<D>) -> bool {
    let two = MpInt::from_u64(2);
    let three = MpInt::from_u64(3);

    if p.cmp_magnitude_and_sign(&two) == std::cmp::Ordering::Less {
        return false;
    }
    if p == &two || p == &three {
        return true;
    }
    if p.is_even() {
        return false;
    }

    for &small in SMALL_PRIMES.iter().take(256) {
        let sp = MpInt::from_u64(small as u64);
        if p == &sp {
            return true;
        }
        if p.modulo(&sp).map(|r| r.is_zero()).unwrap_or(false) {
            return false;
        }
    }

    // Write p - 1 = d * 2^r with d odd.
    let p_minus_one = p.sub(&MpInt::from_u64(1));
    let mut d = p_minus_one.clone();
    let mut r = 0usize;
    while d.is_even() {
        d = d.shr(1);
        r += 1;
    }

    'witness: for _ in 0..MILLER_RABIN_ROUNDS {
        let a = random_witness(p, rng);
        let mut x = match a.exptmod(&d, p) {
            Ok(v) => v,
            Err(_) => return false,
        };

        if x == MpInt::from_u64(1) || x == p_minus_one {
            continue;
        }

        for _ in 0..r.saturating_sub(1) {
            x = match x.sqrmod(p) {
                Ok(v) => v,
                Err(_) => return false,
            };
            if x == p_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Draws a uniformly random witness `a` with `2 <= a <= p - 2`.
fn random_witness<D: Digest>(p: &MpInt, rng: &mut RandomGenerator<D>) -> MpInt {
    let byte_len = p.byte_count();
    loop {
        let mut bytes = vec![0u8; byte_len];
        rng.fill_bytes(&mut bytes);
        let candidate = MpInt::from_bytes_be(&bytes);
        let two = MpInt::from_u64(2);
        let p_minus_two = p.sub(&two);
        if candidate.cmp_magnitude_and_sign(&two) != std::cmp::Ordering::Less
            && candidate.cmp_magnitude_and_sign(&p_minus_two) != std::cmp::Ordering::Greater
        {
            return candidate;
        }
    }
}

/// One step of the incremental odd-candidate search behind [`next_prime`]:
/// tests `candidate` (rounded up to odd) for primality and returns
/// `(is_prime, next_candidate)`. `next_candidate` is what to pass back in on
/// the following call when `is_prime` is false. A caller that must honor a
/// deadline drives this loop itself one call at a time instead of blocking
/// inside [`next_prime`] until it returns.
pub fn next_prime_candidate<D: Digest>(candidate: &MpInt, rng: &mut RandomGenerator<D>) -> (bool, MpInt) {
    let odd = if candidate.is_even() { candidate.add(&MpInt::from_u64(1)) } else { candidate.clone() };
    let found = is_prime(&odd, rng);
    let next = odd.add(&MpInt::from_u64(2));
    (found, next)
}

/// Advances `n` to the next odd value `>= n` and keeps incrementing by two
/// until [`is_prime`] accepts. Built on [`next_prime_candidate`]; callers
/// that need to interleave a deadline check between tests should call that
/// step function directly instead.
pub fn next_prime<D: Digest>(n: &MpInt, rng: &mut RandomGenerator<D>) -> MpInt {
    let mut candidate = if n.is_even() { n.add(&MpInt::from_u64(1)) } else { n.clone() };
    loop {
        let (found, next) = next_prime_candidate(&candidate, rng);
        if found {
            return candidate;
        }
        candidate = next;
    }
}

/// Produces a prime `P` such that:
/// - `P` has exactly `nbits` bits when `factor` is `None`, or
///   `factor * P + 1` has that bit length when `factor` is `Some` (DSA-style);
/// - `P mod modulus != residue`;
/// - the top bits of `P` equal `firstbits` (a value with `firstbits_len` bits).
pub fn quality_prime<D: Digest>(
    nbits: usize,
    modulus: &MpInt,
    residue: &MpInt,
    factor: Option<&MpInt>,
    firstbits: Option<(u64, usize)>,
    rng: &mut RandomGenerator<D>,
) -> MpInt {
    loop {
        let byte_len = nbits.div_ceil(8);
        let mut bytes = vec![0u8; byte_len];
        rng.fill_bytes(&mut bytes);

        let mut candidate = MpInt::from_bytes_be(&bytes);
        // Force the top two bits (ensures the product of two such primes
        // has the expected combined bit length) and the bottom bit (odd).
        candidate.set_bit(nbits - 1);
        candidate.set_bit(nbits - 2);
        candidate.set_bit(0);

        if let Some((prefix, prefix_bits)) = firstbits {
            let mask = MpInt::from_u64(prefix).shl(nbits - prefix_bits);
            candidate = candidate.bitand(&MpInt::pow2(nbits).sub(&MpInt::from_u64(1)));
            candidate = candidate.bitor(&mask);
            candidate.set_bit(0);
        }

        let test_value = match factor {
            Some(f) => f.mul(&candidate).add(&MpInt::from_u64(1)),
            None => candidate.clone(),
        };

        if test_value.count_bits() != nbits {
            continue;
        }

        let residue_ok = candidate
            .modulo(modulus)
            .map(|r| r != *residue)
            .unwrap_or(false);
        if !residue_ok {
            continue;
        }

        let mut probe = candidate.clone();
        loop {
            if is_prime(&probe, rng) {
                let final_value = match factor {
                    Some(f) => f.mul(&probe).add(&MpInt::from_u64(1)),
                    None => probe.clone(),
                };
                if final_value.count_bits() == nbits {
                    return probe;
                }
                break;
            }
            probe = probe.add(&MpInt::from_u64(2));
            if probe.count_bits() != nbits {
                break;
            }
        }
    }
}

/// Emits two small multi-bit prefixes whose product has a guaranteed
/// carry, so that a product of two primes carrying those prefixes has a
/// predictable combined bit length: pick `a` just above `sqrt(2)/2 * 2^bits`
/// and `b` its complement so that `a * b` overflows into the next bit.
pub fn invent_firstbits(prefix_bits: usize) -> ((u64, usize), (u64, usize)) {
    let half = 1u64 << (prefix_bits - 1);
    let a = half | (half >> 1); // 0.11xxx pattern, guarantees the high product bit.
    let b = half | 1;
    ((a, prefix_bits), (b, prefix_bits))
}
