//! Small-prime sieve and Miller-Rabin-based primality / prime generation.

mod primality;

use std::sync::LazyLock;

/// All primes in `[3, 65537]`, ascending. Built once via a sieve of
/// Eratosthenes behind a `LazyLock`, the same process-wide-singleton
/// pattern this codebase's secp256k1 context already uses, rather than a
/// 6541-entry literal table.
pub static SMALL_PRIMES: LazyLock<Vec<u32>> = LazyLock::new(sieve_small_primes);

const SMALL_PRIME_LIMIT: u32 = 65537;

fn sieve_small_primes() -> Vec<u32> {
    let limit = SMALL_PRIME_LIMIT as usize;
    let mut is_composite = vec![false; limit + 1];
    let mut primes = Vec::new();

    let mut n = 2usize;
    while n * n <= limit {
        if !is_composite[n] {
            let mut m = n * n;
            while m <= limit {
                is_composite[m] = true;
                m += n;
            }
        }
        n += 1;
    }

    for n in 3..=limit {
        if !is_composite[n] && n % 2 != 0 {
            primes.push(n as u32);
        }
    }
    primes
}

/// Returns the `i`-th prime in `[3, 65537]`; out-of-range `i` is clamped to
/// the ends of the table.
pub fn small_prime(i: usize) -> u32 {
    let table = &*SMALL_PRIMES;
    let idx = i.min(table.len() - 1);
    table[idx]
}

/// Returns the largest small prime `<= n`, clamped to the smallest entry.
pub fn closest_small_prime(n: u32) -> u32 {
    let table = &*SMALL_PRIMES;
    match table.binary_search(&n) {
        Ok(idx) => table[idx],
        Err(0) => table[0],
        Err(idx) => table[idx - 1],
    }
}

/// Returns the smallest small prime strictly greater than `n`, clamped to
/// the largest entry.
pub fn next_small_prime(n: u32) -> u32 {
    let table = &*SMALL_PRIMES;
    match table.binary_search(&n) {
        Ok(idx) | Err(idx) => {
            let next_idx = if table.get(idx) == Some(&n) { idx + 1 } else { idx };
            table.get(next_idx).copied().unwrap_or(*table.last().unwrap())
        }
    }
}

/// Table-lookup membership test.
pub fn is_small_prime(n: u32) -> bool {
    SMALL_PRIMES.binary_search(&n).is_ok()
}

/// Draws a uniformly chosen small prime using `rng`.
pub fn random_small_prime<D: crate::digest::Digest>(rng: &mut crate::prng::RandomGenerator<D>) -> u32 {
    let table = &*SMALL_PRIMES;
    let idx = rng.next_below(table.len() as u32) as usize;
    table[idx]
}

pub use primality::{
    invent_firstbits, is_prime, next_prime, next_prime_candidate, quality_prime, MILLER_RABIN_ROUNDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_entry_count() {
        assert_eq!(SMALL_PRIMES.len(), 6541);
    }

    #[test]
    fn first_entry_is_three() {
        assert_eq!(small_prime(0), 3);
    }

    #[test]
    fn last_entry_is_at_most_limit() {
        assert!(*SMALL_PRIMES.last().unwrap() <= SMALL_PRIME_LIMIT);
        assert_eq!(*SMALL_PRIMES.last().unwrap(), 65521);
    }

    #[test]
    fn lookup_round_trips() {
        for i in [0usize, 100, 3000, 6540] {
            assert!(is_small_prime(small_prime(i)));
        }
    }

    #[test]
    fn closest_and_next_bracket_input() {
        assert_eq!(closest_small_prime(10), 7);
        assert_eq!(next_small_prime(10), 11);
    }
}
