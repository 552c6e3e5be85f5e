mod common;

use common::TestSha256;
use nebula_pkcore::mp_int::MpInt;
use nebula_pkcore::prng::{Mother, RandomGenerator};
use nebula_pkcore::primes::{self, invent_firstbits, is_prime, next_prime, quality_prime};

fn rng() -> RandomGenerator<TestSha256> {
    RandomGenerator::Mother(Mother::new(0x9E37_79B9))
}

#[test]
fn small_prime_table_agrees_with_is_prime_for_its_own_entries() {
    let mut r = rng();
    for i in [0usize, 10, 500, 3000, 6540] {
        let p = primes::small_prime(i);
        assert!(is_prime(&MpInt::from_u64(p as u64), &mut r));
    }
}

#[test]
fn next_prime_never_returns_a_composite() {
    let mut r = rng();
    let mut n = MpInt::from_u64(1_000_000);
    for _ in 0..10 {
        n = next_prime(&n, &mut r);
        assert!(is_prime(&n, &mut r));
        n = n.add(&MpInt::from_u64(1));
    }
}

#[test]
fn quality_prime_honors_the_requested_bit_length_and_firstbits() {
    let mut r = rng();
    let ((prefix, prefix_bits), _) = invent_firstbits(8);
    let modulus = MpInt::from_u64(65537);
    let residue = MpInt::from_u64(1);

    let p = quality_prime(128, &modulus, &residue, None, Some((prefix, prefix_bits)), &mut r);
    assert_eq!(p.count_bits(), 128);
    assert!(is_prime(&p, &mut r));
    assert_ne!(p.modulo(&modulus).unwrap(), residue);
}
