mod common;

use common::TestSha256;
use nebula_pkcore::prng::{MersenneTwister, Mother, RandomGenerator, TlsPrf, Xorshift128};

#[test]
fn every_variant_is_deterministic_for_a_fixed_seed() {
    let seeds_and_builders: Vec<(
        &str,
        Box<dyn Fn() -> RandomGenerator<TestSha256>>,
    )> = vec![
        ("mother", Box::new(|| RandomGenerator::Mother(Mother::new(0x1234)))),
        ("mt19937", Box::new(|| RandomGenerator::Mt19937(MersenneTwister::new(0x1234)))),
        ("xorshift128", Box::new(|| RandomGenerator::Xorshift128(Xorshift128::new(0x1234)))),
        ("tls_prf", Box::new(|| RandomGenerator::TlsPrf(TlsPrf::new(0x1234)))),
    ];

    for (name, build) in seeds_and_builders {
        let mut a = build();
        let mut b = build();
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32(), "{name} generator diverged across identical seeds");
        }
    }
}

#[test]
fn fill_bytes_matches_next_u32_little_endian() {
    let mut a: RandomGenerator<TestSha256> = RandomGenerator::Mother(Mother::new(7));
    let mut b: RandomGenerator<TestSha256> = RandomGenerator::Mother(Mother::new(7));

    let mut buf = [0u8; 8];
    a.fill_bytes(&mut buf);

    let w0 = b.next_u32().to_le_bytes();
    let w1 = b.next_u32().to_le_bytes();
    assert_eq!(&buf[0..4], &w0);
    assert_eq!(&buf[4..8], &w1);
}

#[test]
fn next_below_never_exceeds_the_bound() {
    let mut r: RandomGenerator<TestSha256> = RandomGenerator::Xorshift128(Xorshift128::new(99));
    for _ in 0..2000 {
        let v = r.next_below(17);
        assert!(v < 17);
    }
}

#[test]
fn next_below_zero_bound_is_always_zero() {
    let mut r: RandomGenerator<TestSha256> = RandomGenerator::Mother(Mother::new(1));
    for _ in 0..16 {
        assert_eq!(r.next_below(0), 0);
    }
}
