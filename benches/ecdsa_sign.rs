use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nebula_pkcore::curve::params::SECP256R1;
use nebula_pkcore::curve::CurveId;
use nebula_pkcore::digest::Digest;
use nebula_pkcore::ecc::{ecdsa, EccKey};
use nebula_pkcore::prng::{Mother, RandomGenerator};

#[derive(Clone)]
struct BenchSha256;

impl Digest for BenchSha256 {
    const OUTPUT_SIZE: usize = 32;

    fn new() -> Self {
        BenchSha256
    }

    fn update(&mut self, _data: &[u8]) {}

    fn finalize(self) -> Vec<u8> {
        vec![0x42; 32]
    }
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut rng: RandomGenerator<BenchSha256> = RandomGenerator::Mother(Mother::new(0x5eed));
    let key = EccKey::generate(CurveId::Secp256r1, &mut rng).unwrap();
    let private = key.private.as_ref().unwrap();
    let hash = vec![0xab; 32];

    c.bench_function("ecdsa_sign_p256", |bencher| {
        bencher.iter(|| ecdsa::sign::<BenchSha256>(black_box(private), black_box(&hash), &SECP256R1, None).unwrap())
    });

    let sig = ecdsa::sign::<BenchSha256>(private, &hash, &SECP256R1, None).unwrap();
    c.bench_function("ecdsa_verify_p256", |bencher| {
        bencher.iter(|| ecdsa::verify(black_box(&hash), black_box(&sig), &key.public, &SECP256R1))
    });
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
