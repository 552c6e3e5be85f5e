use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nebula_pkcore::mp_int::MpInt;

fn bench_mulmod(c: &mut Criterion) {
    let modulus = MpInt::read_radix(
        "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
        16,
    )
    .unwrap();
    let a = MpInt::read_radix("ABCDEF0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF012345678", 16).unwrap();
    let b = MpInt::read_radix("123456789ABCDEF0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF", 16).unwrap();

    c.bench_function("mulmod_256bit", |bencher| {
        bencher.iter(|| black_box(&a).mulmod(black_box(&b), black_box(&modulus)).unwrap())
    });

    c.bench_function("exptmod_256bit", |bencher| {
        bencher.iter(|| black_box(&a).exptmod(black_box(&b), black_box(&modulus)).unwrap())
    });
}

criterion_group!(benches, bench_mulmod);
criterion_main!(benches);
