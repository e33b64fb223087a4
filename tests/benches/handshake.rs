//! Benchmarks for a complete key agreement and its wire encoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dhec_algorithms::{Curve, RngSource};
use dhec_exchange::{decode_point, encode_point, read_frame, write_frame, KeyPair};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Cursor;

fn bench_key_agreement(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let mut source = RngSource::new(ChaCha20Rng::seed_from_u64(7));
    let peer = KeyPair::generate(&curve, &mut source, 256).expect("peer key pair");

    let mut group = c.benchmark_group("key_agreement");
    group.sample_size(20);

    group.bench_function("generate_keypair", |bench| {
        bench.iter(|| KeyPair::generate(&curve, &mut source, 256));
    });

    let local = KeyPair::generate(&curve, &mut source, 256).expect("local key pair");
    group.bench_function("derive_secret", |bench| {
        bench.iter(|| local.derive_secret(&curve, black_box(peer.public())));
    });

    group.finish();
}

fn bench_wire_format(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let point = curve.generator().clone();
    let payload = encode_point(&point).expect("encoded point");
    let mut framed = Vec::new();
    write_frame(&mut framed, &payload).expect("framed point");

    let mut group = c.benchmark_group("wire_format");

    group.bench_function("encode_and_frame", |bench| {
        bench.iter(|| {
            let mut out = Vec::with_capacity(framed.len());
            write_frame(&mut out, &encode_point(black_box(&point)).expect("encode"))
                .expect("frame");
            out
        });
    });

    group.bench_function("read_and_decode", |bench| {
        bench.iter(|| {
            let payload = read_frame(&mut Cursor::new(black_box(&framed))).expect("frame");
            decode_point(&payload)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_key_agreement, bench_wire_format);
criterion_main!(benches);
