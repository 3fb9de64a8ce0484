// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Benchmark the ladder on both curves, point decompression, and the
//! birational maps.

#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, Criterion};

use rand_core::OsRng;

use curve25519_birational::birational::{edwards_to_montgomery, montgomery_to_edwards};
use curve25519_birational::constants::{ED25519_BASEPOINT_POINT, X25519_BASEPOINT};
use curve25519_birational::x25519::StaticSecret;
use curve25519_birational::Scalar;

fn bench_edwards_mul(c: &mut Criterion) {
    let k = Scalar::random(&mut OsRng);
    c.bench_function("edwards ladder", move |b| {
        b.iter(|| ED25519_BASEPOINT_POINT.mul(&k))
    });
}

fn bench_montgomery_mul(c: &mut Criterion) {
    let k = Scalar::random(&mut OsRng);
    c.bench_function("montgomery ladder", move |b| {
        b.iter(|| X25519_BASEPOINT.mul(&k))
    });
}

fn bench_decompress(c: &mut Criterion) {
    let P = ED25519_BASEPOINT_POINT
        .mul(&Scalar::random(&mut OsRng))
        .unwrap();
    let compressed = P.compress();
    c.bench_function("edwards decompress", move |b| {
        b.iter(|| compressed.decompress())
    });
}

fn bench_maps(c: &mut Criterion) {
    let P = ED25519_BASEPOINT_POINT
        .mul(&Scalar::random(&mut OsRng))
        .unwrap();
    let M = edwards_to_montgomery(&P).unwrap();
    c.bench_function("edwards to montgomery", move |b| {
        b.iter(|| edwards_to_montgomery(&P))
    });
    c.bench_function("montgomery to edwards", move |b| {
        b.iter(|| montgomery_to_edwards(&M))
    });
}

fn bench_diffie_hellman(c: &mut Criterion) {
    let bob_secret = StaticSecret::random(&mut OsRng);
    let bob_public = bob_secret.public_key().unwrap();

    c.bench_function("diffie_hellman", move |b| {
        b.iter_with_setup(
            || StaticSecret::random(&mut OsRng),
            |alice_secret| alice_secret.diffie_hellman(&bob_public),
        )
    });
}

criterion_group! {
    name = ladder_benches;
    config = Criterion::default();
    targets =
        bench_edwards_mul,
        bench_montgomery_mul,
        bench_decompress,
        bench_maps,
        bench_diffie_hellman,
}
criterion_main! {
    ladder_benches,
}
