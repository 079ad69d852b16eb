//! Benchmarks for hillcrypt cipher operations.
//!
//! Measures key-schedule construction (matrix inversion), end-to-end
//! encrypt/decrypt of a fixed message, and throughput scaling across
//! message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hillcrypt::{HybridCipher, ModularMatrix};

/// Key matrix used consistently across all benchmarks.
fn bench_key() -> ModularMatrix {
    ModularMatrix::from_rows([[3, 3], [2, 5]])
}

/// Columnar key used consistently across all benchmarks.
const BENCH_COLUMNAR_KEY: &str = "431256";

/// Benchmarks `HybridCipher::new()` construction time.
///
/// Covers determinant and adjugate computation plus the extended-Euclid
/// modular inverse, which is the whole key schedule of the scheme.
fn bench_construction(c: &mut Criterion) {
    c.bench_function("cipher_construction", |b| {
        b.iter(|| {
            HybridCipher::new(black_box(bench_key()), black_box(BENCH_COLUMNAR_KEY)).unwrap()
        });
    });
}

/// Benchmarks encryption of a short fixed message.
fn bench_encrypt(c: &mut Criterion) {
    let cipher = HybridCipher::new(bench_key(), BENCH_COLUMNAR_KEY).unwrap();
    let plaintext = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

    c.bench_function("encrypt_pangram", |b| {
        b.iter(|| cipher.encrypt(black_box(plaintext)).unwrap());
    });
}

/// Benchmarks decryption of a short fixed message.
fn bench_decrypt(c: &mut Criterion) {
    let cipher = HybridCipher::new(bench_key(), BENCH_COLUMNAR_KEY).unwrap();
    let (ciphertext, length) = cipher
        .encrypt("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG")
        .unwrap();

    c.bench_function("decrypt_pangram", |b| {
        b.iter(|| cipher.decrypt(black_box(&ciphertext), length).unwrap());
    });
}

/// Benchmarks encrypt throughput scaling across message lengths.
fn bench_encrypt_scaling(c: &mut Criterion) {
    let cipher = HybridCipher::new(bench_key(), BENCH_COLUMNAR_KEY).unwrap();

    let mut group = c.benchmark_group("encrypt_scaling");
    for len in [64usize, 256, 1024, 4096] {
        let plaintext: String = ('A'..='Z').cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &plaintext, |b, text| {
            b.iter(|| cipher.encrypt(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_scaling
);
criterion_main!(benches);
