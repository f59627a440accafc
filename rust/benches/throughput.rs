//! Benchmarks for key setup and encrypt/decrypt throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use modalpha::Cipher;

const BENCH_KEYWORD: &str = "КРИПТОГРАФИЯ";

const PANGRAM: &str = "СЪЕШЬЖЕЕЩЁЭТИХМЯГКИХФРАНЦУЗСКИХБУЛОКДАВЫПЕЙЧАЮ";

const TEXT_LENGTHS: [usize; 3] = [64, 1024, 16384];

fn sample_text(len: usize) -> String {
    PANGRAM.chars().cycle().take(len).collect()
}

fn bench_cipher_new(c: &mut Criterion) {
    c.bench_function("cipher_new", |b| {
        b.iter(|| Cipher::new(black_box(BENCH_KEYWORD)).unwrap());
    });
}

fn bench_encrypt(c: &mut Criterion) {
    let cipher = Cipher::new(BENCH_KEYWORD).unwrap();
    let mut group = c.benchmark_group("encrypt");
    for len in TEXT_LENGTHS {
        let text = sample_text(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| cipher.encrypt(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let cipher = Cipher::new(BENCH_KEYWORD).unwrap();
    let mut group = c.benchmark_group("decrypt");
    for len in TEXT_LENGTHS {
        let text = cipher.encrypt(&sample_text(len)).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| cipher.decrypt(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cipher_new, bench_encrypt, bench_decrypt);
criterion_main!(benches);
