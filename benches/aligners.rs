//! Aligner benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use levenshtein_trio::{align_divide_and_conquer, align_quadratic, distance_within_threshold};

fn make_pair(len: usize) -> (Vec<u8>, Vec<u8>) {
    let source: Vec<u8> = (0..len).map(|i| b"ACGT"[(i * 7 + i / 3) % 4]).collect();
    let mut target = source.clone();
    for i in (0..len).step_by(50) {
        target[i] = b'N';
    }
    (source, target)
}

fn benchmark_aligners(c: &mut Criterion) {
    let mut group = c.benchmark_group("aligners");
    for len in [256usize, 1024] {
        let (s, t) = make_pair(len);
        group.bench_with_input(BenchmarkId::new("quadratic", len), &len, |b, _| {
            b.iter(|| black_box(align_quadratic(&s, &t).distance));
        });
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", len), &len, |b, _| {
            b.iter(|| black_box(align_divide_and_conquer(&s, &t).len()));
        });
        group.bench_with_input(BenchmarkId::new("banded_k32", len), &len, |b, _| {
            b.iter(|| black_box(distance_within_threshold(&s, &t, 32)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_aligners);
criterion_main!(benches);
