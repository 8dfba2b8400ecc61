use criterion::{criterion_group, criterion_main, Criterion};
use huff::{compress, decompress};

fn skewed_input(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| match i % 16 {
            0..=7 => b'e',
            8..=11 => b't',
            12..=13 => b'a',
            14 => b'o',
            _ => b'z',
        })
        .collect()
}

fn uniform_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131) as u8).collect()
}

fn bench_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_skewed");
    let input = skewed_input(100_000);

    group.bench_function("compress", |b| b.iter(|| compress(&input)));

    let container = compress(&input);
    group.bench_function("decompress", |b| b.iter(|| decompress(&container).unwrap()));
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_uniform");
    let input = uniform_input(100_000);

    group.bench_function("compress", |b| b.iter(|| compress(&input)));

    let container = compress(&input);
    group.bench_function("decompress", |b| b.iter(|| decompress(&container).unwrap()));
}

criterion_group!(benches, bench_skewed, bench_uniform);
criterion_main!(benches);
