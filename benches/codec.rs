//! Benchmarks for zappy encode and decode throughput.
//!
//! Covers the data patterns the format cares about: incompressible bytes,
//! long runs, sparse bitmaps, and mixed text-like input.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate random (incompressible) data using a simple xorshift PRNG
fn generate_random_data(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.push((state & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    pattern.iter().cycle().take(size).copied().collect()
}

/// Generate a sparse bitmap: zeros with 0x01 every 1000 bytes
fn generate_sparse_bitmap(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    let mut pos = 0;
    while pos < size {
        data[pos] = 0x01;
        pos += 1000;
    }
    data
}

/// Generate text-like data with local repetition
fn generate_text_data(size: usize) -> Vec<u8> {
    let sentences = [
        b"the quick brown fox jumps over the lazy dog. ".as_slice(),
        b"pack my box with five dozen liquor jugs. ".as_slice(),
        b"how vexingly quick daft zebras jump! ".as_slice(),
    ];
    let mut data = Vec::with_capacity(size);
    let mut i = 0;
    while data.len() < size {
        let s = sentences[i % sentences.len()];
        let remaining = size - data.len();
        data.extend_from_slice(&s[..remaining.min(s.len())]);
        i += 1;
    }
    data
}

fn bench_encode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_sizes");

    for size in [1024, 64 * 1024, 1024 * 1024] {
        let data = generate_text_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("text", size), &data, |b, data| {
            let mut buf = Vec::new();
            b.iter(|| {
                buf = zappy::encode(std::mem::take(&mut buf), data);
                buf.len()
            });
        });
    }

    group.finish();
}

fn bench_encode_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_patterns");
    let size = 256 * 1024;

    let inputs = [
        ("random", generate_random_data(size, 0xc0ffee)),
        ("repetitive", generate_repetitive_data(size)),
        ("sparse_bitmap", generate_sparse_bitmap(size)),
        ("text", generate_text_data(size)),
    ];

    group.throughput(Throughput::Bytes(size as u64));
    for (name, data) in &inputs {
        group.bench_function(*name, |b| {
            let mut buf = Vec::new();
            b.iter(|| {
                buf = zappy::encode(std::mem::take(&mut buf), data);
                buf.len()
            });
        });
    }

    group.finish();
}

fn bench_decode_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_patterns");
    let size = 256 * 1024;

    let inputs = [
        ("random", generate_random_data(size, 0xc0ffee)),
        ("repetitive", generate_repetitive_data(size)),
        ("sparse_bitmap", generate_sparse_bitmap(size)),
        ("text", generate_text_data(size)),
    ];

    group.throughput(Throughput::Bytes(size as u64));
    for (name, data) in &inputs {
        let block = zappy::encode(Vec::new(), data);
        group.bench_function(*name, |b| {
            let mut buf = Vec::new();
            b.iter(|| {
                buf = zappy::decode(std::mem::take(&mut buf), &block).unwrap();
                buf.len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_sizes, bench_encode_patterns, bench_decode_patterns);
criterion_main!(benches);
