use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tidy8::{decode, sanitize, validate};

/// Mostly-ASCII prose with multilingual islands, repeated to a few
/// kilobytes so per-call overhead disappears into the measurement.
fn multilingual() -> Vec<u8> {
    "Hello world, Καλημέρα κόσμε, コンニチハ, 안녕하세요 — £4.99 ≠ €5.00 𐍈 "
        .as_bytes()
        .repeat(64)
}

fn ascii() -> Vec<u8> {
    "The quick brown fox jumps over the lazy dog. 0123456789. "
        .as_bytes()
        .repeat(64)
}

/// Byte noise: every value once per cycle, most of it ill-formed.
fn noise() -> Vec<u8> {
    (0..=255_u8).cycle().take(4096).collect()
}

pub fn run_benchmarks(c: &mut Criterion) {
    let inputs = [
        ("ascii", ascii()),
        ("multilingual", multilingual()),
        ("noise", noise()),
    ];

    let mut group = c.benchmark_group("validate");
    for (name, input) in &inputs {
        group.bench_function(*name, |b| b.iter(|| validate(black_box(input))));
    }
    group.finish();

    let mut group = c.benchmark_group("decode");
    for (name, input) in &inputs {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut sink = Vec::with_capacity(input.len());
                decode(black_box(input), &mut sink);
                sink
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sanitize");
    for (name, input) in &inputs {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut sink = Vec::with_capacity(input.len());
                sanitize(black_box(input), &mut sink);
                sink
            })
        });
    }
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
