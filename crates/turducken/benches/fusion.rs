use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use turducken::{fuse_forward, fuse_inverse, words};

const TEXT: &str = "The quick brown fox jumps over the lazy dog, while XMLHttpRequest \
                    handlers don't wait for the 21st century's turkeyDuckChicken recipes.";

fn bench_fusion(c: &mut Criterion) {
    let tokens: Vec<String> = words(TEXT).into_iter().map(str::to_owned).collect();

    c.bench_function("words", |b| b.iter(|| words(black_box(TEXT))));
    c.bench_function("forward_text", |b| b.iter(|| fuse_forward(black_box(TEXT))));
    c.bench_function("inverse_text", |b| b.iter(|| fuse_inverse(black_box(TEXT))));
    c.bench_function("forward_tokens", |b| {
        b.iter(|| fuse_forward(black_box(tokens.as_slice())))
    });
}

criterion_group!(benches, bench_fusion);
criterion_main!(benches);
