use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pharos_core::models::{ContentPath, ContentStatus};
use pharos_remediation::matcher::{find_similar_path, levenshtein};

fn bench_levenshtein(c: &mut Criterion) {
    let a = "/content/site/products/widget-pro-max-2026";
    let b = "/content/site/products/widget-pro-mini-2025";
    c.bench_function("levenshtein/typical_paths", |bencher| {
        bencher.iter(|| levenshtein(black_box(a), black_box(b)))
    });
}

fn bench_find_similar_path(c: &mut Criterion) {
    // One directory's worth of children, the bounded case rule
    // evaluation actually sees.
    let candidates: Vec<ContentPath> = (0..200)
        .map(|i| {
            ContentPath::new(
                format!("/content/site/en-US/products/widget-{i}"),
                ContentStatus::Published,
                None,
            )
        })
        .collect();

    c.bench_function("find_similar_path/200_candidates", |bencher| {
        bencher.iter(|| {
            find_similar_path(
                black_box("/content/site/en-US/products/wdget-42"),
                black_box(&candidates),
                5,
            )
        })
    });
}

criterion_group!(benches, bench_levenshtein, bench_find_similar_path);
criterion_main!(benches);
