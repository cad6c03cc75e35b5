//! Benchmark: parse a full protocol list, run the per-version support check,
//! and aggregate a realistic authority vote. These operations run roughly
//! once per consensus round, so this bench guards against accidental blowups
//! rather than chasing micro-optimizations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use protover::{all_supported, compute_vote, get_supported_protocols, parse};

fn synthetic_votes(n: usize) -> Vec<String> {
    // Voters agree on most entries and disagree on a few version boundaries,
    // the shape a real authority vote set has.
    (0..n)
        .map(|i| {
            let link_high = 3 + (i % 3) as u32;
            let hsdir_high = 1 + (i % 2) as u32;
            format!(
                "Cons=1-2 Desc=1-2 DirCache=1-2 HSDir=1-{} HSIntro=3-4 HSRend=1-2 \
                 Link=1-{} LinkAuth=1,3 Microdesc=1-2 Relay=1-2",
                hsdir_high, link_high
            )
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let text = get_supported_protocols();
    c.bench_function("parse_registry_list", |b| {
        b.iter(|| parse(black_box(&text)).expect("parse"))
    });
}

fn bench_all_supported(c: &mut Criterion) {
    let text = get_supported_protocols();
    c.bench_function("all_supported_full_list", |b| {
        b.iter(|| all_supported(black_box(&text)))
    });
}

fn bench_vote(c: &mut Criterion) {
    let votes = synthetic_votes(9);
    c.bench_function("compute_vote_9_authorities", |b| {
        b.iter(|| compute_vote(black_box(&votes), 5))
    });
}

criterion_group!(benches, bench_parse, bench_all_supported, bench_vote);
criterion_main!(benches);
