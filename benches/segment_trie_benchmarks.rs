//! Segment Trie Benchmarks
//!
//! Benchmarks for the segment trie, implemented with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use segment_trie::SegmentTrie;
use std::time::Duration;

const LETTERS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Builds a random key with `n` single-character segments.
fn rand_key(rng: &mut StdRng, n: usize) -> String {
    (0..n.max(1))
        .map(|_| (LETTERS[rng.gen_range(0..LETTERS.len())] as char).to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Benchmark insertion and lookup
fn bench_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_trie_put_get");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Random keys share little beyond the first segments
    group.bench_function("put_rand_keys", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        let mut trie = SegmentTrie::new(".");
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            trie.put(rand_key(&mut rng, 128), black_box(i));
        });
    });

    // Batches of 16 keys behind a common 63-segment prefix
    group.bench_function("put_prefixed_keys", |b| {
        let mut rng = StdRng::seed_from_u64(11);
        let mut trie = SegmentTrie::new(".");
        let mut prefix = rand_key(&mut rng, 63);
        let mut i = 0u64;
        b.iter(|| {
            if i % 16 == 0 {
                prefix = rand_key(&mut rng, 63);
            }
            i += 1;
            let key = format!("{prefix}.{}", rand_key(&mut rng, 63));
            trie.put(key, black_box(i));
        });
    });

    group.bench_function("put_and_get_prefixed_keys", |b| {
        let mut rng = StdRng::seed_from_u64(13);
        let mut trie = SegmentTrie::new(".");
        let mut prefix = rand_key(&mut rng, 63);
        let mut i = 0u64;
        b.iter(|| {
            if i % 16 == 0 {
                prefix = rand_key(&mut rng, 63);
            }
            i += 1;
            let key = format!("{prefix}.{}", rand_key(&mut rng, 63));
            trie.put(&key, i);
            black_box(trie.get(&key));
        });
    });

    group.finish();
}

/// Benchmark wildcard queries and full enumeration
fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_trie_match");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    // service.<i>.endpoint.<j>
    let mut trie = SegmentTrie::new(".");
    for i in 0..100 {
        for j in 0..10 {
            trie.put(format!("service.{i}.endpoint.{j}"), i * 10 + j);
        }
    }

    for pattern in ["service.42.endpoint.7", "service.42.endpoint.*", "service.*.endpoint.3", "*.*.*.*"] {
        group.bench_with_input(BenchmarkId::new("match_pattern", pattern), &pattern, |b, p| {
            b.iter(|| black_box(trie.match_pattern(p)));
        });
    }

    group.bench_function("to_map", |b| {
        b.iter(|| black_box(trie.to_map()));
    });

    group.bench_function("pop_subtree", |b| {
        b.iter_batched(
            || trie.clone(),
            |mut trie| {
                for j in 0..10 {
                    black_box(trie.pop(format!("service.7.endpoint.{j}")));
                }
                trie
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_put_get, bench_match
}

criterion_main!(benches);
