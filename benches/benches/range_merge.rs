// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use starmesh_ranges::{RangeSet, Span};

fn gen_strided_spans(n: usize, width: u64, gap: u64) -> Vec<Span<u64>> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i as u64 * (width + gap);
        out.push(Span::new(lo, lo + width - 1));
    }
    out
}

fn gen_overlapping_spans(n: usize, width: u64, step: u64) -> Vec<Span<u64>> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i as u64 * step;
        out.push(Span::new(lo, lo + width - 1));
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_random_spans(count: usize, key_space: u64, max_width: u64) -> Vec<Span<u64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let lo = rng.next_u64() % key_space;
        let width = rng.next_u64() % max_width;
        out.push(Span::new(lo, lo + width));
    }
    out
}

fn gen_clustered_spans(n_clusters: usize, per_cluster: usize, spread: u64) -> Vec<Span<u64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push(rng.next_u64() % 10_000_000);
    }
    for center in centers {
        for _ in 0..per_cluster {
            let lo = center + rng.next_u64() % spread;
            let width = rng.next_u64() % 16;
            out.push(Span::new(lo, lo + width));
        }
    }
    out
}

fn bench_merge_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_disjoint");
    for &n in &[1024usize, 4096, 16384] {
        let spans = gen_strided_spans(n, 8, 8);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("merge_n{}", n), |b| {
            b.iter_batched(
                RangeSet::<u64>::new,
                |mut set| {
                    for s in spans.iter().copied() {
                        let _ = set.merge(s);
                    }
                    black_box(set.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_merge_overlapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_overlapping");
    for &n in &[1024usize, 4096] {
        // Each span overlaps its neighbor, so the set stays at one span.
        let spans = gen_overlapping_spans(n, 16, 8);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("merge_n{}", n), |b| {
            b.iter_batched(
                RangeSet::<u64>::new,
                |mut set| {
                    for s in spans.iter().copied() {
                        let _ = set.merge(s);
                    }
                    black_box(set.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_merge_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_random");
    let spans = gen_random_spans(4096, 1_000_000, 64);
    group.throughput(Throughput::Elements(spans.len() as u64));
    group.bench_function("merge_random_4096", |b| {
        b.iter_batched(
            RangeSet::<u64>::new,
            |mut set| {
                for s in spans.iter().copied() {
                    let _ = set.merge(s);
                }
                black_box(set.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_merge_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_clustered");
    let spans = gen_clustered_spans(16, 256, 2048);
    group.throughput(Throughput::Elements(spans.len() as u64));
    group.bench_function("merge_clustered_16x256", |b| {
        b.iter_batched(
            RangeSet::<u64>::new,
            |mut set| {
                for s in spans.iter().copied() {
                    let _ = set.merge(s);
                }
                black_box(set.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_classify_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_heavy");
    let spans = gen_strided_spans(8192, 8, 8);
    group.bench_function("build_then_many_classifies", |b| {
        b.iter_batched(
            || {
                let mut set = RangeSet::<u64>::new();
                for s in spans.iter().copied() {
                    let _ = set.merge(s);
                }
                set
            },
            |set| {
                let mut inside = 0usize;
                for q in 0..4096u64 {
                    if set.contains(q * 31 % (8192 * 16)) {
                        inside += 1;
                    }
                }
                black_box(inside);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let spans = gen_strided_spans(8192, 8, 8);
    group.bench_function("drain_iter", |b| {
        b.iter_batched(
            || {
                let mut set = RangeSet::<u64>::new();
                for s in spans.iter().copied() {
                    let _ = set.merge(s);
                }
                set
            },
            |set| {
                let total: u64 = set.iter().map(|s| s.hi - s.lo + 1).sum();
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("drain_cursor", |b| {
        b.iter_batched(
            || {
                let mut set = RangeSet::<u64>::new();
                for s in spans.iter().copied() {
                    let _ = set.merge(s);
                }
                set
            },
            |mut set| {
                let mut total = 0u64;
                while let Some(s) = set.next_span() {
                    total += s.hi - s.lo + 1;
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_merge_disjoint,
    bench_merge_overlapping,
    bench_merge_random,
    bench_merge_clustered,
    bench_classify_heavy,
    bench_iterate,
);
criterion_main!(benches);
