//! Min-max queue benchmarks
//!
//! Measures the three workloads the queue is built for, with `std`'s
//! `BinaryHeap` as a single-ended baseline where one applies:
//!
//! - **Fill and drain**: push `n` elements, then pop them all from one end
//! - **Double-ended drain**: pop alternately from both ends
//! - **Bounded top-k**: offer a long stream to a queue with a maximum size
//!
//! ```sh
//! cargo bench --bench minmax_benchmark
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_minmax_queue::{MinMaxHeap, MinMaxPriorityQueue, Natural};

/// Seeded values so every run sees the same input
fn random_values(count: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state >> 16
        })
        .collect()
}

fn benchmark_fill_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_and_drain");

    for size in [100, 1_000, 10_000, 100_000] {
        let values = random_values(size, 42);

        group.bench_with_input(BenchmarkId::new("min_max_heap", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = MinMaxHeap::with_capacity(vs.len());
                for &v in vs {
                    heap.push(v);
                }
                while let Some(v) = heap.pop_min() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("binary_heap", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(vs.len());
                for &v in vs {
                    heap.push(Reverse(v));
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("heapify", size), &values, |b, vs| {
            b.iter(|| black_box(MinMaxPriorityQueue::create_from(vs.iter().copied()).len()))
        });
    }

    group.finish();
}

fn benchmark_double_ended_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_ended_drain");

    for size in [1_000, 10_000, 100_000] {
        let values = random_values(size, 7);
        let heap = MinMaxHeap::from_vec(values, size, Natural);

        group.bench_with_input(BenchmarkId::new("min_max_heap", size), &heap, |b, h| {
            b.iter(|| {
                let mut heap = h.clone();
                loop {
                    match (heap.pop_min(), heap.pop_max()) {
                        (None, None) => break,
                        pair => {
                            black_box(pair);
                        }
                    }
                }
            })
        });
    }

    group.finish();
}

fn benchmark_bounded_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_top_k");
    let stream = random_values(100_000, 99);

    for k in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("offer", k), &stream, |b, s| {
            b.iter(|| {
                let mut queue = MinMaxPriorityQueue::builder().maximum_size(k).create();
                for &v in s {
                    black_box(queue.offer(v));
                }
                queue.len()
            })
        });

        group.bench_with_input(BenchmarkId::new("binary_heap", k), &stream, |b, s| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(k + 1);
                for &v in s {
                    if heap.len() < k {
                        heap.push(v);
                    } else if heap.peek().is_some_and(|&worst| v < worst) {
                        heap.pop();
                        heap.push(v);
                    }
                }
                heap.len()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fill_and_drain,
    benchmark_double_ended_drain,
    benchmark_bounded_top_k,
);

criterion_main!(benches);
