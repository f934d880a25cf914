use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use branchtrace_benchmarks::{input_fingerprint, run_quiet, shuffled_input};
use branchtrace_harness::layouts::{FourBranch, TwoBranch};
use branchtrace_kernel::algo::sort::{merge_sort, quick_sort};
use branchtrace_kernel::indirect::accumulator::{run_accumulator_loop, REFERENCE_SENTINEL};
use branchtrace_kernel::indirect::table::{single_shot, DispatchTableV1};

const SIZES: [usize; 3] = [8, 256, 4096];

// ---------------------------------------------------------------------------
// Sorts
// ---------------------------------------------------------------------------

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &size in &SIZES {
        let input = shuffled_input(size, 0x5eed);
        eprintln!("sort/{size}: input {}", input_fingerprint(&input));
        group.bench_with_input(BenchmarkId::new("merge", size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut arr| {
                    merge_sort(&mut arr);
                    black_box(arr);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("quick", size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut arr| {
                    quick_sort(&mut arr);
                    black_box(arr);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Indirect dispatch
// ---------------------------------------------------------------------------

fn bench_indirect(c: &mut Criterion) {
    let table = DispatchTableV1::new();
    c.bench_function("indirect_single_shot", |b| {
        b.iter(|| single_shot(&table, black_box(1), black_box(2), black_box(1)));
    });
    c.bench_function("indirect_accumulator_loop", |b| {
        b.iter(|| run_accumulator_loop(&table, black_box(REFERENCE_SENTINEL)));
    });
}

// ---------------------------------------------------------------------------
// Full paths (decode + dispatch + trace)
// ---------------------------------------------------------------------------

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    for selector in ["0000", "1111", "1010"] {
        group.bench_with_input(
            BenchmarkId::new("four_branch", selector),
            selector,
            |b, s| b.iter(|| black_box(run_quiet(&FourBranch, s.as_bytes()))),
        );
    }
    group.bench_function("two_branch/10", |b| {
        b.iter(|| black_box(run_quiet(&TwoBranch, b"10")));
    });
    group.bench_function("four_branch/1111+digest", |b| {
        b.iter(|| black_box(run_quiet(&FourBranch, b"1111").digest()));
    });
    group.finish();
}

criterion_group!(benches, bench_sorts, bench_indirect, bench_paths);
criterion_main!(benches);
