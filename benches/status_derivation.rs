use criterion::{criterion_group, criterion_main, Criterion};
use dp_replay::status::{cell_statuses, node_statuses};
use dp_replay::{problems::Fibonacci, Strategy, TracedProblem};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_status_scan(c: &mut Criterion) {
    // F(20) recursively is the largest trace the input bounds allow.
    let recursive = Fibonacci::new(20).solve(Strategy::Recursive);
    let memoized = Fibonacci::new(20).solve(Strategy::Memoization);

    let mut rng = StdRng::seed_from_u64(42);
    let cursors: Vec<usize> = (0..64)
        .map(|_| rng.gen_range(0..recursive.trace().len()))
        .collect();

    c.bench_function("node_statuses_fib20_recursive", |b| {
        let graph = recursive.graph().cloned().unwrap_or_default();
        b.iter(|| {
            for &cursor in &cursors {
                criterion::black_box(node_statuses(&graph, recursive.trace(), cursor));
            }
        })
    });

    c.bench_function("cell_statuses_fib20_memoized", |b| {
        let len = memoized.table_len();
        let total = memoized.trace().len();
        b.iter(|| {
            for cursor in 0..total {
                criterion::black_box(cell_statuses(len, memoized.trace(), cursor));
            }
        })
    });
}

criterion_group!(benches, bench_status_scan);
criterion_main!(benches);
