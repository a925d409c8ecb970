use criterion::{criterion_group, criterion_main, Criterion};

use eight_puzzle_solver::config::{Heuristic, Method};
use eight_puzzle_solver::puzzle::Puzzle;
use eight_puzzle_solver::Solve;

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_a_star(c: &mut Criterion) {
    bench_puzzle(c, Method::AStar(Heuristic::Manhattan), "724506831", 100);
    bench_puzzle(c, Method::AStar(Heuristic::MisplacedTiles), "724506831", 20);
    bench_puzzle(c, Method::AStar(Heuristic::RowCol), "724506831", 20);
}

#[allow(unused)]
fn bench_greedy(c: &mut Criterion) {
    for &h in &Heuristic::ALL {
        bench_puzzle(c, Method::Greedy(h), "724506831", 100);
    }
}

#[allow(unused)]
fn bench_uninformed(c: &mut Criterion) {
    // most of the state space
    bench_puzzle(c, Method::Uninformed, "724506831", 10);
}

fn bench_puzzle(c: &mut Criterion, method: Method, state: &str, samples: usize) {
    let puzzle: Puzzle = state.parse().unwrap();

    let mut group = c.benchmark_group(method.to_string());
    group.sample_size(samples);
    group.bench_function(state, |b| {
        b.iter(|| criterion::black_box(puzzle.solve(criterion::black_box(method), false)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_a_star,
    bench_greedy,
    //bench_uninformed,
);
criterion_main!(benches);
