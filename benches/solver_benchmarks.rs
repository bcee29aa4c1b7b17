use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use linewalk::puzzle::grid::{EdgeValue, PointValue, Puzzle, SpaceValue};
use linewalk::solver::{
    backtracking::BacktrackingSolver,
    evaluator::{BatchEvaluator, RayonEvaluator, SerialEvaluator},
    genetic::{GeneticConfig, GeneticSolver},
    Solver,
};

/// A fully open `n x n` puzzle with the start in the top-left corner and the
/// end in the bottom-right.
fn open_puzzle(n: usize) -> Puzzle {
    let mut points = vec![PointValue::Open; Puzzle::num_points_for(n, n)];
    points[0] = PointValue::Start;
    *points.last_mut().unwrap() = PointValue::End;
    Puzzle::new(
        n,
        n,
        points,
        vec![EdgeValue::Open; Puzzle::num_edges_for(n, n)],
        vec![SpaceValue::Blank; Puzzle::num_spaces_for(n, n)],
    )
    .unwrap()
}

fn backtracking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Backtracking Performance");

    for n in [3, 4, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let puzzle = open_puzzle(n);
            let mut solver = BacktrackingSolver::new();
            b.iter(|| {
                let path = solver.solve(black_box(&puzzle));
                assert!(path.is_some());
            });
        });
    }
    group.finish();
}

fn evaluator_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");
    let puzzle = open_puzzle(4);
    let genome_len = puzzle.num_points();

    // A deterministic population large enough for the thread pool to matter.
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let population: Vec<u8> = (0..512 * genome_len).map(|_| rng.gen()).collect();

    group.bench_function("512 members, serial", |b| {
        let evaluator = SerialEvaluator;
        b.iter(|| {
            let scores = evaluator.evaluate(
                black_box(&puzzle),
                black_box(&population),
                genome_len,
            );
            assert_eq!(scores.len(), 512);
        })
    });

    group.bench_function("512 members, rayon", |b| {
        let evaluator = RayonEvaluator;
        b.iter(|| {
            let scores = evaluator.evaluate(
                black_box(&puzzle),
                black_box(&population),
                genome_len,
            );
            assert_eq!(scores.len(), 512);
        })
    });

    group.finish();
}

fn genetic_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Genetic Performance");
    group.sample_size(10);

    let puzzle = open_puzzle(3);
    group.bench_function("3x3, seeded run", |b| {
        b.iter(|| {
            let mut solver = GeneticSolver::new(GeneticConfig {
                population_size: 128,
                max_generations: 500,
                crossover_rate: 0.7,
                mutation_rate: 0.05,
                seed: 42,
            });
            black_box(solver.solve(black_box(&puzzle)))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    backtracking_benchmark,
    evaluator_benchmarks,
    genetic_benchmark
);
criterion_main!(benches);
