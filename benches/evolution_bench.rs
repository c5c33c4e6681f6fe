//! Criterion benchmarks for the evolution strategies and the tournament GA.
//!
//! Uses the reference objectives with fixed seeds and small generation
//! budgets so each sample measures loop overhead, not luck.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolution::evolution::{Recombination, Runner, StrategyConfig};
use u_evolution::problems::{EquationProblem, NQueens};

// ===========================================================================
// Evolution strategies on the equation problem
// ===========================================================================

fn bench_es_equation(c: &mut Criterion) {
    let mut group = c.benchmark_group("es_equation");
    group.sample_size(10);

    let strategies = [
        ("one_plus_one", StrategyConfig::one_plus_one()),
        ("mu_plus_lambda", StrategyConfig::mu_plus_lambda(10, 40)),
        ("mu_comma_lambda", StrategyConfig::mu_comma_lambda(10, 40)),
        (
            "mu_rho_plus_melting",
            StrategyConfig::mu_over_rho_plus_lambda(10, 3, 40, Recombination::Melting),
        ),
        (
            "mu_rho_comma_combination",
            StrategyConfig::mu_over_rho_comma_lambda(10, 3, 40, Recombination::Combination),
        ),
    ];

    for (name, config) in strategies {
        let config = config.with_max_iterations(2_000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, c| {
            b.iter(|| {
                let result = Runner::run(black_box(&EquationProblem), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Tournament GA on N-Queens
// ===========================================================================

fn bench_ga_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_queens");
    group.sample_size(10);

    for &n in &[8usize, 16, 32] {
        let queens = NQueens::new(n);
        let config = StrategyConfig::tournament_ga(n, queens.gene_range())
            .with_max_iterations(1_000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(queens, config),
            |b, (q, c)| {
                b.iter(|| {
                    let result = Runner::run(black_box(q), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_es_equation, bench_ga_queens);
criterion_main!(benches);
