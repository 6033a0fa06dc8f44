use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ndarray::Array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::{SeedableRng, rngs::StdRng};
use zerosum::{MatrixGame, Simplex, SolverConfig};

fn random_game(rng: &mut StdRng, m: usize, n: usize) -> MatrixGame {
    let payoff = Array::random_using((m, n), Uniform::new(-10., 10.), rng);
    MatrixGame::new(payoff).expect("Random payoffs are finite.")
}

fn bench_solve(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    for size in [4, 16, 48] {
        let game = random_game(&mut rng, size, size);
        c.bench_function(&format!("solve_{size}x{size}"), |b| {
            b.iter_batched(
                || {
                    Simplex::new(SolverConfig {
                        keep_history: false,
                        ..SolverConfig::default()
                    })
                },
                |simplex| simplex.solve(&game).expect("Random game has a solution."),
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_solve_with_history(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let game = random_game(&mut rng, 16, 16);
    c.bench_function("solve_16x16_history", |b| {
        b.iter(|| {
            Simplex::default()
                .solve(&game)
                .expect("Random game has a solution.")
        })
    });
}

criterion_group!(benches, bench_solve, bench_solve_with_history);
criterion_main!(benches);
