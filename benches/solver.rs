//! Benchmarks for the cube engine and the white cross solver.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rubik::shuffler::Shuffler;
use rubik::{solve, Cube, CubeFactory, Direction, Side};

fn scrambled(seed: u64) -> Cube {
    let mut cube = CubeFactory::new().create_cube();
    Shuffler::new(StdRng::seed_from_u64(seed)).shuffle(&mut cube);
    cube
}

/// Benchmark planning the daisy and white cross on a scrambled cube.
fn bench_solve(c: &mut Criterion) {
    let cube = scrambled(17);

    c.bench_function("solve_white_cross", |b| {
        b.iter(|| {
            let mut cube = cube.clone();
            solve(black_box(&mut cube))
        })
    });
}

/// Benchmark enqueuing and playing a single quarter turn on a fresh log.
fn bench_turn(c: &mut Criterion) {
    let cube = CubeFactory::new().create_cube();

    c.bench_function("turn_and_play", |b| {
        b.iter_batched(
            || cube.clone(),
            |mut cube| {
                cube.turn(black_box(Side::Right), Direction::Clockwise);
                cube.play_next_move()
            },
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark a full 25-move scramble.
fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_25", |b| b.iter(|| scrambled(black_box(5))));
}

/// Benchmark cloning a cube for a solve attempt.
fn bench_clone(c: &mut Criterion) {
    let cube = scrambled(23);

    c.bench_function("clone_cube", |b| b.iter(|| black_box(&cube).clone()));
}

criterion_group!(benches, bench_solve, bench_turn, bench_shuffle, bench_clone);
criterion_main!(benches);
