use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use slide_2048::core::{Direction, GameRng, Grid};
use slide_2048::engine::{add_random_tile, is_game_over, move_grid};

/// A busy mid-game grid of side `size`.
fn busy_grid(size: usize) -> Grid {
    let mut rng = GameRng::new(size as u64);
    let mut grid = Grid::empty(size);
    for _ in 0..(size * size * 3 / 4) {
        grid = add_random_tile(&grid, &mut rng);
    }
    grid
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_grid");
    for size in [4usize, 6, 8] {
        let grid = busy_grid(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| {
                for direction in Direction::ALL {
                    black_box(move_grid(black_box(grid), direction));
                }
            })
        });
    }
    group.finish();
}

fn bench_game_over(c: &mut Criterion) {
    let locked = Grid::from_rows(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .expect("valid grid");

    c.bench_function("is_game_over_locked_4x4", |b| {
        b.iter(|| black_box(is_game_over(black_box(&locked))))
    });
}

criterion_group!(benches, bench_move, bench_game_over);
criterion_main!(benches);
