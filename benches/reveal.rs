use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use diamond_miners::render::{NullSink, Screen};
use diamond_miners::world::{grid::MAX_SIDE, reveal, starting_grid, Grid, TerrainKind};
use diamond_miners::GameState;

fn bench_reveal_shipped_level(c: &mut Criterion) {
    c.bench_function("reveal_shipped_level", |b| {
        b.iter_batched(
            starting_grid,
            |mut grid| reveal(&mut grid, black_box(0), black_box(0), &mut NullSink),
            BatchSize::SmallInput,
        )
    });
}

fn bench_reveal_open_field(c: &mut Criterion) {
    c.bench_function("reveal_255x255_open", |b| {
        b.iter_batched(
            || Grid::filled(MAX_SIDE, MAX_SIDE, TerrainKind::Empty),
            |mut grid| reveal(&mut grid, black_box(127), black_box(127), &mut NullSink),
            BatchSize::LargeInput,
        )
    });
}

fn bench_initialize(c: &mut Criterion) {
    let mut game = GameState::new();
    let mut screen = Screen::new(game.grid().width(), game.grid().height());

    c.bench_function("initialize_into_screen", |b| {
        b.iter(|| {
            game.initialize(&mut screen);
        })
    });
}

criterion_group!(
    benches,
    bench_reveal_shipped_level,
    bench_reveal_open_field,
    bench_initialize,
);
criterion_main!(benches);
