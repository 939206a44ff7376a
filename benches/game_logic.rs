use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_2048::core::{Board, SimpleRng};
use term_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows(&[
        &[2, 2, 4, 8],
        &[0, 4, 4, 16],
        &[2, 0, 8, 8],
        &[4, 4, 0, 2],
    ])
}

fn bench_sweep(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("sweep_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                let mut board = board.clone();
                black_box(board.sweep(black_box(dir)));
            }
        })
    });
}

fn bench_place_random(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("fill_board_16x16", |b| {
        b.iter(|| {
            let mut board = Board::new(16);
            while board.place_random(&mut rng).is_some() {}
            black_box(board);
        })
    });
}

fn bench_has_lost(c: &mut Criterion) {
    // Full checkerboard: every cell has to be inspected.
    let board = Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ]);

    c.bench_function("has_lost_full_board", |b| {
        b.iter(|| black_box(&board).has_lost())
    });
}

criterion_group!(benches, bench_sweep, bench_place_random, bench_has_lost);
criterion_main!(benches);
