use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minesweeper::{Board, Game, GameState, Position, Settings};
use rand::{rngs::StdRng, SeedableRng};

fn bench_open_board(c: &mut Criterion) {
    c.bench_function("cascade 100x100 without mines", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let mut game = Game::from_board(Board::with_mines(100, 100, &[]).unwrap());
            game.reveal(black_box(Position::new(50, 50)), &mut rng);
            assert_eq!(game.evaluate(), GameState::Won);
        })
    });
}

fn bench_sparse_board(c: &mut Criterion) {
    c.bench_function("cascade 100x100 with 500 mines", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        let settings = Settings::custom(100, 100, 500).unwrap();
        b.iter(|| {
            let mut game = settings.new_game(&mut rng).unwrap();
            game.reveal(black_box(Position::new(0, 0)), &mut rng);
            black_box(game.evaluate())
        })
    });
}

fn bench_expert_setup(c: &mut Criterion) {
    c.bench_function("expert board creation", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| Settings::EXPERT.new_game(&mut rng).unwrap())
    });
}

criterion_group!(benches, bench_open_board, bench_sparse_board, bench_expert_setup);
criterion_main!(benches);
