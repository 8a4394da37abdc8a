use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{Board, Mark, evaluate, select_move};

fn bench_self_play_game(rng: &mut SessionRng) -> Board {
    let mut board = Board::new();
    let mut mark = Mark::X;
    while !evaluate(&board).is_over() {
        let Some(index) = select_move(&board, mark, mark.opponent().unwrap(), rng) else {
            break;
        };
        board = board.with_mark(index, mark);
        mark = mark.opponent().unwrap();
    }
    board
}

fn move_selector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_selector");

    let empty = Board::new();
    let mid_game: Board = "X_O|_X_|__O".parse().unwrap();
    let mut rng = SessionRng::new(42);

    group.bench_function("single_move_empty", |b| {
        b.iter(|| select_move(black_box(&empty), Mark::O, Mark::X, &mut rng))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| select_move(black_box(&mid_game), Mark::X, Mark::O, &mut rng))
    });

    group.bench_function("self_play_game", |b| {
        b.iter(|| bench_self_play_game(&mut rng))
    });

    group.bench_function("evaluate_mid_game", |b| {
        b.iter(|| evaluate(black_box(&mid_game)))
    });

    group.finish();
}

criterion_group!(benches, move_selector_bench);
criterion_main!(benches);
