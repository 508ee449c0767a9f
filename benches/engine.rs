//! Decision engine benchmarks: full move selection, candidate ranking,
//! and board classification.

use std::hint::black_box;

use criterion::Criterion;

use fiverow::rank::rank;
use fiverow::threat::classify;
use fiverow::{Board, Engine, Pos, Stone};

/// Build `Criterion` while honoring `cargo bench` arguments.
fn criterion_configured() -> Criterion {
    Criterion::default().configure_from_args()
}

/// A representative midgame position, eight stones around the center.
fn midgame_board() -> Board {
    let moves = [
        (3, 3, Stone::Black),
        (4, 4, Stone::White),
        (2, 2, Stone::Black),
        (4, 2, Stone::White),
        (3, 1, Stone::Black),
        (3, 4, Stone::White),
        (1, 3, Stone::Black),
        (5, 3, Stone::White),
    ];

    let mut board = Board::new();
    for (r, c, stone) in moves {
        board.place_stone(Pos::new(r, c), stone);
    }
    board
}

fn bench_decide_empty(criterion: &mut Criterion) {
    let engine = Engine::new();
    let board = Board::new();

    criterion.bench_function("engine/decide_empty", |bench| {
        bench.iter(|| black_box(engine.decide(black_box(&board), Stone::Black)));
    });
}

fn bench_decide_midgame(criterion: &mut Criterion) {
    let engine = Engine::new();
    let board = midgame_board();

    criterion.bench_function("engine/decide_midgame", |bench| {
        bench.iter(|| black_box(engine.decide(black_box(&board), Stone::Black)));
    });
}

fn bench_rank_midgame(criterion: &mut Criterion) {
    let board = midgame_board();

    criterion.bench_function("rank/midgame", |bench| {
        bench.iter(|| black_box(rank(black_box(&board), Stone::Black)));
    });
}

fn bench_classify_midgame(criterion: &mut Criterion) {
    let board = midgame_board();

    criterion.bench_function("threat/classify_midgame", |bench| {
        bench.iter(|| black_box(classify(black_box(&board), Stone::White)));
    });
}

fn bench_parse(criterion: &mut Criterion) {
    let text = midgame_board().to_string();

    criterion.bench_function("board/parse", |bench| {
        bench.iter(|| black_box(Board::parse(black_box(&text))));
    });
}

fn main() {
    let mut criterion = criterion_configured();

    bench_decide_empty(&mut criterion);
    bench_decide_midgame(&mut criterion);
    bench_rank_midgame(&mut criterion);
    bench_classify_midgame(&mut criterion);
    bench_parse(&mut criterion);

    criterion.final_summary();
}
