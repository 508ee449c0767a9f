//! Integration tests: full games against a seeded random mover,
//! symmetry of forced decisions, and the tournament text format.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use fiverow::board::TOTAL_CELLS;
use fiverow::threat::classify;
use fiverow::{Board, Engine, EngineError, Pos, Stone, ThreatLevel};

/// Play the engine against a seeded random mover until a side wins or
/// the board fills. Every move is checked for legality as it is made.
fn play_game(engine_side: Stone, seed: u64) -> (Board, Option<Stone>, Vec<Pos>) {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut mover = Stone::Black;
    let mut moves = Vec::new();

    loop {
        if board.is_full() {
            return (board, None, moves);
        }

        let pos = if mover == engine_side {
            let result = engine.get_move(&board, mover).expect("engine must move");
            result.pos
        } else {
            board
                .legal_moves()
                .choose(&mut rng)
                .expect("random mover must have a cell")
        };

        assert!(
            board.is_empty_at(pos),
            "move {pos} by {} targets an occupied cell",
            mover.symbol()
        );
        board.place_stone(pos, mover);
        moves.push(pos);

        if classify(&board, mover) == ThreatLevel::Win {
            return (board, Some(mover), moves);
        }
        mover = mover.opponent();
    }
}

#[test]
fn engine_as_black_vs_random_finishes() {
    for seed in [0, 1, 42] {
        let (board, winner, moves) = play_game(Stone::Black, seed);
        assert!(moves.len() <= TOTAL_CELLS, "seed {seed} overran the board");
        assert_eq!(board.stone_count() as usize, moves.len());
        if winner.is_none() {
            assert!(board.is_full(), "seed {seed} stopped early without a winner");
        }
    }
}

#[test]
fn engine_as_white_vs_random_finishes() {
    for seed in [0, 7, 4242] {
        let (board, winner, moves) = play_game(Stone::White, seed);
        assert!(moves.len() <= TOTAL_CELLS, "seed {seed} overran the board");
        if winner.is_none() {
            assert!(board.is_full(), "seed {seed} stopped early without a winner");
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let (board_a, winner_a, moves_a) = play_game(Stone::Black, 42);
    let (board_b, winner_b, moves_b) = play_game(Stone::Black, 42);

    assert_eq!(moves_a, moves_b);
    assert_eq!(winner_a, winner_b);
    assert_eq!(board_a, board_b);
}

/// Quarter-turn clockwise.
fn rotate(pos: Pos) -> Pos {
    Pos::new(pos.col, 7 - pos.row)
}

/// Mirror across the vertical axis.
fn mirror(pos: Pos) -> Pos {
    Pos::new(pos.row, 7 - pos.col)
}

fn transform_board(board: &Board, f: impl Fn(Pos) -> Pos) -> Board {
    let mut out = Board::new();
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let stone = board.get(pos);
        if stone != Stone::Empty {
            out.place_stone(f(pos), stone);
        }
    }
    out
}

#[test]
fn forced_win_maps_under_rotation() {
    let mut board = Board::new();
    // Black four pinned to the left edge: (0, 4) is the only completion
    for c in 0..4 {
        board.place_stone(Pos::new(0, c), Stone::Black);
    }
    board.place_stone(Pos::new(5, 5), Stone::White);

    let engine = Engine::new();
    let plain = engine.decide(&board, Stone::Black).expect("move");
    assert_eq!(plain.pos, Pos::new(0, 4));

    let rotated = transform_board(&board, rotate);
    let turned = engine.decide(&rotated, Stone::Black).expect("move");
    assert_eq!(turned.pos, rotate(plain.pos));
    assert_eq!(turned.kind, plain.kind);
}

#[test]
fn forced_block_maps_under_mirror() {
    let mut board = Board::new();
    // White four pinned to the left edge: only (5, 4) denies the win
    for c in 0..4 {
        board.place_stone(Pos::new(5, c), Stone::White);
    }
    board.place_stone(Pos::new(2, 2), Stone::Black);

    let engine = Engine::new();
    let plain = engine.decide(&board, Stone::Black).expect("move");
    assert_eq!(plain.pos, Pos::new(5, 4));

    let mirrored = transform_board(&board, mirror);
    let flipped = engine.decide(&mirrored, Stone::Black).expect("move");
    assert_eq!(flipped.pos, mirror(plain.pos));
    assert_eq!(flipped.kind, plain.kind);
}

#[test]
fn parsed_draw_board_has_no_moves() {
    // Tiled so no line of either color ever reaches three
    let text = "\
XXOOXXOO
OOXXOOXX
XXOOXXOO
OOXXOOXX
XXOOXXOO
OOXXOOXX
XXOOXXOO
OOXXOOXX
";
    let board = Board::parse(text).expect("valid board");
    assert!(board.is_full());
    assert_eq!(classify(&board, Stone::Black), ThreatLevel::Minor);
    assert_eq!(classify(&board, Stone::White), ThreatLevel::Minor);

    let engine = Engine::new();
    assert_eq!(
        engine.get_move(&board, Stone::Black).unwrap_err(),
        EngineError::NoLegalMoves
    );
}

#[test]
fn text_round_trip_preserves_position() {
    let (board, _, _) = play_game(Stone::Black, 42);
    let reparsed = Board::parse(&board.to_string()).expect("own output must parse");
    assert_eq!(board, reparsed);
}
