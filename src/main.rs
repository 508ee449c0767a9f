//! Five-in-a-row engine CLI
//!
//! A command-line driver for the decision engine. Runs scripted demo
//! scenarios, plays the engine against a seeded random mover, or solves
//! a single board read from stdin.

use std::io::Read;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing::Level;

use fiverow::threat::classify;
use fiverow::{Board, Engine, Pos, Stone, ThreatLevel};

#[derive(Parser, Debug)]
#[command(name = "fiverow", version, about = "8x8 five-in-a-row decision engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Log decision phases to stderr
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Run the scripted demo scenarios
    Demo,
    /// Play the engine against a seeded random mover
    Play {
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Side the random mover takes
        #[arg(long, default_value = "O")]
        random_side: char,
    },
    /// Read a board from stdin and print the chosen move
    Solve {
        /// Symbol the engine plays
        #[arg(long, default_value = "X")]
        symbol: char,
    },
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Some(SubCommands::Play { seed, random_side }) => match Stone::from_symbol(random_side) {
            Some(stone) if stone != Stone::Empty => play(seed, stone),
            _ => {
                eprintln!("error: --random-side must be X or O");
                std::process::exit(2);
            }
        },
        Some(SubCommands::Solve { symbol }) => solve(symbol),
        Some(SubCommands::Demo) | None => demo(),
    }
}

fn demo() {
    println!("===========================================");
    println!("      fiverow engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");

    let engine = Engine::new();

    println!("--- Scenario 1: Empty Board ---");
    demo_empty_board(&engine);

    println!("\n--- Scenario 2: Find Winning Move ---");
    demo_winning_move(&engine);

    println!("\n--- Scenario 3: Block Opponent Win ---");
    demo_block_opponent(&engine);

    println!("\n--- Scenario 4: Build a Fork ---");
    demo_fork(&engine);

    println!("\n===========================================");
    println!("         All Scenarios Completed!");
    println!("===========================================");
}

fn demo_empty_board(engine: &Engine) {
    let board = Board::new();
    match engine.get_move(&board, Stone::Black) {
        Ok(result) => {
            println!("  Black plays: ({}, {})", result.pos.row, result.pos.col);
            println!("  Decision: {:?}", result.kind);
            println!("  Time: {}ms", result.time_ms);
            println!("  Expected: a center cell");
            let center = [
                Pos::new(3, 3),
                Pos::new(3, 4),
                Pos::new(4, 3),
                Pos::new(4, 4),
            ];
            if center.contains(&result.pos) {
                println!("  Result: PASS");
            } else {
                println!("  Result: FAIL - Off center");
            }
        }
        Err(err) => println!("  Result: FAIL - {err}"),
    }
}

fn demo_winning_move(engine: &Engine) {
    let mut board = Board::new();
    // Black has four at row 3, cols 1-4
    for c in 1..5 {
        board.place_stone(Pos::new(3, c), Stone::Black);
    }

    match engine.get_move(&board, Stone::Black) {
        Ok(result) => {
            println!("  Position: Black has 4 at row 3, cols 1-4");
            println!("  Black plays: ({}, {})", result.pos.row, result.pos.col);
            println!("  Decision: {:?}", result.kind);
            println!("  Time: {}ms", result.time_ms);
            println!("  Expected: (3, 0) or (3, 5)");
            if result.pos == Pos::new(3, 0) || result.pos == Pos::new(3, 5) {
                println!("  Result: PASS");
            } else {
                println!("  Result: FAIL - Wrong move");
            }
        }
        Err(err) => println!("  Result: FAIL - {err}"),
    }
}

fn demo_block_opponent(engine: &Engine) {
    let mut board = Board::new();
    // White one move from five, pinned to the left edge
    for c in 0..4 {
        board.place_stone(Pos::new(5, c), Stone::White);
    }
    board.place_stone(Pos::new(2, 2), Stone::Black);

    match engine.get_move(&board, Stone::Black) {
        Ok(result) => {
            println!("  Position: White has 4 at row 5, cols 0-3");
            println!("  Black plays: ({}, {})", result.pos.row, result.pos.col);
            println!("  Decision: {:?}", result.kind);
            println!("  Time: {}ms", result.time_ms);
            println!("  Expected: (5, 4)");
            if result.pos == Pos::new(5, 4) {
                println!("  Result: PASS");
            } else {
                println!("  Result: FAIL - Wrong move");
            }
        }
        Err(err) => println!("  Result: FAIL - {err}"),
    }
}

fn demo_fork(engine: &Engine) {
    let mut board = Board::new();
    // Two black pairs meeting at (4, 4)
    board.place_stone(Pos::new(4, 2), Stone::Black);
    board.place_stone(Pos::new(4, 3), Stone::Black);
    board.place_stone(Pos::new(2, 4), Stone::Black);
    board.place_stone(Pos::new(3, 4), Stone::Black);
    board.place_stone(Pos::new(0, 0), Stone::White);
    board.place_stone(Pos::new(0, 7), Stone::White);

    match engine.get_move(&board, Stone::Black) {
        Ok(result) => {
            println!("  Position: Black pairs on row 4 and col 4");
            println!("  Black plays: ({}, {})", result.pos.row, result.pos.col);
            println!("  Decision: {:?}", result.kind);
            println!("  Level: {:?}", result.level);
            println!("  Time: {}ms", result.time_ms);
            println!("  Expected: (4, 4) - Double Threat");
            if result.pos == Pos::new(4, 4) {
                println!("  Result: PASS");
            } else {
                println!("  Result: FAIL - Wrong move");
            }
        }
        Err(err) => println!("  Result: FAIL - {err}"),
    }
}

fn play(seed: u64, random_side: Stone) {
    let engine = Engine::new();
    let engine_side = random_side.opponent();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut mover = Stone::Black;

    println!(
        "Engine plays {}, random mover plays {} (seed {seed})\n",
        engine_side.symbol(),
        random_side.symbol()
    );

    let winner = loop {
        if board.is_full() {
            break None;
        }

        let pos = if mover == engine_side {
            match engine.get_move(&board, mover) {
                Ok(result) => result.pos,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        } else {
            match board.legal_moves().choose(&mut rng) {
                Some(pos) => pos,
                None => break None,
            }
        };

        board.place_stone(pos, mover);
        println!(
            "{} plays ({}, {})  [{} stones]",
            mover.symbol(),
            pos.row,
            pos.col,
            board.stone_count()
        );

        if classify(&board, mover) == ThreatLevel::Win {
            break Some(mover);
        }
        mover = mover.opponent();
    };

    println!("\n{board}");
    match winner {
        Some(stone) => println!("{} wins after {} stones", stone.symbol(), board.stone_count()),
        None => println!("Draw, board is full"),
    }
}

fn solve(symbol: char) {
    let mut text = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    match fiverow::get_move(&text, symbol) {
        Ok((row, col)) => println!("{row} {col}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
