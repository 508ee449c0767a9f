//! Decision engine integrating scanner, classifier, and ranker
//!
//! Move selection follows a fixed priority cascade:
//!
//! 1. **Immediate win**: complete five in a row now
//! 2. **Block**: deny the opponent's winning cell
//! 3. **Threat building**: strongest candidate at open-three level or
//!    better, skipping moves that hand the opponent a win
//! 4. **Positional**: center preference plus run extension
//!
//! A fifth kind, **Fallback**, only appears when an unexpected internal
//! panic is caught at the public boundary and a uniformly-random legal
//! move is substituted; the engine never misses a turn over a bug.
//!
//! # Example
//!
//! ```
//! use fiverow::{Board, Engine, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(3, 3), Stone::Black);
//!
//! let engine = Engine::new();
//! let result = engine.get_move(&board, Stone::White).unwrap();
//! println!("White plays {} ({:?})", result.pos, result.kind);
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use rand::seq::IndexedRandom;
use tracing::{debug, error};

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::rank::{positional_score, rank};
use crate::threat::{level_if_placed, ThreatLevel};

/// Which phase of the cascade produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Move completes five in a row
    ImmediateWin,
    /// Move occupies an opponent winning cell
    Block,
    /// Move builds an open three or stronger threat
    Threat,
    /// Move chosen by positional preference
    Positional,
    /// Random legal move after an internal failure
    Fallback,
}

/// A selected move with decision metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell
    pub pos: Pos,
    /// Phase that selected it
    pub kind: DecisionKind,
    /// Mover's threat level after playing the cell
    pub level: ThreatLevel,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            pos,
            kind: DecisionKind::ImmediateWin,
            level: ThreatLevel::Win,
            time_ms,
        }
    }

    #[inline]
    fn block(pos: Pos, level: ThreatLevel, time_ms: u64) -> Self {
        Self {
            pos,
            kind: DecisionKind::Block,
            level,
            time_ms,
        }
    }

    #[inline]
    fn threat(pos: Pos, level: ThreatLevel, time_ms: u64) -> Self {
        Self {
            pos,
            kind: DecisionKind::Threat,
            level,
            time_ms,
        }
    }

    #[inline]
    fn positional(pos: Pos, level: ThreatLevel, time_ms: u64) -> Self {
        Self {
            pos,
            kind: DecisionKind::Positional,
            level,
            time_ms,
        }
    }

    #[inline]
    fn fallback(pos: Pos, time_ms: u64) -> Self {
        Self {
            pos,
            kind: DecisionKind::Fallback,
            level: ThreatLevel::None,
            time_ms,
        }
    }
}

/// Deterministic decision engine for 8x8 five-in-a-row.
///
/// Stateless: every call rebuilds its view from the supplied board, so
/// the same board and mover always produce the same move and separate
/// calls may run concurrently.
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Select a move for `mover`, surfacing internal panics as a
    /// random-move fallback.
    ///
    /// `InvalidBoard` and `NoLegalMoves` still surface as errors; the
    /// fallback only masks unexpected internal failures.
    pub fn get_move(&self, board: &Board, mover: Stone) -> Result<MoveResult, EngineError> {
        let start = Instant::now();

        match catch_unwind(AssertUnwindSafe(|| self.decide(board, mover))) {
            Ok(result) => result,
            Err(_) => {
                error!("decision cascade panicked, falling back to a random move");
                let legal: Vec<Pos> = board.legal_moves().collect();
                let pos = legal
                    .choose(&mut rand::rng())
                    .copied()
                    .ok_or(EngineError::NoLegalMoves)?;
                Ok(MoveResult::fallback(
                    pos,
                    start.elapsed().as_millis() as u64,
                ))
            }
        }
    }

    /// Run the priority cascade.
    ///
    /// Pure given the inputs; ties at every step break toward the
    /// lowest (row, col).
    pub fn decide(&self, board: &Board, mover: Stone) -> Result<MoveResult, EngineError> {
        debug_assert!(mover != Stone::Empty);
        let start = Instant::now();

        if board.is_full() {
            return Err(EngineError::NoLegalMoves);
        }

        // 1. Complete five in a row
        if let Some(pos) = find_winning_move(board, mover) {
            debug!(%pos, "immediate winning move");
            return Ok(MoveResult::immediate_win(
                pos,
                start.elapsed().as_millis() as u64,
            ));
        }

        // 2. Deny the opponent's winning cell
        let opponent = mover.opponent();
        let opponent_wins: Vec<Pos> = board
            .legal_moves()
            .filter(|&pos| level_if_placed(board, pos, opponent) == ThreatLevel::Win)
            .collect();
        if let Some(&pos) = opponent_wins.first() {
            let pos = if opponent_wins.len() == 1 {
                pos
            } else {
                // Several winning cells mean the position is lost; take
                // the block that helps our own position most
                best_block(board, &opponent_wins, mover)
            };
            let level = level_if_placed(board, pos, mover);
            debug!(%pos, cells = opponent_wins.len(), "blocking opponent win");
            return Ok(MoveResult::block(
                pos,
                level,
                start.elapsed().as_millis() as u64,
            ));
        }

        // 3. Build the strongest threat that does not hand the
        // opponent a win
        let candidates = rank(board, mover);
        if let Some(cand) = candidates
            .iter()
            .find(|c| c.mover_level >= ThreatLevel::OpenThree && !c.is_blunder())
        {
            debug!(pos = %cand.pos, level = ?cand.mover_level, "building threat");
            return Ok(MoveResult::threat(
                cand.pos,
                cand.mover_level,
                start.elapsed().as_millis() as u64,
            ));
        }

        // 4. Positional preference among the remaining candidates
        let best = candidates
            .iter()
            .filter(|c| !c.is_blunder())
            .max_by_key(|c| (c.positional, std::cmp::Reverse(c.pos)))
            .or_else(|| {
                candidates
                    .iter()
                    .max_by_key(|c| (c.positional, std::cmp::Reverse(c.pos)))
            })
            .ok_or(EngineError::NoLegalMoves)?;
        debug!(pos = %best.pos, score = best.positional, "positional move");
        Ok(MoveResult::positional(
            best.pos,
            best.mover_level,
            start.elapsed().as_millis() as u64,
        ))
    }
}

/// Lowest-coordinate cell that completes five for `player`, if any.
fn find_winning_move(board: &Board, player: Stone) -> Option<Pos> {
    board
        .legal_moves()
        .find(|&pos| level_if_placed(board, pos, player) == ThreatLevel::Win)
}

/// Among several opponent winning cells, the block that maximizes the
/// mover's own resulting level, then positional score, then lowest
/// coordinate.
fn best_block(board: &Board, cells: &[Pos], mover: Stone) -> Pos {
    debug_assert!(!cells.is_empty());
    cells
        .iter()
        .copied()
        .max_by_key(|&pos| {
            (
                level_if_placed(board, pos, mover),
                positional_score(board, pos, mover),
                std::cmp::Reverse(pos),
            )
        })
        .unwrap_or(cells[0])
}

/// Parse a tournament board text and select a move for `symbol`.
///
/// The convenience entry point for callers that hold the board as
/// text. `symbol` must be `X` or `O`.
pub fn get_move(board_text: &str, symbol: char) -> Result<(usize, usize), EngineError> {
    use crate::error::BoardDefect;

    let board = Board::parse(board_text)?;
    let mover = match Stone::from_symbol(symbol) {
        Some(stone) if stone != Stone::Empty => stone,
        _ => return Err(EngineError::InvalidBoard(BoardDefect::Symbol(symbol))),
    };

    let result = Engine::new().get_move(&board, mover)?;
    Ok((result.pos.row as usize, result.pos.col as usize))
}
