//! Error taxonomy for the decision engine
//!
//! Input defects (`InvalidBoard`) and terminal states (`NoLegalMoves`)
//! always surface to the caller. `InvalidMove` marks an internal
//! simulation bug; production paths never construct it for a cell they
//! have not checked.

use crate::board::Pos;

/// What is wrong with a parsed board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardDefect {
    /// Wrong row or column count (values as found in the input)
    Dimensions { rows: usize, cols: usize },
    /// A cell character outside `X`, `O`, `.`
    Symbol(char),
}

/// Engine failure cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Input board is malformed
    InvalidBoard(BoardDefect),
    /// A move targeted an occupied cell
    InvalidMove(Pos),
    /// Board is full; there is no cell to play
    NoLegalMoves,
}

impl std::fmt::Display for BoardDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardDefect::Dimensions { rows, cols } => {
                write!(f, "expected 8x8 cells, found {rows}x{cols}")
            }
            BoardDefect::Symbol(ch) => write!(f, "unknown cell symbol {ch:?}"),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidBoard(defect) => write!(f, "invalid board: {defect}"),
            EngineError::InvalidMove(pos) => write!(f, "cell {pos} is occupied"),
            EngineError::NoLegalMoves => write!(f, "board is full, no legal moves"),
        }
    }
}

impl std::error::Error for EngineError {}
