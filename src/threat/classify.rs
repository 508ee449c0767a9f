//! Pattern classification over scanned lines

use super::ThreatLevel;
use crate::board::{Board, Pos, Stone, WIN_LENGTH};
use crate::scan::{all_lines, lines_through, room_after, room_before, runs_in_line, Line, Run};

/// Level of a single contiguous run within its line.
fn run_level(board: &Board, line: &Line, run: &Run) -> ThreatLevel {
    if run.len >= WIN_LENGTH {
        return ThreatLevel::Win;
    }
    match (run.len, run.open_ends()) {
        (4, 2) => ThreatLevel::OpenFour,
        (4, 1) => ThreatLevel::SimpleFour,
        (3, 2) => {
            // The run must still have room to grow to five inside its line
            let span = run.len + room_before(board, line, run) + room_after(board, line, run);
            if span >= WIN_LENGTH {
                ThreatLevel::OpenThree
            } else {
                ThreatLevel::Minor
            }
        }
        (len, _) if len >= 2 => ThreatLevel::Minor,
        _ => ThreatLevel::None,
    }
}

/// Level of two runs split by exactly one empty cell (`X.XXX`, `XX.X`
/// shapes). Filling the gap joins them.
fn split_level(board: &Board, line: &Line, first: &Run, second: &Run) -> ThreatLevel {
    debug_assert_eq!(first.start + first.len + 1, second.start);
    let combined = first.len + second.len;

    // Gap completion makes five or more: a single winning cell
    if combined + 1 >= WIN_LENGTH {
        return ThreatLevel::SimpleFour;
    }

    // Gapped three with both outer ends open grows into an open four
    if combined == 3 && first.open_before && second.open_after {
        let span = combined
            + 1
            + room_before(board, line, first)
            + room_after(board, line, second);
        if span >= WIN_LENGTH {
            return ThreatLevel::OpenThree;
        }
    }

    ThreatLevel::None
}

/// Highest level `player` holds in one line, runs and split shapes
/// included.
pub fn line_level(board: &Board, line: &Line, player: Stone) -> ThreatLevel {
    let runs = runs_in_line(board, line, player);
    let mut best = ThreatLevel::None;

    for run in &runs {
        best = best.max(run_level(board, line, run));
    }

    for pair in runs.windows(2) {
        if pair[0].start + pair[0].len + 1 == pair[1].start {
            best = best.max(split_level(board, line, &pair[0], &pair[1]));
        }
    }

    best
}

/// The single highest threat level `player` holds on the board.
///
/// Two or more lines at `OpenThree` or better raise the result to at
/// least `DoubleThreat`: one reply cannot answer both lines. A single
/// stronger line (`OpenFour`, `Win`) still dominates via the ordering.
pub fn classify(board: &Board, player: Stone) -> ThreatLevel {
    let mut best = ThreatLevel::None;
    let mut strong_lines = 0u32;

    for line in all_lines() {
        let level = line_level(board, &line, player);
        if level >= ThreatLevel::OpenThree {
            strong_lines += 1;
        }
        best = best.max(level);
    }

    if strong_lines >= 2 {
        best = best.max(ThreatLevel::DoubleThreat);
    }
    best
}

/// Threat level `player` would create by playing `pos`.
///
/// Only the four lines through `pos` can change, so only those are
/// classified. Forks surface here the same way as in [`classify`]:
/// two strong lines through the placement make a `DoubleThreat`.
pub fn level_if_placed(board: &Board, pos: Pos, player: Stone) -> ThreatLevel {
    debug_assert!(board.is_empty_at(pos));
    debug_assert!(player != Stone::Empty);

    let mut next = *board;
    next.place_stone(pos, player);

    let mut best = ThreatLevel::None;
    let mut strong_lines = 0u32;

    for line in lines_through(pos) {
        let level = line_level(&next, &line, player);
        if level >= ThreatLevel::OpenThree {
            strong_lines += 1;
        }
        best = best.max(level);
    }

    if strong_lines >= 2 {
        best = best.max(ThreatLevel::DoubleThreat);
    }
    best
}
