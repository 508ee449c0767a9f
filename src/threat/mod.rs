//! Threat classification
//!
//! Maps scanner output to an ordered severity scale and answers two
//! questions: how dangerous is a player's standing position, and how
//! dangerous would a hypothetical placement be.

pub mod classify;

pub use classify::{classify, level_if_placed, line_level};

/// Threat severity, ascending.
///
/// The derived `Ord` is the move-selection priority
/// (`Win > OpenFour > DoubleThreat > SimpleFour > OpenThree > Minor`).
/// `DoubleThreat` outranks a single blockable four because one reply
/// cannot answer both of its threats. Reordering variants here is the
/// single place the ranking can be tuned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatLevel {
    /// No stones of the player on any line
    None,
    /// A run too weak to force anything yet
    Minor,
    /// Three with both ends open; becomes an open four if unanswered
    OpenThree,
    /// Four with exactly one winning completion; blockable
    SimpleFour,
    /// Two simultaneous threats no single reply can block
    DoubleThreat,
    /// Four with both ends open; two winning completions
    OpenFour,
    /// Five in a row
    Win,
}
