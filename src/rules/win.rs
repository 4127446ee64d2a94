//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A winning line: three positions that end the game when uniformly marked.
pub type Line = [Position; 3];

/// The 8 canonical lines: rows, then columns, then diagonals.
///
/// Table order fixes the tie-break when a placement would complete two
/// lines at once (cannot happen under alternating play, but the result
/// is defined regardless).
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A detected win: the winning mark and the line it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The mark holding the line.
    pub winner: Mark,
    /// The completed line.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Returns the first mark-uniform, non-empty line in table order,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(winner) = sq {
                return Some(Win { winner, line });
            }
        }
    }

    None
}
