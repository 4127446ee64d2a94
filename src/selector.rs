//! Opponent move selection.
//!
//! The computer opponent has two tiers. Easy play is uniformly random.
//! Hard play is a one-ply lookahead: take a win, block the rival's win,
//! take the center, otherwise pick at random. It never searches deeper,
//! so forks set up two moves ahead go unseen - that blind spot is part
//! of the tier's observable behavior and stays as-is.

use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Mark, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier for the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Difficulty {
    /// Uniformly random play.
    Easy,
    /// Win-if-possible, block-if-necessary, prefer center, else random.
    Hard,
}

/// Selects a move for `mark` on the given board.
///
/// Returns `None` only when the board has no empty square. Callers must
/// not invoke this on a board that is already terminal.
///
/// The random source is injected so tests can make the fallback
/// deterministic.
#[instrument(skip(rng))]
pub fn select_move<R: Rng>(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let open = Position::valid_moves(board);
    if open.is_empty() {
        return None;
    }

    let choice = match difficulty {
        Difficulty::Easy => open[rng.gen_range(0..open.len())],
        Difficulty::Hard => heuristic_move(board, mark, &open, rng),
    };
    debug!(%choice, %mark, "selected move");
    Some(choice)
}

/// One-ply heuristic, scanning candidates in index order.
fn heuristic_move<R: Rng>(board: &Board, mark: Mark, open: &[Position], rng: &mut R) -> Position {
    // 1. Take the win.
    for &pos in open {
        let mut probe = board.clone();
        probe.set(pos, Square::Occupied(mark));
        if check_winner(&probe).is_some() {
            return pos;
        }
    }

    // 2. Block the rival's win.
    let rival = mark.opponent();
    for &pos in open {
        let mut probe = board.clone();
        probe.set(pos, Square::Occupied(rival));
        if check_winner(&probe).is_some() {
            return pos;
        }
    }

    // 3. Take the center.
    if board.is_empty(Position::Center) {
        return Position::Center;
    }

    // 4. Random fallback.
    open[rng.gen_range(0..open.len())]
}
