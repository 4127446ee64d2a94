//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the turn controller and the opponent selector share
//! a single evaluation path.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, Win, check_winner};
