//! Game-state engine for a neon-styled tic-tac-toe game.
//!
//! This crate is the logic core behind the UI: board representation, win and
//! draw detection, the turn/history state machine (placement, undo, reset),
//! and the computer opponent's move selection. Rendering, audio, haptics, and
//! screen sequencing live outside; they consume the [`TurnState`] exposed
//! after every transition and feed user intents back in.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a fixed 3x3 board ([`check_winner`],
//!   [`is_full`])
//! - **Selector**: chooses the computer's move for a difficulty tier
//!   ([`select_move`])
//! - **Engine**: the turn controller holding board, history, and outcome
//!   ([`TurnEngine`])
//!
//! # Example
//!
//! ```
//! use neon_tictactoe::{Difficulty, GameConfig, Mark, Mode, Position, TurnEngine};
//!
//! let config = GameConfig::new(Mode::PvC, Some(Difficulty::Hard))?;
//! let mut game = TurnEngine::new(config);
//!
//! // The human plays O and moves first.
//! let state = game.place_mark(Position::TopLeft);
//! assert_eq!(state.to_move(), Mark::X);
//!
//! // The computer's turn: schedule, wait out the UI pacing delay, complete.
//! if let Some(pending) = game.schedule_automated_move() {
//!     let state = game.complete_automated_move(pending);
//!     assert!(!state.ai_pending());
//! }
//! # Ok::<(), neon_tictactoe::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod feedback;
mod position;
mod rules;
mod selector;
mod types;

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig, Mode};

// Crate-level exports - turn controller
pub use engine::{PendingMove, Status, TurnEngine, TurnState};

// Crate-level exports - feedback sink
pub use feedback::{FeedbackEvent, FeedbackSink, NullSink};

// Crate-level exports - board types and rules
pub use position::Position;
pub use rules::{LINES, Line, Win, check_winner, is_draw, is_full};
pub use selector::{Difficulty, select_move};
pub use types::{Board, Mark, Square};
