//! Turn controller: the state machine behind the board screen.
//!
//! The engine owns a single [`TurnState`] and mutates it through one
//! transition at a time. Every external intent (placement, undo, reset)
//! and the automated-move completion runs synchronously to completion;
//! nothing interleaves. Illegal intents are dropped silently - the UI
//! disables the corresponding controls, but the engine never trusts it.

use crate::config::{GameConfig, Mode};
use crate::feedback::{FeedbackEvent, FeedbackSink, NullSink};
use crate::position::Position;
use crate::rules;
use crate::rules::Line;
use crate::selector;
use crate::types::{Board, Mark, Square};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The computer always plays X; the human plays O and moves first.
const COMPUTER: Mark = Mark::X;
const HUMAN: Mark = Mark::O;

// ─────────────────────────────────────────────────────────────
//  Turn state
// ─────────────────────────────────────────────────────────────

/// Outcome-bearing status of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner on the given line.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Game ended with a full board and no winner.
    Draw,
}

impl Status {
    /// True once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Full game state exposed to the presentation layer.
///
/// A fresh copy is returned after every transition; the caller stores
/// and renders the latest one. The `generation` counter increments on
/// every applied transition and ties scheduled automated moves to the
/// state they were computed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    board: Board,
    to_move: Mark,
    status: Status,
    history: Vec<Board>,
    generation: u64,
    ai_pending: bool,
}

impl TurnState {
    fn initial(generation: u64) -> Self {
        Self {
            board: Board::new(),
            to_move: HUMAN,
            status: Status::InProgress,
            history: Vec::new(),
            generation,
            ai_pending: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the winning line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            Status::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            Status::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Prior board snapshots, oldest first. One entry per completed move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Transition counter. Increments on every applied transition.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while an automated move has been scheduled but not completed.
    pub fn ai_pending(&self) -> bool {
        self.ai_pending
    }
}

/// Ticket for a scheduled automated move.
///
/// Carries the generation it was issued against; completing it after the
/// state has moved on (reset, new game) is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a scheduled automated move does nothing until completed"]
pub struct PendingMove {
    generation: u64,
}

// ─────────────────────────────────────────────────────────────
//  Turn engine
// ─────────────────────────────────────────────────────────────

/// The turn controller.
///
/// Accepts player intents, invokes the opponent selector when it is the
/// computer's turn, and reports semantic events to the feedback sink.
pub struct TurnEngine<R: Rng = StdRng> {
    state: TurnState,
    config: GameConfig,
    rng: R,
    feedback: Box<dyn FeedbackSink>,
}

impl TurnEngine<StdRng> {
    /// Creates an engine with an entropy-seeded random source.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> TurnEngine<R> {
    /// Creates an engine with an injected random source.
    ///
    /// Seeded sources make the selector's random fallbacks deterministic
    /// in tests.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            state: TurnState::initial(0),
            config,
            rng,
            feedback: Box::new(NullSink),
        }
    }

    /// Attaches a feedback sink. Replaces the previous one.
    pub fn set_feedback(&mut self, sink: Box<dyn FeedbackSink>) {
        self.feedback = sink;
    }

    /// Returns the latest state.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts a new game with a new configuration.
    ///
    /// Any scheduled automated move is abandoned: the generation moves on,
    /// so its ticket can no longer complete.
    #[instrument(skip(self))]
    pub fn start(&mut self, config: GameConfig) -> TurnState {
        self.config = config;
        self.state = TurnState::initial(self.state.generation + 1);
        self.feedback.emit(FeedbackEvent::UiAction);
        self.state.clone()
    }

    /// Resets the current game to the canonical initial state.
    ///
    /// Valid from any state; empties the board and history and abandons
    /// any scheduled automated move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> TurnState {
        self.state = TurnState::initial(self.state.generation + 1);
        self.feedback.emit(FeedbackEvent::UiAction);
        self.state.clone()
    }

    /// Places the active mark at `pos` on behalf of a human player.
    ///
    /// Dropped silently when the game is over, the square is occupied,
    /// an automated move is pending, or it is the computer's turn.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, pos: Position) -> TurnState {
        if self.state.status.is_terminal()
            || self.state.ai_pending
            || self.is_computer_turn()
            || !self.state.board.is_empty(pos)
        {
            debug!(%pos, "placement ignored");
            return self.state.clone();
        }

        self.apply(pos);
        self.state.clone()
    }

    /// Schedules the computer's move, returning a completion ticket.
    ///
    /// Returns `None` unless it is the computer's turn in a single-player
    /// game with no move already pending. The caller owns the pacing
    /// delay ("thinking" time); the engine stays synchronous. While the
    /// ticket is outstanding, placements and undo are rejected.
    #[instrument(skip(self))]
    pub fn schedule_automated_move(&mut self) -> Option<PendingMove> {
        if self.state.status.is_terminal() || self.state.ai_pending || !self.is_computer_turn() {
            return None;
        }

        self.state.ai_pending = true;
        debug!(generation = self.state.generation, "automated move scheduled");
        Some(PendingMove {
            generation: self.state.generation,
        })
    }

    /// Completes a scheduled automated move: selects and applies it.
    ///
    /// A ticket issued against a state that has since been replaced
    /// (reset, new game) is dropped silently. A ticket can only match the
    /// state it was scheduled against, so the game is still in progress
    /// when the move applies.
    #[instrument(skip(self))]
    pub fn complete_automated_move(&mut self, pending: PendingMove) -> TurnState {
        if pending.generation != self.state.generation || !self.state.ai_pending {
            debug!(
                ticket = pending.generation,
                current = self.state.generation,
                "stale automated move dropped"
            );
            return self.state.clone();
        }

        self.state.ai_pending = false;
        let Some(difficulty) = self.config.difficulty() else {
            return self.state.clone();
        };

        if let Some(pos) =
            selector::select_move(&self.state.board, COMPUTER, difficulty, &mut self.rng)
        {
            self.apply(pos);
        }
        self.state.clone()
    }

    /// Rewinds the last move(s).
    ///
    /// Dropped silently when the history is empty or an automated move is
    /// pending. In two-player games one move is rewound and the mark that
    /// made it moves again. In single-player games undo returns control
    /// to the human: one move is rewound after a human win or a draw (the
    /// terminal move was the human's), otherwise two (the computer's
    /// reply and the human move before it), or one if only one exists.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> TurnState {
        if self.state.ai_pending || self.state.history.is_empty() {
            debug!("undo ignored");
            return self.state.clone();
        }

        match self.config.mode() {
            Mode::PvP => {
                if let Some(prev) = self.state.history.pop() {
                    self.state.to_move = mover_on(&prev);
                    self.state.board = prev;
                }
            }
            Mode::PvC => {
                let pops = match self.state.status {
                    Status::Won { winner: HUMAN, .. } | Status::Draw => 1,
                    _ if self.state.history.len() >= 2 => 2,
                    _ => 1,
                };
                for _ in 0..pops {
                    if let Some(prev) = self.state.history.pop() {
                        self.state.board = prev;
                    }
                }
                self.state.to_move = HUMAN;
            }
        }

        self.state.status = Status::InProgress;
        self.state.generation += 1;
        self.feedback.emit(FeedbackEvent::UiAction);
        self.state.clone()
    }

    // ─────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────

    fn is_computer_turn(&self) -> bool {
        self.config.mode() == Mode::PvC && self.state.to_move == COMPUTER
    }

    /// Shared placement path for human and automated moves.
    ///
    /// Precondition: state is `InProgress` and `pos` is empty.
    fn apply(&mut self, pos: Position) {
        let mover = self.state.to_move;
        self.state.history.push(self.state.board.clone());
        self.state.board.set(pos, Square::Occupied(mover));
        self.state.generation += 1;
        debug!(%mover, board = %self.state.board.display(), "mark placed");
        self.feedback.emit(FeedbackEvent::MoveMade(mover));

        if let Some(win) = rules::check_winner(&self.state.board) {
            self.state.status = Status::Won {
                winner: win.winner,
                line: win.line,
            };
            self.feedback.emit(FeedbackEvent::GameWon);
        } else if rules::is_full(&self.state.board) {
            self.state.status = Status::Draw;
            self.feedback.emit(FeedbackEvent::GameDrawn);
        } else {
            self.state.to_move = mover.opponent();
        }
    }
}

/// The mark due to move on a board, derived from mark counts.
///
/// O moves first, so the counts are equal exactly when it is O's turn.
fn mover_on(board: &Board) -> Mark {
    if board.count(Mark::O) == board.count(Mark::X) {
        Mark::O
    } else {
        Mark::X
    }
}
