//! Tests for the two-player turn controller flow.

use neon_tictactoe::{
    FeedbackEvent, FeedbackSink, GameConfig, Mark, Position, Square, Status, TurnEngine,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Sink that records every event for later inspection.
#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<FeedbackEvent>>>);

impl RecordingSink {
    fn events(&self) -> Vec<FeedbackEvent> {
        self.0.borrow().clone()
    }
}

impl FeedbackSink for RecordingSink {
    fn emit(&mut self, event: FeedbackEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn two_player() -> TurnEngine {
    TurnEngine::new(GameConfig::two_player())
}

#[test]
fn test_o_moves_first_and_marks_alternate() {
    let mut game = two_player();
    assert_eq!(game.state().to_move(), Mark::O);

    let state = game.place_mark(Position::TopLeft);
    assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Mark::O));
    assert_eq!(state.to_move(), Mark::X);

    let state = game.place_mark(Position::Center);
    assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(state.to_move(), Mark::O);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = two_player();
    game.place_mark(Position::TopLeft);
    let before = game.state().clone();

    let after = game.place_mark(Position::TopLeft);
    assert_eq!(after, before);
    assert_eq!(after.generation(), before.generation());
    assert_eq!(after.to_move(), Mark::X);
}

#[test]
fn test_win_ends_the_game() {
    let mut game = two_player();
    // O takes the top row while X dawdles on the middle one.
    game.place_mark(Position::TopLeft);
    game.place_mark(Position::MiddleLeft);
    game.place_mark(Position::TopCenter);
    game.place_mark(Position::Center);
    let state = game.place_mark(Position::TopRight);

    assert_eq!(state.winner(), Some(Mark::O));
    assert_eq!(
        state.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    // Terminal state accepts no further placements.
    let after = game.place_mark(Position::BottomLeft);
    assert_eq!(after, state);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut game = two_player();
    // O: 0 8 7 2 3, X: 4 1 6 5 - no line forms.
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::TopRight,
        Position::MiddleRight,
        Position::MiddleLeft,
    ] {
        game.place_mark(pos);
    }

    assert_eq!(game.state().status(), Status::Draw);
    assert_eq!(game.state().winning_line(), None);
    assert_eq!(game.state().history().len(), 9);
}

#[test]
fn test_undo_rewinds_one_move_and_returns_the_turn() {
    let mut game = two_player();
    game.place_mark(Position::TopLeft);
    game.place_mark(Position::Center);

    let state = game.undo();
    assert_eq!(state.board().get(Position::Center), Square::Empty);
    assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Mark::O));
    // X made the undone move, so X moves again.
    assert_eq!(state.to_move(), Mark::X);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_undo_after_win_reopens_the_game() {
    let mut game = two_player();
    game.place_mark(Position::TopLeft);
    game.place_mark(Position::MiddleLeft);
    game.place_mark(Position::TopCenter);
    game.place_mark(Position::Center);
    game.place_mark(Position::TopRight);
    assert_eq!(game.state().winner(), Some(Mark::O));

    let state = game.undo();
    assert_eq!(state.status(), Status::InProgress);
    assert_eq!(state.winning_line(), None);
    assert_eq!(state.board().get(Position::TopRight), Square::Empty);
    // The winner replays the undone move.
    assert_eq!(state.to_move(), Mark::O);
}

#[test]
fn test_undo_with_empty_history_is_ignored() {
    let mut game = two_player();
    let before = game.state().clone();
    let after = game.undo();
    assert_eq!(after, before);
}

#[test]
fn test_reset_restores_the_initial_state() {
    let mut game = two_player();
    game.place_mark(Position::TopLeft);
    game.place_mark(Position::Center);
    game.place_mark(Position::TopCenter);

    let generation = game.state().generation();
    let state = game.reset();

    assert_eq!(state.status(), Status::InProgress);
    assert_eq!(state.to_move(), Mark::O);
    assert!(state.history().is_empty());
    assert!(!state.ai_pending());
    assert!(Position::ALL.iter().all(|&p| state.board().is_empty(p)));
    assert!(state.generation() > generation);
}

#[test]
fn test_generation_counts_applied_transitions_only() {
    let mut game = two_player();
    assert_eq!(game.state().generation(), 0);
    game.place_mark(Position::TopLeft);
    game.place_mark(Position::TopLeft); // ignored
    game.place_mark(Position::Center);
    game.undo();
    assert_eq!(game.state().generation(), 3);
}

#[test]
fn test_feedback_events_follow_transitions() {
    let sink = RecordingSink::default();
    let mut game = two_player();
    game.set_feedback(Box::new(sink.clone()));

    game.place_mark(Position::TopLeft);
    game.place_mark(Position::TopLeft); // ignored, no event
    game.undo();
    game.place_mark(Position::TopLeft);
    game.place_mark(Position::MiddleLeft);
    game.place_mark(Position::TopCenter);
    game.place_mark(Position::Center);
    game.place_mark(Position::TopRight); // O wins
    game.reset();

    assert_eq!(
        sink.events(),
        vec![
            FeedbackEvent::MoveMade(Mark::O),
            FeedbackEvent::UiAction, // undo
            FeedbackEvent::MoveMade(Mark::O),
            FeedbackEvent::MoveMade(Mark::X),
            FeedbackEvent::MoveMade(Mark::O),
            FeedbackEvent::MoveMade(Mark::X),
            FeedbackEvent::MoveMade(Mark::O),
            FeedbackEvent::GameWon,
            FeedbackEvent::UiAction, // reset
        ]
    );
}

#[test]
fn test_state_serializes_for_the_renderer() {
    let mut game = two_player();
    game.place_mark(Position::Center);

    let json = serde_json::to_string(game.state()).expect("state serializes");
    let back: neon_tictactoe::TurnState = serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(&back, game.state());
}
