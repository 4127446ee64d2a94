//! Semantic feedback events for the presentation layer.
//!
//! The engine reports what happened; the UI decides what it sounds or
//! feels like (audio, haptics). The engine never depends on whether a
//! sink is wired up or on what it does with an event.

use crate::types::Mark;

/// A semantic event emitted by the engine after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// A mark was placed.
    MoveMade(Mark),
    /// The game ended with a winner.
    GameWon,
    /// The game ended in a draw.
    GameDrawn,
    /// A non-placement intent was handled (undo, reset).
    UiAction,
}

/// Consumer of feedback events.
///
/// Implementations must not fail; the engine ignores whatever they do.
pub trait FeedbackSink {
    /// Handles one event.
    fn emit(&mut self, event: FeedbackEvent);
}

/// Sink that drops every event. Default when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn emit(&mut self, _event: FeedbackEvent) {}
}
