//! Semantic events emitted by a game session.
//!
//! The session queues events as they happen; front-ends drain the queue into
//! an [`EventSink`] to drive sound, animation or logging. Nothing in the core
//! depends on a sink being attached.

use crate::moves::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh attempt began (new level, restart, or layout reset)
    LevelStarted { level_index: u32, move_limit: u32 },
    /// A tube became the pour source
    TubeSelected(usize),
    /// The selection was cleared by tapping the selected tube again
    SelectionCleared,
    /// A pour was applied
    MoveApplied { mv: Move, moves_left: u32 },
    /// A pour was refused; the selection is cleared and the board unchanged
    MoveRejected(Move),
    LevelWon { moves_used: u32 },
    LevelLost,
}

/// Receiver for session events.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}
