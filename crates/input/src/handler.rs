//! Cursor-based input handler.
//!
//! Digit keys can only reach the first ten tubes; the cursor reaches all of
//! them. The handler keeps the cursor inside the board and wraps at the ends.

use crate::map::InputAction;
use crate::types::GameAction;

/// Tracks the tube cursor.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    cursor: usize,
    tube_count: usize,
}

impl InputHandler {
    pub fn new(tube_count: usize) -> Self {
        Self {
            cursor: 0,
            tube_count,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Update the board size (new level). Clamps the cursor onto the board.
    pub fn set_tube_count(&mut self, tube_count: usize) {
        self.tube_count = tube_count;
        if self.cursor >= tube_count {
            self.cursor = tube_count.saturating_sub(1);
        }
    }

    /// Resolve an input action into a session action.
    ///
    /// Cursor moves are consumed here and return `None`. A direct tap also
    /// moves the cursor onto the tapped tube.
    pub fn handle(&mut self, action: InputAction) -> Option<GameAction> {
        match action {
            InputAction::Game(GameAction::Tap(index)) => {
                if index < self.tube_count {
                    self.cursor = index;
                }
                Some(GameAction::Tap(index))
            }
            InputAction::Game(other) => Some(other),
            InputAction::CursorLeft => {
                if self.tube_count > 0 {
                    self.cursor = (self.cursor + self.tube_count - 1) % self.tube_count;
                }
                None
            }
            InputAction::CursorRight => {
                if self.tube_count > 0 {
                    self.cursor = (self.cursor + 1) % self.tube_count;
                }
                None
            }
            InputAction::TapCursor => {
                if self.tube_count == 0 {
                    return None;
                }
                Some(GameAction::Tap(self.cursor))
            }
        }
    }
}
