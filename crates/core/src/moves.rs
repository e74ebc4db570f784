//! Move engine - pour validation, application and win detection
//!
//! A pour always moves exactly one unit, the top of the source tube. These
//! functions are total: bad indices and illegal pours give `false`, never a
//! panic.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// A single pour from one tube to another (0-based indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The pour that undoes this one
    pub fn inverse(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Check whether pouring from `from` into `to` is allowed.
///
/// Fails on same tube, bad index, empty source, full target, or a non-empty
/// target whose top color differs from the source's top.
pub fn is_valid_move(board: &Board, from: usize, to: usize) -> bool {
    if from == to {
        return false;
    }
    let (Some(source), Some(target)) = (board.tube(from), board.tube(to)) else {
        return false;
    };
    let Some(color) = source.top() else {
        return false;
    };
    if target.is_full() {
        return false;
    }
    match target.top() {
        None => true,
        Some(top) => top == color,
    }
}

/// Pour one unit from `from` onto `to`.
///
/// Callers check [`is_valid_move`] first; colors are not re-checked here.
/// Returns false and leaves the board untouched when nothing can move
/// (empty source, full target, bad index).
pub fn apply_move(board: &mut Board, from: usize, to: usize) -> bool {
    board.transfer(from, to)
}

/// True iff every tube is empty or full of a single color
pub fn check_win_condition(board: &Board) -> bool {
    board.tubes().iter().all(|t| t.is_solved())
}
