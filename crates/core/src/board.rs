//! Board module - the ordered row of tubes a level is played on
//!
//! Tube indices are stable for the lifetime of a board: generation appends the
//! full tubes first, then the empty ones, and moves never reorder tubes.

use serde::{Deserialize, Serialize};

use crate::tube::Tube;
use crate::types::Color;

/// The game board
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    tubes: Vec<Tube>,
}

impl Board {
    pub fn new(tubes: Vec<Tube>) -> Self {
        Self { tubes }
    }

    /// Build a board from rows of units (each listed bottom to top).
    /// Returns None if any row exceeds the tube capacity
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> Option<Self> {
        let tubes = rows
            .iter()
            .map(|row| Tube::from_units(row.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { tubes })
    }

    /// Number of tubes
    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    pub fn tube(&self, index: usize) -> Option<&Tube> {
        self.tubes.get(index)
    }

    pub(crate) fn tube_mut(&mut self, index: usize) -> Option<&mut Tube> {
        self.tubes.get_mut(index)
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Total units across all tubes
    pub fn total_units(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    /// Number of units of `color` across all tubes
    pub fn count_color(&self, color: Color) -> usize {
        self.tubes
            .iter()
            .flat_map(|t| t.units().iter())
            .filter(|&&c| c == color)
            .count()
    }

    /// Units per tube as plain vectors (bottom to top)
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.tubes.iter().map(|t| t.units().to_vec()).collect()
    }

    /// Move the top unit of `from` onto `to` without any color rule.
    ///
    /// Checked only for bounds, emptiness and capacity; the board is unchanged
    /// whenever this returns false.
    pub(crate) fn transfer(&mut self, from: usize, to: usize) -> bool {
        if from == to || to >= self.tubes.len() {
            return false;
        }
        let Some(unit) = self.tube_mut(from).and_then(Tube::pop) else {
            return false;
        };
        if self.tubes[to].push(unit) {
            return true;
        }
        // Target full: put the unit back where it came from.
        self.tubes[from].push(unit);
        false
    }
}
