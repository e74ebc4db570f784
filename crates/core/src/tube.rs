//! Tube module - a capacity-bounded stack of colored units
//!
//! A tube stores at most `TUBE_CAPACITY` units in a fixed-capacity array, so
//! the capacity invariant holds by construction and no push can allocate.
//! Index 0 is the bottom of the tube; the last unit is the pourable top.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Color, TUBE_CAPACITY};

/// A single tube.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tube {
    units: ArrayVec<Color, TUBE_CAPACITY>,
}

impl Tube {
    /// Create an empty tube
    pub fn new() -> Self {
        Self {
            units: ArrayVec::new(),
        }
    }

    /// Create a full tube of a single color
    pub fn filled(color: Color) -> Self {
        let mut units = ArrayVec::new();
        for _ in 0..TUBE_CAPACITY {
            units.push(color);
        }
        Self { units }
    }

    /// Create a tube from units listed bottom to top.
    /// Returns None if there are more units than the capacity
    pub fn from_units(units: &[Color]) -> Option<Self> {
        let units = ArrayVec::try_from(units).ok()?;
        Some(Self { units })
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units from bottom to top
    pub fn units(&self) -> &[Color] {
        &self.units
    }

    /// The pourable unit, if any
    pub fn top(&self) -> Option<Color> {
        self.units.last().copied()
    }

    /// True iff the tube holds `TUBE_CAPACITY` units
    pub fn is_full(&self) -> bool {
        self.units.is_full()
    }

    /// True iff the tube is empty or every unit matches the bottom one
    pub fn is_uniform(&self) -> bool {
        match self.units.first() {
            Some(first) => self.units.iter().all(|c| c == first),
            None => true,
        }
    }

    /// Per-tube win predicate: empty, or full and uniform
    pub fn is_solved(&self) -> bool {
        self.is_empty() || (self.is_full() && self.is_uniform())
    }

    /// Push a unit on top. Returns false (and leaves the tube unchanged) when full
    pub fn push(&mut self, color: Color) -> bool {
        self.units.try_push(color).is_ok()
    }

    /// Remove and return the top unit
    pub fn pop(&mut self) -> Option<Color> {
        self.units.pop()
    }
}
