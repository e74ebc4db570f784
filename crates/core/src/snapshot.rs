use serde::Serialize;

use crate::types::{Color, Season, SessionStatus};

/// Read-only view of a session for renderers and external observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub season: Season,
    /// 1-based
    pub level_number: u32,
    pub moves_left: u32,
    pub move_limit: u32,
    pub status: SessionStatus,
    pub selected: Option<usize>,
    pub attempt: u32,
    /// Units per tube, bottom to top
    pub tubes: Vec<Vec<Color>>,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}
