//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary used throughout the game: liquid colors,
//! season themes with their palettes, player actions and session status.
//! All types are plain data with no dependency on the rule engine, UI, or I/O,
//! so they can be shared by the core, the input layer and renderers.
//!
//! # Tube Geometry
//!
//! - **Capacity**: every tube holds at most 4 units (`TUBE_CAPACITY`)
//! - **Top**: the end of a tube's unit sequence is the pourable end
//!
//! # Generation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TUBE_CAPACITY` | 4 | Units per tube |
//! | `SCRAMBLE_ATTEMPTS_PER_MOVE` | 20 | Random draws allowed per requested scramble move |
//! | `TOTAL_LEVELS_PER_SEASON` | 50 | Levels offered by each season |
//!
//! # Examples
//!
//! ```
//! use water_sort_types::{Color, Season, TUBE_CAPACITY};
//!
//! // Seasons parse case-insensitively
//! let season = Season::from_str("Winter").unwrap();
//! assert_eq!(season, Season::Winter);
//!
//! // Each season has a seven-color palette, cycled when a level needs more
//! let palette = season.palette();
//! assert_eq!(palette.len(), 7);
//! assert_eq!(palette.color(0), Color::Cobalt);
//! assert_eq!(palette.color(7), Color::Cobalt);
//!
//! assert_eq!(TUBE_CAPACITY, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Maximum number of units a tube can hold.
pub const TUBE_CAPACITY: usize = 4;

/// Attempt cap multiplier for scrambling (`shuffle_moves * 20` random draws).
pub const SCRAMBLE_ATTEMPTS_PER_MOVE: u32 = 20;

/// Number of levels each season offers in level selection.
pub const TOTAL_LEVELS_PER_SEASON: u32 = 50;

/// Liquid colors.
///
/// Seven colors per season theme. Colors compare by identity only; the RGB
/// swatch is for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    // Spring (pastel)
    Blush,
    Mint,
    Periwinkle,
    Pistachio,
    Rose,
    Peach,
    Lilac,
    // Summer (beach)
    Coral,
    Turquoise,
    Lemon,
    DeepTeal,
    Tangerine,
    Lagoon,
    Foam,
    // Fall (autumnal)
    Crimson,
    Pumpkin,
    Marigold,
    Parchment,
    Moss,
    Cinnamon,
    Walnut,
    // Winter (frosty)
    Cobalt,
    Sky,
    Frost,
    Midnight,
    Iris,
    Glacier,
    Slate,
}

impl Color {
    /// RGB swatch for this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Blush => (0xFF, 0xB7, 0xB2),
            Color::Mint => (0xB5, 0xEA, 0xD7),
            Color::Periwinkle => (0xC7, 0xCE, 0xEA),
            Color::Pistachio => (0xE2, 0xF0, 0xCB),
            Color::Rose => (0xFF, 0x9A, 0xA2),
            Color::Peach => (0xFF, 0xDA, 0xC1),
            Color::Lilac => (0xE0, 0xBB, 0xE4),
            Color::Coral => (0xFF, 0x6B, 0x6B),
            Color::Turquoise => (0x4E, 0xCD, 0xC4),
            Color::Lemon => (0xFF, 0xE6, 0x6D),
            Color::DeepTeal => (0x1A, 0x53, 0x5C),
            Color::Tangerine => (0xFF, 0x9F, 0x1C),
            Color::Lagoon => (0x2E, 0xC4, 0xB6),
            Color::Foam => (0xFD, 0xFF, 0xFC),
            Color::Crimson => (0xD6, 0x28, 0x28),
            Color::Pumpkin => (0xF7, 0x7F, 0x00),
            Color::Marigold => (0xFC, 0xBF, 0x49),
            Color::Parchment => (0xEA, 0xE2, 0xB7),
            Color::Moss => (0x60, 0x6C, 0x38),
            Color::Cinnamon => (0x8D, 0x55, 0x24),
            Color::Walnut => (0x58, 0x31, 0x01),
            Color::Cobalt => (0x00, 0x77, 0xB6),
            Color::Sky => (0x90, 0xE0, 0xEF),
            Color::Frost => (0xCA, 0xF0, 0xF8),
            Color::Midnight => (0x03, 0x04, 0x5E),
            Color::Iris => (0x5E, 0x60, 0xCE),
            Color::Glacier => (0x48, 0xCA, 0xE4),
            Color::Slate => (0xAD, 0xB5, 0xBD),
        }
    }

    /// Convert to snake_case string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_types::Color;
    ///
    /// assert_eq!(Color::DeepTeal.as_str(), "deep_teal");
    /// assert_eq!(Color::Moss.as_str(), "moss");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blush => "blush",
            Color::Mint => "mint",
            Color::Periwinkle => "periwinkle",
            Color::Pistachio => "pistachio",
            Color::Rose => "rose",
            Color::Peach => "peach",
            Color::Lilac => "lilac",
            Color::Coral => "coral",
            Color::Turquoise => "turquoise",
            Color::Lemon => "lemon",
            Color::DeepTeal => "deep_teal",
            Color::Tangerine => "tangerine",
            Color::Lagoon => "lagoon",
            Color::Foam => "foam",
            Color::Crimson => "crimson",
            Color::Pumpkin => "pumpkin",
            Color::Marigold => "marigold",
            Color::Parchment => "parchment",
            Color::Moss => "moss",
            Color::Cinnamon => "cinnamon",
            Color::Walnut => "walnut",
            Color::Cobalt => "cobalt",
            Color::Sky => "sky",
            Color::Frost => "frost",
            Color::Midnight => "midnight",
            Color::Iris => "iris",
            Color::Glacier => "glacier",
            Color::Slate => "slate",
        }
    }
}

/// A non-empty, ordered color palette.
///
/// Levels that need more colors than the palette holds cycle through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette. Returns `None` for an empty color list.
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_types::{Color, Palette};
    ///
    /// assert!(Palette::new(vec![]).is_none());
    ///
    /// let palette = Palette::new(vec![Color::Moss, Color::Sky]).unwrap();
    /// assert_eq!(palette.color(3), Color::Sky);
    /// ```
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    /// Color at `index`, wrapping around the palette length.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Season themes. Each season supplies the palette for its levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in menu order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Parse season from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_types::Season;
    ///
    /// assert_eq!(Season::from_str("spring"), Some(Season::Spring));
    /// assert_eq!(Season::from_str("FALL"), Some(Season::Fall));
    /// assert_eq!(Season::from_str("monsoon"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Seven-color palette for this season.
    pub fn palette(&self) -> Palette {
        let colors = match self {
            Season::Spring => vec![
                Color::Blush,
                Color::Mint,
                Color::Periwinkle,
                Color::Pistachio,
                Color::Rose,
                Color::Peach,
                Color::Lilac,
            ],
            Season::Summer => vec![
                Color::Coral,
                Color::Turquoise,
                Color::Lemon,
                Color::DeepTeal,
                Color::Tangerine,
                Color::Lagoon,
                Color::Foam,
            ],
            Season::Fall => vec![
                Color::Crimson,
                Color::Pumpkin,
                Color::Marigold,
                Color::Parchment,
                Color::Moss,
                Color::Cinnamon,
                Color::Walnut,
            ],
            Season::Winter => vec![
                Color::Cobalt,
                Color::Sky,
                Color::Frost,
                Color::Midnight,
                Color::Iris,
                Color::Glacier,
                Color::Slate,
            ],
        };
        Palette { colors }
    }
}

/// Session status.
///
/// WON and LOST are terminal for the current attempt; taps are ignored until
/// the session restarts or advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Playing)
    }
}

/// Actions that can be applied to a game session
///
/// Produced by human input (or any other front-end) and dispatched through
/// the session's `apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Tap a tube (0-based index): select, deselect, or pour into it
    Tap(usize),
    /// Generate a fresh random board for the current level
    Restart,
    /// Restore the layout the current attempt started from
    ResetLayout,
    /// Advance to the next level (only after a win)
    NextLevel,
}

impl GameAction {
    /// Short camelCase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tap(_) => "tap",
            GameAction::Restart => "restart",
            GameAction::ResetLayout => "resetLayout",
            GameAction::NextLevel => "nextLevel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_palettes_have_seven_distinct_colors() {
        for season in Season::ALL {
            let palette = season.palette();
            assert_eq!(palette.len(), 7);
            for (i, a) in palette.colors().iter().enumerate() {
                for b in &palette.colors()[i + 1..] {
                    assert_ne!(a, b, "{:?} repeats a color", season);
                }
            }
        }
    }

    #[test]
    fn season_palettes_do_not_share_colors() {
        let mut seen = Vec::new();
        for season in Season::ALL {
            for c in season.palette().colors() {
                assert!(!seen.contains(c), "{:?} appears in two seasons", c);
                seen.push(*c);
            }
        }
        assert_eq!(seen.len(), 28);
    }

    #[test]
    fn season_name_roundtrip() {
        for season in Season::ALL {
            assert_eq!(Season::from_str(season.as_str()), Some(season));
        }
        assert_eq!(Season::from_str("Autumn"), Some(Season::Fall));
    }

    #[test]
    fn palette_cycles_with_modulo() {
        let palette = Season::Summer.palette();
        for i in 0..12 {
            assert_eq!(palette.color(i), palette.colors()[i % 7]);
        }
    }

    #[test]
    fn terminal_statuses() {
        assert!(!SessionStatus::Playing.is_terminal());
        assert!(SessionStatus::Won.is_terminal());
        assert!(SessionStatus::Lost.is_terminal());
    }

    #[test]
    fn generation_constants() {
        assert_eq!(TUBE_CAPACITY, 4);
        assert_eq!(SCRAMBLE_ATTEMPTS_PER_MOVE, 20);
        assert_eq!(TOTAL_LEVELS_PER_SEASON, 50);
    }
}
