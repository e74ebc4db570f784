//! Difficulty module - the fixed level-number step table
//!
//! Level numbers are 1-based. Each tier starts at a threshold and lasts until
//! the next one; the last tier covers every level from 46 on.
//!
//! | Levels | Tubes | Empty | Colors | Shuffle | Buffer |
//! |--------|-------|-------|--------|---------|--------|
//! | 1-3    | 6     | 2     | 4      | 25      | 4      |
//! | 4-8    | 7     | 2     | 5      | 35      | 3      |
//! | 9-15   | 8     | 2     | 6      | 50      | 3      |
//! | 16-25  | 9     | 2     | 7      | 70      | 2      |
//! | 26-35  | 10    | 2     | 8      | 90      | 2      |
//! | 36-45  | 12    | 2     | 10     | 120     | 2      |
//! | 46+    | 14    | 2     | 12     | 150     | 1      |

/// Generation parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelConfig {
    /// Descriptive only; generation uses `color_count + empty_tube_count`
    pub tube_count: u32,
    pub empty_tube_count: u32,
    pub color_count: u32,
    /// Requested successful reverse pours
    pub shuffle_moves: u32,
    /// Extra moves granted on top of the scramble length
    pub move_limit_buffer: u32,
}

impl LevelConfig {
    /// Config for a 1-based level number. Level 0 uses the first tier
    pub fn for_level(level_number: u32) -> Self {
        DIFFICULTY_TIERS
            .iter()
            .rev()
            .find(|(first_level, _)| level_number >= *first_level)
            .map(|(_, config)| *config)
            .unwrap_or(DIFFICULTY_TIERS[0].1)
    }

    /// Config for a 0-based level index
    pub fn for_index(level_index: u32) -> Self {
        Self::for_level(level_index.saturating_add(1))
    }
}

const fn tier(
    tube_count: u32,
    color_count: u32,
    shuffle_moves: u32,
    move_limit_buffer: u32,
) -> LevelConfig {
    LevelConfig {
        tube_count,
        empty_tube_count: 2,
        color_count,
        shuffle_moves,
        move_limit_buffer,
    }
}

/// (first level number, config), ascending
const DIFFICULTY_TIERS: [(u32, LevelConfig); 7] = [
    (1, tier(6, 4, 25, 4)),
    (4, tier(7, 5, 35, 3)),
    (9, tier(8, 6, 50, 3)),
    (16, tier(9, 7, 70, 2)),
    (26, tier(10, 8, 90, 2)),
    (36, tier(12, 10, 120, 2)),
    (46, tier(14, 12, 150, 1)),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn values(c: LevelConfig) -> (u32, u32, u32, u32, u32) {
        (
            c.tube_count,
            c.empty_tube_count,
            c.color_count,
            c.shuffle_moves,
            c.move_limit_buffer,
        )
    }

    #[test]
    fn test_table_boundaries() {
        let expected = [
            (1, 3, (6, 2, 4, 25, 4)),
            (4, 8, (7, 2, 5, 35, 3)),
            (9, 15, (8, 2, 6, 50, 3)),
            (16, 25, (9, 2, 7, 70, 2)),
            (26, 35, (10, 2, 8, 90, 2)),
            (36, 45, (12, 2, 10, 120, 2)),
            (46, 500, (14, 2, 12, 150, 1)),
        ];
        for (first, last, want) in expected {
            assert_eq!(values(LevelConfig::for_level(first)), want, "level {}", first);
            assert_eq!(values(LevelConfig::for_level(last)), want, "level {}", last);
        }
    }

    #[test]
    fn test_index_is_level_minus_one() {
        assert_eq!(LevelConfig::for_index(0), LevelConfig::for_level(1));
        assert_eq!(LevelConfig::for_index(3), LevelConfig::for_level(4));
        assert_eq!(LevelConfig::for_index(45), LevelConfig::for_level(46));
        assert_eq!(LevelConfig::for_index(u32::MAX), LevelConfig::for_level(u32::MAX));
    }

    #[test]
    fn test_level_zero_uses_first_tier() {
        assert_eq!(LevelConfig::for_level(0), LevelConfig::for_level(1));
    }

    #[test]
    fn test_table_is_monotonic() {
        for pair in DIFFICULTY_TIERS.windows(2) {
            let (a, b) = (pair[0].1, pair[1].1);
            assert!(b.tube_count > a.tube_count);
            assert!(b.color_count > a.color_count);
            assert!(b.shuffle_moves > a.shuffle_moves);
            assert!(b.move_limit_buffer <= a.move_limit_buffer);
        }
    }

    #[test]
    fn test_tube_count_matches_slots() {
        for (_, c) in DIFFICULTY_TIERS {
            assert_eq!(c.tube_count, c.color_count + c.empty_tube_count);
        }
    }
}
