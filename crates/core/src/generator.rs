//! Level generator - solvable boards by scrambling a solved one
//!
//! Generation starts from the solved state (one full tube per color plus the
//! empty tubes) and performs a bounded random walk of reverse pours. Every
//! step moves one top unit, so replaying the recorded steps in reverse order,
//! each inverted, puts every unit back and yields the solved board again.
//!
//! The walk stops after `shuffle_moves` successful pours or after
//! `shuffle_moves * SCRAMBLE_ATTEMPTS_PER_MOVE` random draws, whichever comes
//! first. On cramped boards the cap can cut the scramble short; the level then
//! gets a smaller move budget to match.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::difficulty::LevelConfig;
use crate::moves::Move;
use crate::rng::RandomSource;
use crate::tube::Tube;
use crate::types::{Palette, SCRAMBLE_ATTEMPTS_PER_MOVE};

/// A generated level, ready to hand to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLevel {
    /// The scrambled board to play on
    pub tubes: Board,
    /// Independent copy of the scrambled board, for resetting to this layout
    pub initial_tubes: Board,
    /// Pours allowed before the level is lost
    pub move_limit: u32,
    /// Successful reverse pours performed while scrambling
    pub scramble_moves: u32,
}

/// What a scramble actually did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrambleReport {
    /// Successful reverse pours, in order
    pub moves: Vec<Move>,
    /// Random draws used, successful or not
    pub attempts: u32,
}

/// Build the solved board for a config: full uniform tubes, then empty tubes
pub fn solved_board(config: &LevelConfig, palette: &Palette) -> Board {
    let full = (0..config.color_count as usize).map(|i| Tube::filled(palette.color(i)));
    let empty = (0..config.empty_tube_count).map(|_| Tube::new());
    Board::new(full.chain(empty).collect())
}

/// Scramble `board` in place with random reverse pours.
pub fn scramble<R: RandomSource>(
    board: &mut Board,
    shuffle_moves: u32,
    rng: &mut R,
) -> ScrambleReport {
    let max_attempts = shuffle_moves.saturating_mul(SCRAMBLE_ATTEMPTS_PER_MOVE);
    let mut report = ScrambleReport::default();

    // Nothing can move on fewer than two tubes.
    if board.len() < 2 {
        report.attempts = max_attempts;
        return report;
    }

    let tube_count = board.len();
    while (report.moves.len() as u32) < shuffle_moves && report.attempts < max_attempts {
        report.attempts += 1;

        let from = rng.next_index(tube_count);
        if board.tubes()[from].is_empty() {
            continue;
        }

        let to = rng.next_index(tube_count);
        if from == to || board.tubes()[to].is_full() {
            continue;
        }

        if board.transfer(from, to) {
            report.moves.push(Move::new(from, to));
        }
    }

    report
}

/// Generate the level at a 0-based index using the difficulty table
pub fn generate_level<R: RandomSource>(
    level_index: u32,
    palette: &Palette,
    rng: &mut R,
) -> GameLevel {
    generate_level_with_config(&LevelConfig::for_index(level_index), palette, rng)
}

/// Generate a level from an explicit config
pub fn generate_level_with_config<R: RandomSource>(
    config: &LevelConfig,
    palette: &Palette,
    rng: &mut R,
) -> GameLevel {
    generate_level_with_report(config, palette, rng).0
}

/// Generate a level and also return the scramble that produced it
pub fn generate_level_with_report<R: RandomSource>(
    config: &LevelConfig,
    palette: &Palette,
    rng: &mut R,
) -> (GameLevel, ScrambleReport) {
    let mut board = solved_board(config, palette);
    let report = scramble(&mut board, config.shuffle_moves, rng);
    let moves_made = report.moves.len() as u32;

    if moves_made < config.shuffle_moves {
        debug!(
            "scramble stopped at attempt cap: {}/{} moves after {} attempts",
            moves_made, config.shuffle_moves, report.attempts
        );
    }
    debug!(
        "generated level: tubes={} colors={} moves_made={} attempts={} move_limit={}",
        board.len(),
        config.color_count,
        moves_made,
        report.attempts,
        moves_made + config.move_limit_buffer
    );

    let level = GameLevel {
        initial_tubes: board.clone(),
        tubes: board,
        move_limit: moves_made + config.move_limit_buffer,
        scramble_moves: moves_made,
    };
    (level, report)
}
