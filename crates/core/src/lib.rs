//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the water sort rules: the tube model, the level
//! generator, the move engine and the session state machine. It has **zero
//! dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: randomness is injected, so a seed (or a scripted
//!   sequence) produces an identical board
//! - **Total**: validation and pours return `bool`/outcomes instead of failing
//! - **Portable**: any front-end can drive a [`GameSession`] and listen to its
//!   [`GameEvent`]s
//!
//! # Module Structure
//!
//! - [`tube`]: capacity-bounded stack of colors and the per-tube predicates
//! - [`board`]: the ordered row of tubes
//! - [`rng`]: the injectable random source
//! - [`difficulty`]: the level-number to [`LevelConfig`] table
//! - [`generator`]: solved board + randomized reverse pours
//! - [`moves`]: pour validation, application and the win check
//! - [`session`]: selection state machine, move budget, win/loss
//! - [`events`]: semantic events for sound/animation subscribers
//! - [`snapshot`]: serializable session view for renderers
//!
//! # Game Rules
//!
//! - **Pour**: moves exactly one unit from the top of one tube to another
//! - **Legal pour**: the target is empty, or not full and its top matches
//! - **Win**: every tube is empty, or full of a single color
//! - **Loss**: the move budget runs out on a board that is not won
//!
//! # Example
//!
//! ```
//! use water_sort_core::{GameSession, SimpleRng};
//! use water_sort_types::{Season, SessionStatus};
//!
//! let mut session = GameSession::new(Season::Spring, 0, SimpleRng::new(12345));
//! assert_eq!(session.board().len(), 6);
//! assert_eq!(session.status(), SessionStatus::Playing);
//!
//! // Tap a non-empty tube to select it, then tap it again to deselect.
//! let source = (0..6).find(|&i| !session.board().tubes()[i].is_empty()).unwrap();
//! session.tap(source);
//! assert_eq!(session.selected(), Some(source));
//! session.tap(source);
//! assert_eq!(session.selected(), None);
//! ```

pub mod board;
pub mod difficulty;
pub mod events;
pub mod generator;
pub mod moves;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod tube;

pub use water_sort_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use difficulty::LevelConfig;
pub use events::{EventSink, GameEvent};
pub use generator::{
    generate_level, generate_level_with_config, generate_level_with_report, scramble,
    solved_board, GameLevel, ScrambleReport,
};
pub use moves::{apply_move, check_win_condition, is_valid_move, Move};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use session::{GameSession, TapOutcome};
pub use snapshot::SessionSnapshot;
pub use tube::Tube;
