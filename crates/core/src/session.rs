//! Game session module - one player's run through a level
//!
//! The session owns the live board, the generated level it came from, the
//! remaining move budget and the tap selection. It implements the selection
//! state machine:
//!
//! - nothing selected + tap a non-empty tube -> that tube becomes the source
//! - source selected + tap the same tube -> selection cleared
//! - source selected + tap another tube -> pour if valid, otherwise reject;
//!   either way the selection is cleared
//!
//! After every applied pour the win condition is checked first; only when the
//! board is not won does an exhausted budget end the attempt as lost. Taps are
//! ignored once the attempt is won or lost.

use log::{debug, info};

use crate::board::Board;
use crate::events::{EventSink, GameEvent};
use crate::generator::{generate_level, GameLevel};
use crate::moves::{apply_move, check_win_condition, is_valid_move, Move};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::types::{GameAction, Palette, Season, SessionStatus};

/// Result of a single tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing happened (terminal state, bad index, or empty tube with no selection)
    Ignored,
    Selected(usize),
    Deselected,
    Moved(Move),
    Rejected(Move),
}

/// A playable session
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = SimpleRng> {
    season: Season,
    palette: Palette,
    level_index: u32,
    level: GameLevel,
    board: Board,
    moves_left: u32,
    selected: Option<usize>,
    status: SessionStatus,
    /// Monotonic attempt id (increments on every start, restart and reset).
    attempt: u32,
    rng: R,
    events: Vec<GameEvent>,
}

impl<R: RandomSource> GameSession<R> {
    /// Generate the level at `level_index` for `season` and start playing it
    pub fn new(season: Season, level_index: u32, mut rng: R) -> Self {
        let palette = season.palette();
        let level = generate_level(level_index, &palette, &mut rng);
        Self::with_level(season, level_index, level, rng)
    }

    /// Start a session on an already generated level
    pub fn with_level(season: Season, level_index: u32, level: GameLevel, rng: R) -> Self {
        let mut session = Self {
            season,
            palette: season.palette(),
            level_index,
            board: level.tubes.clone(),
            moves_left: level.move_limit,
            level,
            selected: None,
            status: SessionStatus::Playing,
            attempt: 0,
            rng,
            events: Vec::new(),
        };
        session.begin_attempt();
        session
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// 0-based level index
    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    /// 1-based level number, as shown to players
    pub fn level_number(&self) -> u32 {
        self.level_index.saturating_add(1)
    }

    pub fn level(&self) -> &GameLevel {
        &self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn move_limit(&self) -> u32 {
        self.level.move_limit
    }

    pub fn moves_used(&self) -> u32 {
        self.level.move_limit.saturating_sub(self.moves_left)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            season: self.season,
            level_number: self.level_number(),
            moves_left: self.moves_left,
            move_limit: self.level.move_limit,
            status: self.status,
            selected: self.selected,
            attempt: self.attempt,
            tubes: self.board.to_rows(),
        }
    }

    /// Apply an action. Returns false when the action had no effect
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        debug!("action: {}", action.as_str());
        match action {
            GameAction::Tap(index) => self.tap(index) != TapOutcome::Ignored,
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::ResetLayout => {
                self.reset_layout();
                true
            }
            GameAction::NextLevel => self.next_level(),
        }
    }

    /// Tap a tube
    pub fn tap(&mut self, index: usize) -> TapOutcome {
        if self.status.is_terminal() || index >= self.board.len() {
            return TapOutcome::Ignored;
        }

        let Some(from) = self.selected else {
            if self.board.tubes()[index].is_empty() {
                return TapOutcome::Ignored;
            }
            self.selected = Some(index);
            self.events.push(GameEvent::TubeSelected(index));
            return TapOutcome::Selected(index);
        };

        self.selected = None;
        if from == index {
            self.events.push(GameEvent::SelectionCleared);
            return TapOutcome::Deselected;
        }

        let mv = Move::new(from, index);
        if !is_valid_move(&self.board, from, index) || !apply_move(&mut self.board, from, index) {
            debug!("rejected pour {} -> {}", from, index);
            self.events.push(GameEvent::MoveRejected(mv));
            return TapOutcome::Rejected(mv);
        }

        self.moves_left = self.moves_left.saturating_sub(1);
        self.events.push(GameEvent::MoveApplied {
            mv,
            moves_left: self.moves_left,
        });

        if check_win_condition(&self.board) {
            self.status = SessionStatus::Won;
            info!(
                "level {} won with {} of {} moves",
                self.level_number(),
                self.moves_used(),
                self.level.move_limit
            );
            self.events.push(GameEvent::LevelWon {
                moves_used: self.moves_used(),
            });
        } else if self.moves_left == 0 {
            self.status = SessionStatus::Lost;
            info!("level {} lost: out of moves", self.level_number());
            self.events.push(GameEvent::LevelLost);
        }

        TapOutcome::Moved(mv)
    }

    /// Play the current level again on a freshly shuffled board
    pub fn restart(&mut self) {
        self.level = generate_level(self.level_index, &self.palette, &mut self.rng);
        self.begin_attempt();
    }

    /// Play the current level again from the layout this attempt started with
    pub fn reset_layout(&mut self) {
        self.begin_attempt();
    }

    /// Advance to the next level. Only allowed after a win
    pub fn next_level(&mut self) -> bool {
        if self.status != SessionStatus::Won {
            return false;
        }
        self.level_index = self.level_index.saturating_add(1);
        self.restart();
        true
    }

    /// Hand queued events to `sink`, oldest first
    pub fn drain_events<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        for event in self.events.drain(..) {
            sink.on_event(&event);
        }
    }

    /// Take queued events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn begin_attempt(&mut self) {
        self.board = self.level.initial_tubes.clone();
        self.moves_left = self.level.move_limit;
        self.selected = None;
        self.status = SessionStatus::Playing;
        self.attempt = self.attempt.wrapping_add(1);

        info!(
            "level {} ({}) attempt {}: {} tubes, move limit {}",
            self.level_number(),
            self.season.as_str(),
            self.attempt,
            self.board.len(),
            self.level.move_limit
        );
        self.events.push(GameEvent::LevelStarted {
            level_index: self.level_index,
            move_limit: self.level.move_limit,
        });
    }
}
