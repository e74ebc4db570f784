//! Session state machine driven through the public facade.

use water_sort::core::{
    Board, GameEvent, GameLevel, GameSession, Move, SequenceRng, SimpleRng, TapOutcome,
};
use water_sort::types::{Color, GameAction, Season, SessionStatus};

const A: Color = Color::Turquoise;
const B: Color = Color::Tangerine;

fn session(rows: &[Vec<Color>], move_limit: u32) -> GameSession<SimpleRng> {
    let board = Board::from_rows(rows).unwrap();
    let level = GameLevel {
        tubes: board.clone(),
        initial_tubes: board,
        move_limit,
        scramble_moves: move_limit,
    };
    GameSession::with_level(Season::Summer, 0, level, SimpleRng::new(1))
}

#[test]
fn win_takes_precedence_over_last_move() {
    let mut s = session(&[vec![A, A, A], vec![A]], 1);
    assert_eq!(s.tap(1), TapOutcome::Selected(1));
    assert_eq!(s.tap(0), TapOutcome::Moved(Move::new(1, 0)));

    assert_eq!(s.board().to_rows(), vec![vec![A; 4], vec![]]);
    assert_eq!(s.moves_left(), 0);
    assert_eq!(s.status(), SessionStatus::Won);
}

#[test]
fn running_out_of_moves_loses() {
    let mut s = session(&[vec![A, B], vec![B], vec![]], 1);
    s.tap(0);
    assert_eq!(s.tap(2), TapOutcome::Moved(Move::new(0, 2)));
    assert_eq!(s.status(), SessionStatus::Lost);

    let events = s.take_events();
    assert_eq!(events.last(), Some(&GameEvent::LevelLost));
}

#[test]
fn taps_after_game_over_are_ignored() {
    let mut s = session(&[vec![A, A, A], vec![A]], 3);
    s.tap(1);
    s.tap(0);
    assert_eq!(s.status(), SessionStatus::Won);

    let board = s.board().clone();
    assert_eq!(s.tap(0), TapOutcome::Ignored);
    assert_eq!(s.tap(1), TapOutcome::Ignored);
    assert!(!s.apply_action(GameAction::Tap(0)));
    assert_eq!(s.board(), &board);
    assert_eq!(s.selected(), None);
}

#[test]
fn rejected_pour_clears_selection_and_keeps_budget() {
    let mut s = session(&[vec![A], vec![B], vec![]], 5);
    s.tap(0);
    assert_eq!(s.tap(1), TapOutcome::Rejected(Move::new(0, 1)));
    assert_eq!(s.selected(), None);
    assert_eq!(s.moves_left(), 5);
    assert_eq!(s.board().to_rows(), vec![vec![A], vec![B], vec![]]);
}

#[test]
fn empty_tube_cannot_be_selected() {
    let mut s = session(&[vec![A], vec![]], 5);
    assert_eq!(s.tap(1), TapOutcome::Ignored);
    assert_eq!(s.selected(), None);
    assert_eq!(s.tap(7), TapOutcome::Ignored);
}

#[test]
fn reset_layout_replays_the_same_board() {
    let mut s = session(&[vec![A, B], vec![B], vec![]], 6);
    s.tap(0);
    s.tap(2);
    assert_eq!(s.board().to_rows(), vec![vec![A], vec![B], vec![B]]);
    assert_eq!(s.moves_left(), 5);

    assert!(s.apply_action(GameAction::ResetLayout));
    assert_eq!(s.board().to_rows(), vec![vec![A, B], vec![B], vec![]]);
    assert_eq!(s.moves_left(), 6);
    assert_eq!(s.attempt(), 2);
}

#[test]
fn restart_reshuffles_with_a_fresh_budget() {
    let mut s = GameSession::new(Season::Winter, 0, SimpleRng::new(5));
    assert!(s.apply_action(GameAction::Restart));
    assert_eq!(s.status(), SessionStatus::Playing);
    assert_eq!(s.board().len(), 6);
    assert_eq!(s.board().total_units(), 16);
    assert_eq!(s.move_limit(), s.level().scramble_moves + 4);
    assert_eq!(s.moves_left(), s.move_limit());
}

#[test]
fn next_level_requires_a_win() {
    let mut s = session(&[vec![A, A, A], vec![A]], 3);
    assert!(!s.apply_action(GameAction::NextLevel));
    assert_eq!(s.level_number(), 1);

    s.tap(1);
    s.tap(0);
    assert!(s.apply_action(GameAction::NextLevel));
    assert_eq!(s.level_number(), 2);
    assert_eq!(s.status(), SessionStatus::Playing);
    assert_eq!(s.board().len(), 6);
}

#[test]
fn scripted_rng_gives_an_exact_session_board() {
    // Every draw is 0: tube 0 is the source each time and its target draw
    // is also 0, so no pour ever lands and the board stays solved.
    let s = GameSession::new(Season::Fall, 0, SequenceRng::new(vec![0]));
    assert_eq!(s.level().scramble_moves, 0);
    assert_eq!(s.move_limit(), 4);
    let palette = Season::Fall.palette();
    let expected: Vec<Vec<Color>> = (0..4)
        .map(|i| vec![palette.color(i); 4])
        .chain([vec![], vec![]])
        .collect();
    assert_eq!(s.board().to_rows(), expected);
}

#[test]
fn snapshot_mirrors_session_state() {
    let mut s = session(&[vec![A, B], vec![B], vec![]], 4);
    s.tap(0);
    let snap = s.snapshot();
    assert_eq!(snap.season, Season::Summer);
    assert_eq!(snap.level_number, 1);
    assert_eq!(snap.selected, Some(0));
    assert_eq!(snap.moves_left, 4);
    assert_eq!(snap.tubes, vec![vec![A, B], vec![B], vec![]]);
    assert!(snap.playable());
}
