//! Move engine: validation, application, win detection.

use water_sort::core::{apply_move, check_win_condition, is_valid_move, Board};
use water_sort::types::Color;

const A: Color = Color::Crimson;
const B: Color = Color::Moss;

fn board(rows: &[Vec<Color>]) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn solved_board_is_a_win() {
    let b = board(&[vec![A; 4], vec![B; 4]]);
    assert!(check_win_condition(&b));

    let with_empty = board(&[vec![A; 4], vec![], vec![B; 4]]);
    assert!(check_win_condition(&with_empty));
}

#[test]
fn partial_or_mixed_tubes_are_not_a_win() {
    assert!(!check_win_condition(&board(&[vec![A; 3], vec![A]])));
    assert!(!check_win_condition(&board(&[vec![A, A, A, B], vec![B, B, B, A]])));
}

#[test]
fn mismatched_top_is_invalid() {
    let b = board(&[vec![A], vec![B]]);
    assert!(!is_valid_move(&b, 0, 1));
    assert!(!is_valid_move(&b, 1, 0));
}

#[test]
fn pour_into_empty_tube() {
    let mut b = board(&[vec![A], vec![]]);
    assert!(is_valid_move(&b, 0, 1));
    assert!(apply_move(&mut b, 0, 1));
    assert_eq!(b.to_rows(), vec![vec![], vec![A]]);
}

#[test]
fn pour_moves_exactly_one_unit() {
    let mut b = board(&[vec![B, A, A, A], vec![A]]);
    assert!(is_valid_move(&b, 0, 1));
    assert!(apply_move(&mut b, 0, 1));
    assert_eq!(b.to_rows(), vec![vec![B, A, A], vec![A, A]]);
}

#[test]
fn invalid_moves_are_rejected() {
    let b = board(&[vec![A; 4], vec![A, A], vec![], vec![A]]);
    // Same tube
    assert!(!is_valid_move(&b, 1, 1));
    // Empty source
    assert!(!is_valid_move(&b, 2, 1));
    // Full target
    assert!(!is_valid_move(&b, 3, 0));
    // Out of range
    assert!(!is_valid_move(&b, 0, 9));
    assert!(!is_valid_move(&b, 9, 0));
}

#[test]
fn rejected_apply_leaves_board_unchanged() {
    let mut b = board(&[vec![A; 4], vec![A], vec![]]);
    let before = b.clone();
    assert!(!apply_move(&mut b, 1, 0));
    assert!(!apply_move(&mut b, 2, 0));
    assert!(!apply_move(&mut b, 0, 0));
    assert!(!apply_move(&mut b, 0, 7));
    assert_eq!(b, before);
}

#[test]
fn validation_is_pure() {
    let b = board(&[vec![A, B], vec![B]]);
    let before = b.clone();
    for from in 0..3 {
        for to in 0..3 {
            let _ = is_valid_move(&b, from, to);
        }
    }
    assert_eq!(b, before);
}
