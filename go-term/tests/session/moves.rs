use go_rules::Stone;
use go_term::Outcome;

use crate::common::play;

#[test]
fn players_alternate_starting_with_black() {
    let f = play(5, false, &["0 0", "1 1"]);
    assert_eq!(f.game.stone_at((0, 0)), Some(Stone::Black));
    assert_eq!(f.game.stone_at((1, 1)), Some(Stone::White));
    assert_eq!(f.outcome, Outcome::Abandoned);
}

#[test]
fn rejected_move_keeps_the_turn() {
    // White tries Black's point, then plays elsewhere.
    let f = play(5, false, &["0 0", "0 0", "2 2", "3 3"]);
    assert!(f.output.contains("point is already occupied"));
    assert_eq!(f.game.stone_at((2, 2)), Some(Stone::White));
    assert_eq!(f.game.stone_at((3, 3)), Some(Stone::Black));
}

#[test]
fn out_of_bounds_is_reported() {
    let f = play(5, false, &["7 7", "1 1"]);
    assert!(f.output.contains("coordinate is outside the board"));
    assert_eq!(f.game.stone_at((1, 1)), Some(Stone::Black));
}

#[test]
fn capture_is_announced() {
    let f = play(5, false, &["1 0", "0 0", "0 1"]);
    assert!(f.output.contains("Black captures 1 stone(s)"));
    assert_eq!(f.game.num_white_captured(), 1);
}

#[test]
fn suicide_is_rejected_unless_enabled() {
    let moves = ["0 1", "4 4", "1 0", "0 0"];

    let f = play(5, false, &moves);
    assert!(f.output.contains("self-destruct is not allowed"));
    assert_eq!(f.game.stone_at((0, 0)), None);
    assert_eq!(f.game.num_white_captured(), 0);

    let f = play(5, true, &moves);
    assert!(!f.output.contains("self-destruct is not allowed"));
    assert_eq!(f.game.stone_at((0, 0)), None);
    assert_eq!(f.game.num_white_captured(), 1);
}

#[test]
fn board_is_rendered_after_each_move() {
    let f = play(3, false, &["1 1"]);
    assert!(f.output.contains("   0 1 2\n0  . . .\n1  . X .\n2  . . .\n"));
    assert!(f.output.contains("White move: "));
}

#[test]
fn quit_abandons_the_game() {
    let f = play(5, false, &["quit", "0 0"]);
    assert_eq!(f.outcome, Outcome::Abandoned);
    assert!(f.game.board().is_empty());
}
