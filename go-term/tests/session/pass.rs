use go_term::Outcome;

use crate::common::play;

#[test]
fn two_passes_end_the_game() {
    let f = play(5, false, &["pass", "pass", "0 0"]);
    assert!(f.game.is_over());
    assert!(matches!(f.outcome, Outcome::Finished(_)));
    assert!(f.output.contains("Black passes"));
    assert!(f.output.contains("White passes"));
    assert!(f.game.board().is_empty());
}

#[test]
fn move_between_passes_keeps_playing() {
    let f = play(5, false, &["pass", "1 1", "pass"]);
    assert!(!f.game.is_over());
    assert_eq!(f.game.consecutive_passes(), 1);
    assert_eq!(f.outcome, Outcome::Abandoned);
}

#[test]
fn empty_game_is_a_tie() {
    let f = play(9, false, &["pass", "pass"]);
    assert!(f.output.contains("Black score: 0"));
    assert!(f.output.contains("White score: 0"));
    assert!(f.output.contains("The result is a tie!"));
}
