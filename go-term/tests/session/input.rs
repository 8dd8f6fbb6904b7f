use go_rules::Stone;

use crate::common::play;

#[test]
fn letter_labels_address_large_boards() {
    let f = play(13, false, &["A c"]);
    assert_eq!(f.game.stone_at((10, 12)), Some(Stone::Black));
}

#[test]
fn malformed_input_is_reprompted() {
    let f = play(5, false, &["hello", "1", "1 1"]);
    assert_eq!(f.output.matches("invalid input").count(), 2);
    assert_eq!(f.game.stone_at((1, 1)), Some(Stone::Black));
}

#[test]
fn hint_suggests_nearest_empty_point_to_center() {
    let f = play(5, false, &["hint", "2 2", "hint"]);
    assert!(f.output.contains("Try 2 2"));
    assert!(f.output.contains("Try 1 2"));
    // A hint does not use up the turn.
    assert_eq!(f.game.stone_at((2, 2)), Some(Stone::Black));
}
