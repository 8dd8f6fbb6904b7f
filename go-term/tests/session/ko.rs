use go_rules::{GoError, Stone};

use crate::common::play;

/// Builds a ko in the top-left corner and lets White take it at (1,1).
///
/// ```text
/// . B W .
/// B W . W
/// . B W .
/// ```
const KO_SETUP: [&str; 8] = ["0 1", "0 2", "1 0", "1 3", "2 1", "2 2", "1 2", "1 1"];

#[test]
fn immediate_recapture_blocked() {
    let mut lines = KO_SETUP.to_vec();
    lines.push("1 2");
    let f = play(5, false, &lines);

    assert!(f.output.contains(&GoError::Ko.to_string()));
    assert_eq!(f.game.stone_at((1, 1)), Some(Stone::White));
    assert_eq!(f.game.stone_at((1, 2)), None);
    assert_eq!(f.game.num_black_captured(), 1);
    assert_eq!(f.game.num_white_captured(), 0);
}

#[test]
fn recapture_after_ko_threat() {
    let mut lines = KO_SETUP.to_vec();
    lines.extend(["4 4", "4 0", "1 2"]);
    let f = play(5, false, &lines);

    assert!(!f.output.contains(&GoError::Ko.to_string()));
    assert_eq!(f.game.stone_at((1, 2)), Some(Stone::Black));
    assert_eq!(f.game.stone_at((1, 1)), None);
    assert_eq!(f.game.num_white_captured(), 1);
}
