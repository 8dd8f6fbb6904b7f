use go_rules::{Scores, Stone};
use go_term::Outcome;

use crate::common::{play, play_json};

#[test]
fn enclosed_territory_wins() {
    // Black walls off the left two columns of a 3x3 board; White holds the right edge.
    let f = play(3, false, &["0 1", "0 2", "1 1", "1 2", "2 1", "2 2", "pass", "pass"]);

    let Outcome::Finished(result) = f.outcome else {
        panic!("game should have finished");
    };
    // Column 0 is Black's; White has no empty point of its own.
    assert_eq!(result.scores, Scores { black: 3, white: 0 });
    assert_eq!(result.winner, Some(Stone::Black));
    assert!(f.output.contains("The winner is Black!"));
}

#[test]
fn captures_count_against_the_captured_color() {
    let f = play(3, false, &["1 0", "0 0", "0 1", "pass", "pass"]);

    let Outcome::Finished(result) = f.outcome else {
        panic!("game should have finished");
    };
    // All 7 empty points touch only Black; White lost one stone.
    assert_eq!(result.scores, Scores { black: 7, white: -1 });
    assert_eq!(result.captures.white, 1);
}

#[test]
fn json_result() {
    let f = play_json(3, &["1 1", "pass", "pass"]);
    let json_line = f.output.lines().last().unwrap();
    let value: serde_json::Value = serde_json::from_str(json_line).unwrap();

    assert_eq!(value["scores"]["black"], 8);
    assert_eq!(value["scores"]["white"], 0);
    assert_eq!(value["winner"], "black");
    assert_eq!(value["captures"]["white"], 0);
}
