#![allow(dead_code)]

use std::io::Cursor;

use go_rules::{Game, GameConfig};
use go_term::{Outcome, Session};

/// Everything a test needs to inspect after a scripted session.
pub struct Finished {
    pub outcome: Outcome,
    pub output: String,
    pub game: Game,
}

/// Run a session on a `size` x `size` board, feeding it one command per line.
pub fn play(size: usize, self_destruct: bool, lines: &[&str]) -> Finished {
    play_with(size, self_destruct, false, lines)
}

pub fn play_json(size: usize, lines: &[&str]) -> Finished {
    play_with(size, false, true, lines)
}

fn play_with(size: usize, self_destruct: bool, json: bool, lines: &[&str]) -> Finished {
    let game = Game::new(GameConfig::new(size, self_destruct)).unwrap();
    let input = Cursor::new(lines.join("\n") + "\n");
    let mut output = Vec::new();

    let mut session = Session::new(game, input, &mut output).with_json(json);
    let outcome = session.run().unwrap();
    let game = session.game().clone();
    drop(session);

    Finished {
        outcome,
        output: String::from_utf8(output).unwrap(),
        game,
    }
}
