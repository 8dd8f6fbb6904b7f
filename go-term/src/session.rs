use std::io::{BufRead, Write};

use go_rules::{Captures, Game, Scores, Stone};
use serde::Serialize;

use crate::command::{Command, coord_to_label};
use crate::error::TermError;
use crate::render::render;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Two consecutive passes.
    Finished(GameResult),
    /// The player quit or the input ran out.
    Abandoned,
}

/// Final result, also printed as JSON with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub scores: Scores,
    pub captures: Captures,
    pub winner: Option<Stone>,
}

/// Alternating-turn game loop over a line-based reader and a writer.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    turn: Stone,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Session {
            game,
            input,
            output,
            turn: Stone::Black,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn run(&mut self) -> Result<Outcome, TermError> {
        tracing::info!(size = self.game.size(), "session started");
        write!(self.output, "{}", render(self.game.board()))?;

        while !self.game.is_over() {
            write!(self.output, "{} move: ", self.turn)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("input closed, abandoning game");
                return Ok(Outcome::Abandoned);
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match command {
                Command::Play(point) => match self.game.place(self.turn, point) {
                    Ok(resolution) => {
                        if !resolution.captured.is_empty() {
                            writeln!(
                                self.output,
                                "{} captures {} stone(s)",
                                self.turn,
                                resolution.captured.len()
                            )?;
                        }
                        self.end_turn()?;
                    }
                    Err(e) => {
                        tracing::debug!(%command, "rejected move: {e}");
                        writeln!(self.output, "{e}")?;
                    }
                },
                Command::Pass => {
                    self.game.pass_turn()?;
                    writeln!(self.output, "{} passes", self.turn)?;
                    self.end_turn()?;
                }
                Command::Hint => match self.game.suggest() {
                    Ok((row, col)) => writeln!(
                        self.output,
                        "Try {} {}",
                        coord_to_label(row),
                        coord_to_label(col)
                    )?,
                    Err(e) => writeln!(self.output, "{e}")?,
                },
                Command::Quit => {
                    tracing::info!("player quit");
                    return Ok(Outcome::Abandoned);
                }
            }
        }

        let result = self.result()?;
        self.print_result(&result)?;
        Ok(Outcome::Finished(result))
    }

    fn read_line(&mut self) -> Result<Option<String>, TermError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn end_turn(&mut self) -> Result<(), TermError> {
        self.turn = self.turn.opp();
        write!(self.output, "{}", render(self.game.board()))?;
        Ok(())
    }

    fn result(&self) -> Result<GameResult, TermError> {
        let scores = self.game.get_scores()?;
        Ok(GameResult {
            scores,
            captures: self.game.captures().clone(),
            winner: scores.winner(),
        })
    }

    fn print_result(&mut self, result: &GameResult) -> Result<(), TermError> {
        tracing::info!(
            black = result.scores.black,
            white = result.scores.white,
            "game over"
        );

        if self.json {
            serde_json::to_writer(&mut self.output, result)?;
            writeln!(self.output)?;
            return Ok(());
        }

        writeln!(self.output, "Black score: {}", result.scores.get(Stone::Black))?;
        writeln!(self.output, "White score: {}", result.scores.get(Stone::White))?;
        match result.winner {
            Some(stone) => writeln!(self.output, "The winner is {stone}!")?,
            None => writeln!(self.output, "The result is a tie!")?,
        }
        Ok(())
    }
}
