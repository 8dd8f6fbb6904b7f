use std::fmt;

use go_rules::{GoError, Point};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Point),
    Pass,
    Hint,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "pass" => return Ok(Command::Pass),
            "hint" => return Ok(Command::Hint),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => {
                Ok(Command::Play((label_to_coord(row)?, label_to_coord(col)?)))
            }
            _ => Err(GoError::InvalidInput(format!(
                "expected \"pass\", \"hint\", \"quit\" or \"<row> <col>\", got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Play((row, col)) => {
                write!(f, "{} {}", coord_to_label(*row), coord_to_label(*col))
            }
            Command::Pass => write!(f, "pass"),
            Command::Hint => write!(f, "hint"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

/// Number of distinct single-character labels, and so the largest playable board size.
pub const LABEL_COUNT: usize = 36;

/// Translate a single-character label into a coordinate: `0`-`9`, then `A` = 10, `B` = 11, ...
pub fn label_to_coord(label: &str) -> Result<usize, GoError> {
    let mut chars = label.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(GoError::InvalidInput(format!(
            "label {label:?} is not a single character"
        )));
    };

    match c {
        '0'..='9' => Ok(c as usize - '0' as usize),
        'a'..='z' | 'A'..='Z' => Ok(10 + (c.to_ascii_uppercase() as usize - 'A' as usize)),
        _ => Err(GoError::InvalidInput(format!("unknown label {label:?}"))),
    }
}

/// Inverse of [`label_to_coord`]. Coordinates past `Z` are shown as `?`.
pub fn coord_to_label(coord: usize) -> char {
    match coord {
        0..=9 => (b'0' + coord as u8) as char,
        10..=35 => (b'A' + (coord - 10) as u8) as char,
        _ => '?',
    }
}
