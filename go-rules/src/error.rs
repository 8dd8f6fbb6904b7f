use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    InvalidInput(String),
    Occupied,
    SelfDestruct,
    Ko,
    BoardFull,
    GameOver,
    GameInProgress,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "coordinate is outside the board"),
            GoError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            GoError::Occupied => write!(f, "point is already occupied"),
            GoError::SelfDestruct => write!(f, "self-destruct is not allowed"),
            GoError::Ko => write!(f, "ko: cannot retake immediately"),
            GoError::BoardFull => write!(f, "board is full"),
            GoError::GameOver => write!(f, "game is over"),
            GoError::GameInProgress => write!(f, "game is still in progress"),
        }
    }
}

impl std::error::Error for GoError {}
