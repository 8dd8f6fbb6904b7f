pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod group;
pub mod group_manager;
pub mod ko;
pub mod score;
pub mod stone;

/// A `(row, col)` coordinate on the board.
pub type Point = (usize, usize);

pub use board::Board;
pub use config::GameConfig;
pub use error::GoError;
pub use game::Game;
pub use group::Group;
pub use group_manager::{Captures, GroupManager, Resolution};
pub use ko::Ko;
pub use score::Scores;
pub use stone::Stone;
