pub mod cli;
pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use cli::Args;
pub use command::Command;
pub use error::TermError;
pub use session::{GameResult, Outcome, Session};
