use std::path::PathBuf;

use clap::Parser;
use go_rules::GameConfig;

use crate::command::LABEL_COUNT;
use crate::error::TermError;

/// Play Go against a friend in the terminal
#[derive(Debug, Parser)]
#[command(name = "go-term")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with `board_size` and `enable_self_destruct`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Board size, overrides the config file
    #[arg(long)]
    pub size: Option<usize>,

    /// Allow moves that leave the mover's own group without liberties
    #[arg(long)]
    pub self_destruct: bool,

    /// Print the final result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn game_config(&self) -> Result<GameConfig, TermError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    TermError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                GameConfig::from_json(&text)
                    .map_err(|e| TermError::Config(format!("{}: {e}", path.display())))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.self_destruct {
            config.enable_self_destruct = true;
        }

        config
            .validate()
            .map_err(|e| TermError::Config(e.to_string()))?;
        if config.board_size > LABEL_COUNT {
            return Err(TermError::Config(format!(
                "board size {} has no labels beyond {LABEL_COUNT}",
                config.board_size
            )));
        }
        Ok(config)
    }
}
