use serde::{Deserialize, Serialize};

use crate::error::GoError;

/// Largest accepted `board_size`.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Session settings, fixed for the lifetime of a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_size: usize,
    pub enable_self_destruct: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 9,
            enable_self_destruct: false,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, enable_self_destruct: bool) -> Self {
        GameConfig {
            board_size,
            enable_self_destruct,
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GoError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GoError::InvalidInput(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if self.board_size == 0 {
            return Err(GoError::InvalidInput("board_size must be at least 1".into()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(GoError::InvalidInput(format!(
                "board_size must be at most {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 9);
        assert!(!config.enable_self_destruct);
    }

    #[test]
    fn parses_full_config() {
        let config =
            GameConfig::from_json(r#"{"board_size": 13, "enable_self_destruct": true}"#).unwrap();
        assert_eq!(config, GameConfig::new(13, true));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = GameConfig::from_json(r#"{"enable_self_destruct": true}"#).unwrap();
        assert_eq!(config.board_size, 9);
        assert!(config.enable_self_destruct);
    }

    #[test]
    fn rejects_zero_board_size() {
        let result = GameConfig::from_json(r#"{"board_size": 0}"#);
        assert!(matches!(result, Err(GoError::InvalidInput(_))));
    }

    #[test]
    fn rejects_oversized_board() {
        assert!(GameConfig::new(MAX_BOARD_SIZE, false).validate().is_ok());
        assert!(matches!(
            GameConfig::new(MAX_BOARD_SIZE + 1, false).validate(),
            Err(GoError::InvalidInput(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"board_size": 8589934592}"#),
            Err(GoError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = GameConfig::from_json(r#"{"board_size": 9, "komi": 6.5}"#);
        assert!(matches!(result, Err(GoError::InvalidInput(_))));
    }

    #[test]
    fn rejects_negative_size() {
        assert!(GameConfig::from_json(r#"{"board_size": -1}"#).is_err());
    }
}
