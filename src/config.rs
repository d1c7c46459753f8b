//! Game setup options.

use crate::board::Player;
use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Construction-time parameters of a game. `reset` returns to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Who places the first stone.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: Player::Black,
        }
    }
}

impl GameConfig {
    pub fn with_size(board_size: usize) -> Self {
        GameConfig {
            board_size,
            ..Self::default()
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.first_player, Player::Black);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimum_size() {
        assert!(GameConfig::with_size(5).validate().is_ok());
        assert_eq!(
            GameConfig::with_size(4).validate(),
            Err(ConfigError::BoardTooSmall { size: 4, min: 5 })
        );
        assert!(GameConfig::with_size(0).validate().is_err());
    }

    #[test]
    fn test_maximum_size() {
        assert!(GameConfig::with_size(MAX_BOARD_SIZE).validate().is_ok());
        assert_eq!(
            GameConfig::with_size(MAX_BOARD_SIZE + 1).validate(),
            Err(ConfigError::BoardTooLarge {
                size: MAX_BOARD_SIZE + 1,
                max: MAX_BOARD_SIZE
            })
        );
        assert!(GameConfig::with_size(usize::MAX).validate().is_err());
    }
}
