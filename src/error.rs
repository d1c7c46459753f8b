//! Error types for the engine and its configuration.

/// A move the engine refused. The game state is never modified when this is
/// returned, so the caller can simply ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("illegal move: ({row}, {col}) is off the board")]
    OutOfBounds { row: isize, col: isize },

    #[error("illegal move: ({row}, {col}) is already occupied")]
    Occupied { row: isize, col: isize },

    #[error("illegal move: the game is over")]
    GameOver,
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is too small, must be at least {min}")]
    BoardTooSmall { size: usize, min: usize },

    #[error("board size {size} is too large, must be at most {max}")]
    BoardTooLarge { size: usize, max: usize },
}
