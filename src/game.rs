//! The gomoku game engine.
//!
//! A [`Game`] owns the board, whose turn it is, and the game phase. It is
//! changed only through [`Game::place_stone`] and [`Game::reset`]:
//! - a move is accepted only on an empty, on-board cell while the game is
//!   in progress;
//! - after each stone, only the four lines through that stone are checked
//!   for five-in-a-row, so a move costs O(N) rather than a full board scan;
//! - a win is checked before a draw, so filling the last cell with a
//!   winning stone is a win.
//!
//! The engine does no I/O. Rendering and input parsing live in
//! [`crate::console`].

use std::fmt;

use tracing::{debug, info, trace};

use crate::board::{Board, Cell, Player};
use crate::config::GameConfig;
use crate::constants::{DIRECTION_FAMILIES, WIN_LENGTH};
use crate::error::{ConfigError, IllegalMove};

/// Where the game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    InProgress,
    Won(Player),
    Drawn,
}

impl Phase {
    /// `Won` or `Drawn`: no more moves until a reset.
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::InProgress => write!(f, "in progress"),
            Phase::Won(p) => write!(f, "{p} wins"),
            Phase::Drawn => write!(f, "draw"),
        }
    }
}

/// A game of gomoku (state plus rules).
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    config: GameConfig,
    current_player: Player,
    status: Phase,
    last_move: Option<(usize, usize)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_valid_config(GameConfig::default())
    }
}

impl Game {
    /// Create a game on a `board_size` x `board_size` board with Black to move.
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::with_size(board_size))
    }

    /// Create a game from a full configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        Game {
            board: Board::new(config.board_size),
            config,
            current_player: config.first_player,
            status: Phase::InProgress,
            last_move: None,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The player who moved first, and who moves first again after a reset.
    pub fn starting_player(&self) -> Player {
        self.config.first_player
    }

    /// Whose turn it is. After a win this stays the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Phase {
        self.status
    }

    /// Cell at `(row, col)`, or `None` if off the board.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Number of stones placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.board.stone_count()
    }

    /// Coordinates of the most recent stone.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// True iff `(row, col)` is on the board and empty.
    ///
    /// This only looks at the board; a legal cell can still be refused by
    /// [`Game::place_stone`] once the game is over.
    pub fn is_legal(&self, row: isize, col: isize) -> bool {
        self.board.get(row, col) == Some(Cell::Empty)
    }

    /// True iff no cell is empty.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Whether the stone at `(row, col)` is part of a line of at least
    /// [`WIN_LENGTH`] stones of its color. False for empty or off-board cells.
    pub fn has_five_in_a_row(&self, row: isize, col: isize) -> bool {
        DIRECTION_FAMILIES
            .iter()
            .any(|&family| self.board.run_length(row, col, family) >= WIN_LENGTH)
    }

    /// One-line description of the game for display.
    pub fn status_text(&self) -> String {
        match self.status {
            Phase::InProgress => format!("{} to move", self.current_player),
            Phase::Won(p) => format!("{p} wins!"),
            Phase::Drawn => "Draw!".to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Place a stone for the current player at `(row, col)`.
    ///
    /// On success returns the new phase: `Won(mover)` if the stone completes a
    /// line of five or more (the turn does not pass), `Drawn` if it fills the
    /// board without winning, otherwise `InProgress` with the turn passed to
    /// the opponent. On error nothing changes.
    pub fn place_stone(&mut self, row: isize, col: isize) -> Result<Phase, IllegalMove> {
        if self.status.is_terminal() {
            trace!(row, col, status = %self.status, "rejected move after game end");
            return Err(IllegalMove::GameOver);
        }
        let (r, c) = match self.board.get(row, col) {
            None => {
                trace!(row, col, "rejected off-board move");
                return Err(IllegalMove::OutOfBounds { row, col });
            }
            Some(Cell::Occupied(_)) => {
                trace!(row, col, "rejected move on occupied cell");
                return Err(IllegalMove::Occupied { row, col });
            }
            Some(Cell::Empty) => (row as usize, col as usize),
        };

        let mover = self.current_player;
        self.board.place(r, c, mover);
        self.last_move = Some((r, c));
        debug!(row = r, col = c, player = %mover, moves = self.move_count(), "stone placed");

        if self.has_five_in_a_row(row, col) {
            self.status = Phase::Won(mover);
            info!(player = %mover, moves = self.move_count(), "game won");
        } else if self.board.is_full() {
            self.status = Phase::Drawn;
            info!(moves = self.move_count(), "game drawn");
        } else {
            self.current_player = mover.other();
        }
        Ok(self.status)
    }

    /// Clear the board and return to the construction-time starting state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.config.first_player;
        self.status = Phase::InProgress;
        self.last_move = None;
        debug!(size = self.size(), first = %self.current_player, "game reset");
    }
}
