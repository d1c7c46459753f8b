//! Random playouts (random game simulation).
//!
//! A playout plays uniformly random legal moves until the game ends. It is
//! used by the `demo` command and as a stress driver in tests. There is no
//! strategy here: every empty cell is equally likely.

use fastrand::Rng;
use tracing::{debug, warn};

use crate::game::{Game, Phase};

/// Play random legal moves until the game reaches a terminal phase.
///
/// Returns the final phase. A game that is already over is left untouched.
pub fn random_playout(game: &mut Game, rng: &mut Rng) -> Phase {
    while !game.status().is_terminal() {
        let Some((row, col)) = choose_random_move(game, rng) else {
            // Unreachable while the engine declares a draw on a full board.
            break;
        };
        if let Err(e) = game.place_stone(row as isize, col as isize) {
            warn!(row, col, error = %e, "engine rejected a random empty cell");
            break;
        }
    }
    debug!(status = %game.status(), moves = game.move_count(), "playout finished");
    game.status()
}

/// Choose a random empty cell, or `None` if the board is full.
pub fn choose_random_move(game: &Game, rng: &mut Rng) -> Option<(usize, usize)> {
    let candidates: Vec<(usize, usize)> = game.board().empty_cells().collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}
