//! Constants for board geometry, the winning rule, and text rendering.
//!
//! Unlike a fixed-size engine, the board side length is chosen at runtime;
//! these values are the defaults and limits every game is checked against.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN) used when none is given. 15 is the standard gomoku board.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Smallest board on which a five-in-a-row can be formed.
pub const MIN_BOARD_SIZE: usize = WIN_LENGTH;

/// Largest accepted board. Keeps `size * size` cells small enough to allocate.
pub const MAX_BOARD_SIZE: usize = 100;

// =============================================================================
// Rules
// =============================================================================

/// Number of same-colored stones in a line needed to win. Longer lines
/// (overlines) also win.
pub const WIN_LENGTH: usize = 5;

// =============================================================================
// Direction Families
// =============================================================================

/// A unit step on the board as `(d_row, d_col)`.
pub type Step = (isize, isize);

/// The four lines through a point, each as a pair of opposite steps.
/// Order: horizontal, vertical, main diagonal, anti-diagonal.
pub const DIRECTION_FAMILIES: [[Step; 2]; 4] = [
    [(0, 1), (0, -1)],   // horizontal
    [(1, 0), (-1, 0)],   // vertical
    [(1, 1), (-1, -1)],  // diagonal "\"
    [(1, -1), (-1, 1)],  // diagonal "/"
];

// =============================================================================
// Rendering Glyphs
// =============================================================================

/// Empty intersection.
pub const GLYPH_EMPTY: char = '.';

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// White stone.
pub const GLYPH_WHITE: char = 'O';
