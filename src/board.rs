//! Square grid of cells, players, and line counting.

use std::fmt;

use crate::constants::{DIRECTION_FAMILIES, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, Step};

/// One of the two sides. Black conventionally moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opponent. Applying it twice gives back the same player.
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Player name for display.
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::Black => GLYPH_BLACK,
            Player::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The owner of the stone, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Occupied(p) => p.glyph(),
        }
    }
}

/// An NxN board stored row-major.
///
/// Stones are only ever added; the whole grid is wiped with [`Board::clear`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    stones: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            stones: 0,
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Convert signed coordinates to grid indices, or `None` if off the board.
    pub fn to_index(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        if r >= self.size || c >= self.size {
            return None;
        }
        Some((r, c))
    }

    /// Cell at `(row, col)`, or `None` if the coordinates are off the board.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        let (r, c) = self.to_index(row, col)?;
        Some(self.cells[self.idx(r, c)])
    }

    /// Put a stone on a cell the caller has already checked is on the board
    /// and empty.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        let i = self.idx(row, col);
        debug_assert!(self.cells[i].is_empty(), "({row}, {col}) already occupied");
        self.cells[i] = Cell::Occupied(player);
        self.stones += 1;
    }

    /// Remove every stone.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.stones = 0;
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Number of stones belonging to `player`.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.player() == Some(player))
            .count()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Iterate over the coordinates of every empty cell, row by row.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let s = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(i, _)| (i / s, i % s))
    }

    /// Count consecutive stones of `player` starting next to `(row, col)` and
    /// walking in direction `step`, stopping at the edge or the first cell not
    /// owned by `player`.
    fn walk(&self, row: usize, col: usize, step: Step, player: Player) -> usize {
        let (dr, dc) = step;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut count = 0;
        while self.get(r, c) == Some(Cell::Occupied(player)) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Length of the run through `(row, col)` along one direction family,
    /// including the stone at `(row, col)` itself. Zero for empty or
    /// off-board cells.
    pub fn run_length(&self, row: isize, col: isize, family: [Step; 2]) -> usize {
        let Some((r, c)) = self.to_index(row, col) else {
            return 0;
        };
        let Cell::Occupied(player) = self.cells[self.idx(r, c)] else {
            return 0;
        };
        1 + family
            .iter()
            .map(|&step| self.walk(r, c, step, player))
            .sum::<usize>()
    }

    /// Longest run through `(row, col)` over all four direction families.
    pub fn longest_run(&self, row: isize, col: isize) -> usize {
        DIRECTION_FAMILIES
            .iter()
            .map(|&family| self.run_length(row, col, family))
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>3}")?;
            for col in 0..self.size {
                let ch = self.cells[self.idx(row, col)].glyph();
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
        assert_eq!(Player::Black.other().other(), Player::Black);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.empty_cells().count(), 49);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(5);
        assert_eq!(board.get(0, 0), Some(Cell::Empty));
        assert_eq!(board.get(4, 4), Some(Cell::Empty));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, 5), None);
        assert_eq!(board.get(5, 0), None);
    }

    #[test]
    fn test_place_and_count() {
        let mut board = Board::new(5);
        board.place(2, 2, Player::Black);
        board.place(0, 1, Player::White);
        board.place(4, 4, Player::Black);
        assert_eq!(board.get(2, 2), Some(Cell::Occupied(Player::Black)));
        assert_eq!(board.get(2, 2).and_then(Cell::player), Some(Player::Black));
        assert_eq!(board.get(3, 3).and_then(Cell::player), None);
        assert_eq!(board.stone_count(), 3);
        assert_eq!(board.count_of(Player::Black), 2);
        assert_eq!(board.count_of(Player::White), 1);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    #[cfg(debug_assertions)]
    fn test_place_on_occupied_panics_in_debug() {
        let mut board = Board::new(5);
        board.place(2, 2, Player::Black);
        board.place(2, 2, Player::White);
    }

    #[test]
    fn test_run_length_stops_at_other_color() {
        let mut board = Board::new(9);
        for col in 1..4 {
            board.place(4, col, Player::Black);
        }
        board.place(4, 4, Player::White);
        board.place(4, 0, Player::White);

        let horizontal = DIRECTION_FAMILIES[0];
        assert_eq!(board.run_length(4, 2, horizontal), 3);
        assert_eq!(board.run_length(4, 4, horizontal), 1);
        assert_eq!(board.run_length(5, 5, horizontal), 0);
        assert_eq!(board.run_length(-3, 5, horizontal), 0);
    }

    #[test]
    fn test_longest_run_diagonal_at_edge() {
        let mut board = Board::new(5);
        for i in 0..5 {
            board.place(i, 4 - i, Player::White);
        }
        assert_eq!(board.longest_run(0, 4), 5);
        assert_eq!(board.longest_run(4, 0), 5);
        assert_eq!(board.longest_run(2, 2), 5);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(5);
        board.place(0, 0, Player::Black);
        board.place(1, 1, Player::White);
        board.clear();
        assert_eq!(board, Board::new(5));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(5);
        board.place(0, 0, Player::Black);
        board.place(1, 2, Player::White);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "     0  1  2  3  4");
        assert_eq!(lines[1], "  0  X  .  .  .  .");
        assert_eq!(lines[2], "  1  .  .  O  .  .");
    }
}
