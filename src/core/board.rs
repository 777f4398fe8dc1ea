//! The Pente board: an N×N grid of cells.
//!
//! Boards are cloned on every search branch, so the cell storage is a
//! flat byte-sized array in a `SmallVec`. Boards up to 8×8 (the sizes the
//! test scenarios use) stay inline with no heap allocation, and larger
//! boards clone with a single memcpy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    /// Check whether the cell is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check whether the cell holds a stone of the given player.
    #[inline]
    #[must_use]
    pub fn is_stone_of(self, player: Player) -> bool {
        self == Cell::Stone(player)
    }
}

/// An N×N Pente board.
///
/// The size is fixed at construction. The board owns no search metadata;
/// capture counters and game status live alongside it in
/// [`SearchState`](crate::core::SearchState).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: SmallVec<[Cell; 64]>,
}

impl Board {
    /// Create an empty board of the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Board must be at least 1x1");
        Self {
            size,
            cells: smallvec::smallvec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Get the cell at (row, col).
    ///
    /// Panics if the coordinate is off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Set the cell at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// Check whether a signed coordinate lies on the board.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Get the cell at a signed coordinate, or `None` when off the board.
    ///
    /// The rules engine and heuristics walk rays in signed steps; this
    /// keeps their bounds handling in one place.
    #[inline]
    #[must_use]
    pub fn at(&self, row: isize, col: isize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.get(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Iterate over the coordinates of all empty cells in row-major order.
    ///
    /// This is the legal-move set: any empty cell may be played.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Check whether the board has no empty cells left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Count stones belonging to a player.
    #[must_use]
    pub fn stone_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_stone_of(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Stone(Player::One) => write!(f, "1")?,
                    Cell::Stone(Player::Two) => write!(f, "2")?,
                }
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
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 49);
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::new(7);
        board.set(3, 4, Cell::Stone(Player::One));

        assert_eq!(board.get(3, 4), Cell::Stone(Player::One));
        assert_eq!(board.get(4, 3), Cell::Empty);
        assert_eq!(board.empty_cells().count(), 48);
    }

    #[test]
    fn test_at_bounds() {
        let board = Board::new(3);
        assert_eq!(board.at(0, 0), Some(Cell::Empty));
        assert_eq!(board.at(2, 2), Some(Cell::Empty));
        assert_eq!(board.at(-1, 0), None);
        assert_eq!(board.at(0, 3), None);
    }

    #[test]
    fn test_empty_cells_scan_order() {
        let mut board = Board::new(2);
        board.set(0, 0, Cell::Stone(Player::Two));

        let empties: Vec<_> = board.empty_cells().collect();
        assert_eq!(empties, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        for row in 0..2 {
            for col in 0..2 {
                board.set(row, col, Cell::Stone(Player::One));
            }
        }
        assert!(board.is_full());
        assert_eq!(board.stone_count(Player::One), 4);
        assert_eq!(board.stone_count(Player::Two), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(5);
        let copy = board.clone();

        board.set(1, 1, Cell::Stone(Player::One));

        assert_eq!(copy.get(1, 1), Cell::Empty);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.set(0, 0, Cell::Stone(Player::One));
        board.set(1, 1, Cell::Stone(Player::Two));

        let shown = format!("{board}");
        assert_eq!(shown, "1 . .\n. 2 .\n. . .\n");
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new(4);
        board.set(2, 3, Cell::Stone(Player::Two));

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
