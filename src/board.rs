//! Game board representation

use crate::tetromino::PieceKind;

/// Canonical board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 18;

/// A cell on the board - either empty or filled by a settled piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Numeric form: 0 for empty, the piece identifier otherwise
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.id(),
        }
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Grid stored as [row][col], row 0 is the top, row increases downward
    cells: Vec<Vec<Cell>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board of the canonical size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of any size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Set a cell at a position
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        match self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Remove every full row, then pad the top with empty rows so the
    /// height is restored. Survivors keep their relative order.
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let before = self.cells.len();
        self.cells.retain(|row| !is_full(row));
        let cleared = before - self.cells.len();

        let width = self.width;
        self.cells
            .splice(0..0, std::iter::repeat_n(vec![Cell::Empty; width], cleared));

        cleared
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Cell::is_empty))
    }
}

/// A row with no gaps
fn is_full(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, row: i32, except: Option<i32>) {
        for col in 0..board.width() as i32 {
            if Some(col) != except {
                board.set(row, col, Cell::Filled(PieceKind::Z));
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.width(), BOARD_WIDTH);
        assert_eq!(board.height(), BOARD_HEIGHT);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        assert!(board.set(5, 5, Cell::Filled(PieceKind::T)));
        assert_eq!(board.get(5, 5), Some(Cell::Filled(PieceKind::T)));
        assert_eq!(board.get(5, 5).map(|c| c.code()), Some(3));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(BOARD_HEIGHT as i32, 0), None);
        assert_eq!(board.get(0, BOARD_WIDTH as i32), None);
        assert!(!board.set(BOARD_HEIGHT as i32, 0, Cell::Filled(PieceKind::I)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear_single_line() {
        let mut board = Board::new();
        let bottom = BOARD_HEIGHT as i32 - 1;
        fill_row(&mut board, bottom, None);
        // A block resting on the full row
        board.set(bottom - 1, 0, Cell::Filled(PieceKind::L));

        let cleared = board.clear_lines();
        assert_eq!(cleared, 1);
        assert_eq!(board.height(), BOARD_HEIGHT);
        // The block from above should now sit on the bottom row
        assert_eq!(board.get(bottom, 0), Some(Cell::Filled(PieceKind::L)));
        assert!(board.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_clear_non_adjacent_lines_keeps_order() {
        let mut board = Board::with_size(4, 6);
        fill_row(&mut board, 5, None);
        fill_row(&mut board, 4, Some(1));
        fill_row(&mut board, 3, None);
        board.set(2, 3, Cell::Filled(PieceKind::S));

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(board.height(), 6);
        // Survivors shift down, preserving order
        assert_eq!(board.get(5, 1), Some(Cell::Empty));
        assert_eq!(board.get(5, 0), Some(Cell::Filled(PieceKind::Z)));
        assert_eq!(board.get(4, 3), Some(Cell::Filled(PieceKind::S)));
        for row in 0..2 {
            assert!(board.rows().nth(row).unwrap().iter().all(Cell::is_empty));
        }
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut board = Board::new();
        fill_row(&mut board, 10, Some(4));
        let before = board.clone();
        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::with_size(3, 3);
        fill_row(&mut board, 2, None);
        fill_row(&mut board, 1, Some(0));
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert!(is_full(rows[2]));
        assert!(!is_full(rows[1]));
        assert!(!is_full(rows[0]));
    }
}
