//! Placement legality: walls, floor and settled cells

use crate::board::Board;
use crate::tetromino::Shape;

/// Can `shape` sit with its top-left corner at column `x`, row `y`?
///
/// Rows above the board (`y + row < 0`) are allowed and skip the occupancy
/// check, but every filled cell must still be inside the side walls.
pub fn can_place(board: &Board, shape: &Shape, x: i32, y: i32) -> bool {
    shape.filled().all(|(row, col)| {
        let board_col = x + col as i32;
        let board_row = y + row as i32;

        if board_col < 0 || board_col >= board.width() as i32 || board_row >= board.height() as i32
        {
            return false;
        }
        if board_row < 0 {
            return true;
        }
        board
            .get(board_row, board_col)
            .is_some_and(|cell| cell.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, BOARD_HEIGHT, BOARD_WIDTH};
    use crate::tetromino::PieceKind;

    #[test]
    fn test_empty_board_accepts_spawn() {
        let board = Board::new();
        for kind in PieceKind::all() {
            let shape = kind.template();
            let x = (BOARD_WIDTH / 2 - shape.width() / 2) as i32;
            assert!(can_place(&board, &shape, x, 0), "{}", kind.name());
        }
    }

    #[test]
    fn test_walls() {
        let board = Board::new();
        let shape = PieceKind::O.template();
        assert!(can_place(&board, &shape, 0, 0));
        assert!(!can_place(&board, &shape, -1, 0));
        assert!(can_place(&board, &shape, BOARD_WIDTH as i32 - 2, 0));
        assert!(!can_place(&board, &shape, BOARD_WIDTH as i32 - 1, 0));
    }

    #[test]
    fn test_floor() {
        let board = Board::new();
        let shape = PieceKind::O.template();
        assert!(can_place(&board, &shape, 4, BOARD_HEIGHT as i32 - 2));
        assert!(!can_place(&board, &shape, 4, BOARD_HEIGHT as i32 - 1));
    }

    #[test]
    fn test_above_board_skips_occupancy_but_not_walls() {
        let mut board = Board::new();
        board.set(0, 4, Cell::Filled(PieceKind::J));
        let shape = PieceKind::I.template().rotated_cw();
        // Vertical I hanging above the top, bottom cell lands at row 0
        assert!(!can_place(&board, &shape, 4, -3));
        assert!(can_place(&board, &shape, 4, -4));
        assert!(!can_place(&board, &shape, -1, -4));
        assert!(!can_place(&board, &shape, BOARD_WIDTH as i32, -4));
    }

    #[test]
    fn test_settled_cell_blocks() {
        let mut board = Board::new();
        board.set(10, 5, Cell::Filled(PieceKind::S));
        let shape = PieceKind::T.template();
        // T bottom row covers cols 4..=6 at row y + 1
        assert!(!can_place(&board, &shape, 4, 9));
        assert!(can_place(&board, &shape, 6, 9));
    }

    #[test]
    fn test_empty_cells_of_matrix_are_ignored() {
        let mut board = Board::new();
        // T's top-left matrix cell is empty
        board.set(0, 0, Cell::Filled(PieceKind::Z));
        assert!(can_place(&board, &PieceKind::T.template(), 0, 0));
    }
}
