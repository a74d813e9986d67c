//! Active falling piece logic

use crate::board::{Board, Cell};
use crate::collision::can_place;
use crate::kicks::candidate_offsets;
use crate::tetromino::{PieceKind, Shape};

/// An active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The template this piece came from
    pub kind: PieceKind,
    /// Current matrix; a private copy, so rotating never touches the template
    pub shape: Shape,
    /// Column of the matrix's left edge
    pub x: i32,
    /// Row of the matrix's top edge, row 0 is the top of the board
    pub y: i32,
}

impl Piece {
    /// Create a new piece at the top-center of a board `board_width` wide
    pub fn new(kind: PieceKind, board_width: usize) -> Self {
        let shape = kind.template();
        Self {
            kind,
            x: (board_width / 2) as i32 - (shape.width() / 2) as i32,
            y: 0,
            shape,
        }
    }

    /// A piece of `kind` at an explicit position
    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: kind.template(),
            x,
            y,
        }
    }

    /// Absolute (row, col) positions of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(|(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    /// Is the piece legal where it currently stands?
    pub fn fits(&self, board: &Board) -> bool {
        can_place(board, &self.shape, self.x, self.y)
    }

    fn shift(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        if can_place(board, &self.shape, self.x + dx, self.y + dy) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Try to move left, returns true if successful
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(board, -1, 0)
    }

    /// Try to move right, returns true if successful
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(board, 1, 0)
    }

    /// Try to move down, returns true if successful
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.shift(board, 0, 1)
    }

    /// Try to rotate clockwise, falling back to wall kicks.
    /// On failure the piece is left exactly as it was.
    pub fn rotate_cw(&mut self, board: &Board) -> bool {
        if !self.kind.rotates() {
            return false;
        }

        let rotated = self.shape.rotated_cw();
        let Some(dx) = candidate_offsets().find(|dx| can_place(board, &rotated, self.x + dx, self.y))
        else {
            return false;
        };

        self.shape = rotated;
        self.x += dx;
        true
    }

    /// Copy the filled cells into the board
    pub fn lock(&self, board: &mut Board) {
        for (row, col) in self.cells() {
            board.set(row, col, Cell::Filled(self.kind));
        }
    }
}
