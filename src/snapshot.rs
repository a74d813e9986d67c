//! Read-only composed view of the game, for renderers and hosts

use crate::game::GameState;
use crate::tetromino::PieceKind;
use serde::Serialize;

/// One cell of the composed view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "i8")]
pub enum SnapshotCell {
    #[default]
    Empty,
    /// Part of the board
    Settled(PieceKind),
    /// Part of the active piece
    Falling(PieceKind),
}

impl SnapshotCell {
    /// 0 for empty, the piece identifier for settled cells, its negation
    /// for the falling piece
    pub fn code(self) -> i8 {
        match self {
            SnapshotCell::Empty => 0,
            SnapshotCell::Settled(kind) => kind.id() as i8,
            SnapshotCell::Falling(kind) => -(kind.id() as i8),
        }
    }
}

impl From<SnapshotCell> for i8 {
    fn from(cell: SnapshotCell) -> i8 {
        cell.code()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    /// Rows from top to bottom
    pub cells: Vec<Vec<SnapshotCell>>,
    pub score: u64,
    pub lines: u32,
    pub state: GameState,
}

impl Snapshot {
    pub fn get(&self, row: usize, col: usize) -> SnapshotCell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// The grid as numeric codes
    pub fn codes(&self) -> Vec<Vec<i8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }
}
