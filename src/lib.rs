//! BLOCKFALL - the falling-block puzzle from the desktop portfolio
//!
//! The engine (`board`, `tetromino`, `collision`, `piece`, `spawner`,
//! `score`, `game`, `snapshot`) is a plain state machine advanced by
//! [`Game::tick`] and [`Game::handle_input`]. The rest is host plumbing:
//! gravity timer, key mapping, settings, terminal rendering and the
//! headless line protocol.

pub mod board;
pub mod collision;
pub mod game;
pub mod headless;
pub mod input;
pub mod kicks;
pub mod piece;
pub mod score;
pub mod settings;
pub mod snapshot;
pub mod spawner;
pub mod tetromino;
pub mod timer;
pub mod ui;

pub use board::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};
pub use collision::can_place;
pub use game::{Command, Game, GameConfig, GameState, TickOutcome};
pub use piece::Piece;
pub use snapshot::{Snapshot, SnapshotCell};
pub use spawner::Spawner;
pub use tetromino::{PieceKind, Shape};
