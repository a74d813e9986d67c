//! Core game state and logic
//!
//! The game is a plain state machine. The host calls [`Game::tick`] on its
//! gravity timer and [`Game::handle_input`] for key presses; nothing in
//! here reads the clock.

use crate::board::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};
use crate::piece::Piece;
use crate::score::Score;
use crate::snapshot::{Snapshot, SnapshotCell};
use crate::spawner::Spawner;
use serde::Serialize;
use tracing::{debug, info};

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Not started yet
    #[default]
    Idle,
    Playing,
    Paused,
    /// Terminal until restart
    Over,
}

/// Player commands the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// What a gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed
    Ignored,
    /// The piece fell one row
    Moved,
    /// The piece locked and the next one spawned
    Locked { lines_cleared: usize },
    /// The piece locked and the next one had nowhere to go
    GameOver { lines_cleared: usize },
}

/// Board size and randomness for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for the spawner, entropy when None
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: None,
        }
    }
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game {
    /// The game board
    pub board: Board,
    /// Current falling piece
    pub current_piece: Option<Piece>,
    /// Score tracking
    pub score: Score,
    /// Current game state
    pub state: GameState,
    spawner: Spawner,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An idle game on the canonical board
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// An idle game; nothing spawns until [`Game::start`]
    pub fn with_config(config: GameConfig) -> Self {
        let spawner = match config.seed {
            Some(seed) => Spawner::with_seed(seed),
            None => Spawner::new(),
        };
        Self {
            board: Board::with_size(config.width, config.height),
            current_piece: None,
            score: Score::new(),
            state: GameState::Idle,
            spawner,
            config,
        }
    }

    /// A game already in play around a prepared board and piece.
    /// The piece is installed only if it fits; otherwise the game is over.
    pub fn from_parts(board: Board, piece: Piece, spawner: Spawner) -> Self {
        let config = GameConfig {
            width: board.width(),
            height: board.height(),
            seed: None,
        };
        let mut game = Self {
            board,
            current_piece: None,
            score: Score::new(),
            state: GameState::Playing,
            spawner,
            config,
        };
        game.install(piece);
        game
    }

    /// True when a new game may begin: before the first one or after game over
    pub fn accepts_start(&self) -> bool {
        matches!(self.state, GameState::Idle | GameState::Over)
    }

    /// Reset everything and begin play. Accepted in any state.
    pub fn start(&mut self) {
        self.board = Board::with_size(self.config.width, self.config.height);
        self.score = Score::new();
        self.current_piece = None;
        self.state = GameState::Playing;

        let piece = self.spawner.spawn_piece(self.board.width());
        self.install(piece);
        info!(
            "Game started on {}x{} board",
            self.board.width(),
            self.board.height()
        );
    }

    /// Same as [`Game::start`]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Switch between playing and paused. Other states are unaffected.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => other,
        };
        debug!("Pause toggled, state={:?}", self.state);
    }

    /// Apply a player command. Returns true if the piece changed.
    /// Illegal moves and anything outside play are silently dropped.
    pub fn handle_input(&mut self, command: Command) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        let Some(piece) = &mut self.current_piece else {
            return false;
        };

        match command {
            Command::MoveLeft => piece.move_left(&self.board),
            Command::MoveRight => piece.move_right(&self.board),
            Command::Rotate => piece.rotate_cw(&self.board),
            Command::SoftDrop => {
                // Landing is left to the next gravity tick
                let moved = piece.move_down(&self.board);
                if moved {
                    self.score.add_soft_drop();
                }
                moved
            }
        }
    }

    /// Advance gravity by one row, locking the piece if it cannot fall
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Ignored;
        }
        let Some(piece) = &mut self.current_piece else {
            return TickOutcome::Ignored;
        };

        if piece.move_down(&self.board) {
            return TickOutcome::Moved;
        }

        self.lock_piece()
    }

    /// Lock the current piece, clear lines and spawn next
    fn lock_piece(&mut self) -> TickOutcome {
        let Some(piece) = self.current_piece.take() else {
            return TickOutcome::Ignored;
        };

        piece.lock(&mut self.board);
        let lines_cleared = self.board.clear_lines();
        let points = self.score.add_clear(lines_cleared);
        debug!(
            "Locked {} at ({}, {}), cleared {} line(s) for {} points",
            piece.kind.name(),
            piece.x,
            piece.y,
            lines_cleared,
            points
        );

        let next = self.spawner.spawn_piece(self.board.width());
        if self.install(next) {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::GameOver { lines_cleared }
        }
    }

    /// Make `piece` active if it fits, otherwise end the game
    fn install(&mut self, piece: Piece) -> bool {
        if piece.fits(&self.board) {
            self.current_piece = Some(piece);
            true
        } else {
            info!(
                "Game over: {} cannot spawn, final score {}",
                piece.kind.name(),
                self.score.points
            );
            self.current_piece = None;
            self.state = GameState::Over;
            false
        }
    }

    /// The board with the active piece overlaid. The board itself is untouched.
    pub fn snapshot(&self) -> Snapshot {
        let mut cells: Vec<Vec<SnapshotCell>> = self
            .board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => SnapshotCell::Empty,
                        Cell::Filled(kind) => SnapshotCell::Settled(*kind),
                    })
                    .collect()
            })
            .collect();

        if let Some(piece) = &self.current_piece {
            for (row, col) in piece.cells() {
                if row < 0 || col < 0 {
                    continue;
                }
                if let Some(slot) = cells
                    .get_mut(row as usize)
                    .and_then(|r| r.get_mut(col as usize))
                {
                    *slot = SnapshotCell::Falling(piece.kind);
                }
            }
        }

        Snapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells,
            score: self.score.points,
            lines: self.score.lines,
            state: self.state,
        }
    }
}
