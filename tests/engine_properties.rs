//! Property tests for the engine invariants.
//!
//! - Placement legality rejects anything outside the side walls or below the floor.
//! - A locked piece can never be placed again on the same spot.
//! - Line clears keep the height, put empty rows on top and preserve survivor order.
//! - Random play never leaves the active piece in an illegal spot and never
//!   lowers the score.

use blockfall::{
    can_place, Board, Cell, Command, Game, GameConfig, GameState, Piece, PieceKind, Shape,
    BOARD_HEIGHT, BOARD_WIDTH,
};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::all().to_vec())
}

fn rotated(kind: PieceKind, turns: usize) -> Shape {
    (0..turns).fold(kind.template(), |shape, _| shape.rotated_cw())
}

/// A board with random settled cells, described row by row
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(
        prop::collection::vec(prop::option::weighted(0.4, kind_strategy()), BOARD_WIDTH),
        BOARD_HEIGHT,
    )
    .prop_map(|rows| {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    board.set(r as i32, c as i32, Cell::Filled(*kind));
                }
            }
        }
        board
    })
}

fn command_strategy() -> impl Strategy<Value = Option<Command>> {
    prop::sample::select(vec![
        Some(Command::MoveLeft),
        Some(Command::MoveRight),
        Some(Command::SoftDrop),
        Some(Command::Rotate),
        None, // gravity tick
    ])
}

proptest! {
    #[test]
    fn out_of_bounds_is_never_placeable(
        board in board_strategy(),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -6i32..16,
        y in -6i32..24,
    ) {
        let shape = rotated(kind, turns);
        let out_of_bounds = shape.filled().any(|(r, c)| {
            let col = x + c as i32;
            let row = y + r as i32;
            col < 0 || col >= BOARD_WIDTH as i32 || row >= BOARD_HEIGHT as i32
        });
        if out_of_bounds {
            prop_assert!(!can_place(&board, &shape, x, y));
        }
    }

    #[test]
    fn locked_piece_blocks_its_own_spot(
        board in board_strategy(),
        kind in kind_strategy(),
        turns in 0usize..4,
        col in 0usize..BOARD_WIDTH,
        row in 0usize..BOARD_HEIGHT,
    ) {
        // Keep the shape inside the walls and above the floor, then clear
        // its footprint so the spot is always legal before locking
        let shape = rotated(kind, turns);
        let x = (col % (BOARD_WIDTH - shape.width() + 1)) as i32;
        let y = (row % (BOARD_HEIGHT - shape.height() + 1)) as i32;
        let piece = Piece { kind, shape, x, y };

        let mut board = board;
        for (r, c) in piece.cells() {
            board.set(r, c, Cell::Empty);
        }
        prop_assert!(can_place(&board, &shape, x, y));

        piece.lock(&mut board);
        prop_assert!(!can_place(&board, &shape, x, y));
        for (r, c) in piece.cells() {
            prop_assert_eq!(board.get(r, c), Some(Cell::Filled(kind)));
        }
    }

    #[test]
    fn line_clear_compacts_rows(board in board_strategy(), full_rows in prop::collection::vec(0usize..BOARD_HEIGHT, 0..5)) {
        let mut board = board;
        for &row in &full_rows {
            for col in 0..BOARD_WIDTH as i32 {
                board.set(row as i32, col, Cell::Filled(PieceKind::I));
            }
        }
        let survivors: Vec<Vec<Cell>> = board
            .rows()
            .filter(|row| !row.iter().all(Cell::is_filled))
            .map(<[Cell]>::to_vec)
            .collect();

        let cleared = board.clear_lines();
        prop_assert_eq!(cleared, BOARD_HEIGHT - survivors.len());
        prop_assert_eq!(board.height(), BOARD_HEIGHT);

        let rows: Vec<Vec<Cell>> = board.rows().map(<[Cell]>::to_vec).collect();
        prop_assert_eq!(rows.len(), BOARD_HEIGHT);
        for row in &rows[..cleared] {
            prop_assert!(row.iter().all(Cell::is_empty));
        }
        prop_assert_eq!(&rows[cleared..], &survivors[..]);
    }

    #[test]
    fn square_never_changes(x in 0i32..8, y in 0i32..16) {
        let board = Board::new();
        let mut piece = Piece::at(PieceKind::O, x, y);
        let before = piece.clone();
        piece.rotate_cw(&board);
        prop_assert_eq!(piece, before);
    }

    #[test]
    fn random_play_keeps_invariants(seed in any::<u64>(), steps in prop::collection::vec(command_strategy(), 0..300)) {
        let mut game = Game::with_config(GameConfig { seed: Some(seed), ..GameConfig::default() });
        game.start();
        let mut last_score = 0;

        for step in steps {
            match step {
                Some(command) => {
                    game.handle_input(command);
                }
                None => {
                    game.tick();
                }
            }

            prop_assert!(game.score.points >= last_score);
            last_score = game.score.points;
            prop_assert_eq!(game.board.height(), BOARD_HEIGHT);

            match game.state {
                GameState::Playing => {
                    let piece = game.current_piece.as_ref().unwrap();
                    prop_assert!(piece.fits(&game.board));
                }
                GameState::Over => prop_assert!(game.current_piece.is_none()),
                other => prop_assert!(false, "unexpected state {:?}", other),
            }

            prop_assert_eq!(game.snapshot(), game.snapshot());
        }
    }
}
