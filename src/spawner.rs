//! Piece spawner
//!
//! Every spawn picks a kind uniformly at random. There is no bag and no
//! protection against repeats or droughts.

use crate::piece::Piece;
use crate::tetromino::PieceKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
enum Source {
    Random(ChaCha8Rng),
    /// Fixed cycle of kinds, for reproducible scenarios
    Sequence { kinds: Vec<PieceKind>, next: usize },
}

/// Produces new active pieces at the top-center of the board
#[derive(Debug, Clone)]
pub struct Spawner {
    source: Source,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Same seed, same sequence of kinds
    pub fn with_seed(seed: u64) -> Self {
        Self {
            source: Source::Random(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Deal `kinds` in order, wrapping around. An empty list falls back to `T`.
    pub fn from_sequence(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        Self {
            source: Source::Sequence {
                kinds: kinds.into_iter().collect(),
                next: 0,
            },
        }
    }

    /// Pick the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Random(rng) => {
                let all = PieceKind::all();
                all[rng.gen_range(0..all.len())]
            }
            Source::Sequence { kinds, next } => {
                let Some(&kind) = kinds.get(*next % kinds.len().max(1)) else {
                    return PieceKind::T;
                };
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }

    /// A fresh piece positioned for a board `board_width` columns wide
    pub fn spawn_piece(&mut self, board_width: usize) -> Piece {
        Piece::new(self.next_kind(), board_width)
    }
}
