//! Wall kick data
//!
//! When a rotation collides in place, these horizontal offsets are tried in
//! order at the same row. The first legal one wins.

/// Column offsets, in the order they are attempted
pub const WALL_KICKS: [i32; 4] = [-1, 1, -2, 2];

/// Offsets to try for a rotation attempt, starting with the unkicked position
pub fn candidate_offsets() -> impl Iterator<Item = i32> {
    std::iter::once(0).chain(WALL_KICKS)
}
