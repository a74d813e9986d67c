//! Scoring

/// Points per row gained by a soft drop
pub const SOFT_DROP_POINTS: u64 = 1;

/// Points for clearing 0..=4 rows with one placement
const LINE_CLEAR_TABLE: [u64; 5] = [0, 100, 300, 500, 800];

/// Points awarded for clearing `lines` rows at once.
/// Past the table (only possible on tall custom pieces) it is linear.
pub fn line_clear_points(lines: usize) -> u64 {
    LINE_CLEAR_TABLE
        .get(lines)
        .copied()
        .unwrap_or(lines as u64 * 100)
}

/// Score tracking. Every counter only ever goes up until a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
    /// Pieces locked into the board
    pub pieces: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placement that cleared `lines` rows; returns the points added
    pub fn add_clear(&mut self, lines: usize) -> u64 {
        let points = line_clear_points(lines);
        self.points += points;
        self.lines += lines as u32;
        self.pieces += 1;
        points
    }

    /// Add score for one row of soft drop
    pub fn add_soft_drop(&mut self) {
        self.points += SOFT_DROP_POINTS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 300);
        assert_eq!(line_clear_points(3), 500);
        assert_eq!(line_clear_points(4), 800);
    }

    #[test]
    fn test_beyond_table_is_linear() {
        assert_eq!(line_clear_points(5), 500);
        assert_eq!(line_clear_points(7), 700);
    }

    #[test]
    fn test_tetris() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(4), 800);
        assert_eq!(score.points, 800);
        assert_eq!(score.lines, 4);
        assert_eq!(score.pieces, 1);
    }

    #[test]
    fn test_soft_drop() {
        let mut score = Score::new();
        score.add_soft_drop();
        score.add_soft_drop();
        assert_eq!(score.points, 2);
        assert_eq!(score.lines, 0);
    }

    #[test]
    fn test_no_clear_counts_piece_only() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(0), 0);
        assert_eq!(score, Score { points: 0, lines: 0, pieces: 1 });
    }
}
