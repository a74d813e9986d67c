//! Piece catalog: the seven templates, their matrices and colors

use ratatui::style::Color;

/// Largest bounding box any template (or its rotation) needs
pub const MAX_SHAPE: usize = 4;

/// The 7 piece kinds. Discriminants are the stable identifiers stored in board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1, // Cyan - long bar
    O = 2, // Yellow - square
    T = 3, // Purple
    S = 4, // Green
    Z = 5, // Red
    J = 6, // Blue
    L = 7, // Orange
}

impl PieceKind {
    /// All kinds in identifier order
    pub fn all() -> [PieceKind; 7] {
        [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ]
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<PieceKind> {
        Self::all().into_iter().find(|kind| kind.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color tag
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Rgb(234, 88, 12), // Orange
        }
    }

    /// The template matrix, in spawn orientation
    pub fn template(self) -> Shape {
        match self {
            PieceKind::I => Shape::from_rows(&["####"]),
            PieceKind::O => Shape::from_rows(&["##", "##"]),
            PieceKind::T => Shape::from_rows(&[".#.", "###"]),
            PieceKind::S => Shape::from_rows(&[".##", "##."]),
            PieceKind::Z => Shape::from_rows(&["##.", ".##"]),
            PieceKind::J => Shape::from_rows(&["#..", "###"]),
            PieceKind::L => Shape::from_rows(&["..#", "###"]),
        }
    }

    /// The square never rotates
    pub fn rotates(self) -> bool {
        self != PieceKind::O
    }
}

/// An occupancy matrix, `height` rows by `width` columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from row strings where `#` marks a filled cell.
    /// Rows wider or taller than `MAX_SHAPE` are truncated.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len().min(MAX_SHAPE);
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE);
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, ch) in row.chars().take(width).enumerate() {
                cells[r][c] = ch == '#';
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Filled cells as (row, col) offsets within the matrix
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |r| {
            (0..self.width).filter_map(move |c| self.cells[r][c].then_some((r, c)))
        })
    }

    /// 90° clockwise: transpose, then reverse each row
    pub fn rotated_cw(&self) -> Shape {
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for r in 0..self.width {
            for c in 0..self.height {
                cells[r][c] = self.cells[self.height - 1 - c][r];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in PieceKind::all() {
            assert_eq!(PieceKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PieceKind::from_id(0), None);
        assert_eq!(PieceKind::from_id(8), None);
        assert_eq!(PieceKind::O.id(), 2);
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::all() {
            assert_eq!(kind.template().filled().count(), 4, "{}", kind.name());
        }
    }

    #[test]
    fn test_rotate_t() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = PieceKind::T.template().rotated_cw();
        assert_eq!(rotated, Shape::from_rows(&["#.", "##", "#."]));
    }

    #[test]
    fn test_rotate_i_is_rectangular() {
        let rotated = PieceKind::I.template().rotated_cw();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
        assert_eq!(rotated.filled().count(), 4);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::all() {
            let shape = kind.template();
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape);
        }
    }

    #[test]
    fn test_only_square_is_exempt_from_rotation() {
        let exempt: Vec<_> = PieceKind::all()
            .into_iter()
            .filter(|kind| !kind.rotates())
            .collect();
        assert_eq!(exempt, vec![PieceKind::O]);
    }
}
