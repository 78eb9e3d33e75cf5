//! Shape catalog - the seven tetrominoes in their spawn orientation
//!
//! Reference: https://tetris.wiki/SRS (spawn states only; rotation is computed,
//! not tabulated).

use crate::geometry::Matrix;
use crate::types::PieceKind;

const I_SHAPE: Matrix = Matrix::from_grid(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Matrix = Matrix::from_grid(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const L_SHAPE: Matrix = Matrix::from_grid(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const O_SHAPE: Matrix = Matrix::from_grid(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const S_SHAPE: Matrix = Matrix::from_grid(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Matrix = Matrix::from_grid(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const T_SHAPE: Matrix = Matrix::from_grid(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Spawn-orientation matrix for a piece kind
pub fn shape(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::T => T_SHAPE,
    }
}

/// Display color of a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    /// CSS color keyword
    pub fn name(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
        }
    }
}

pub fn color(kind: PieceKind) -> PieceColor {
    match kind {
        PieceKind::I => PieceColor::Cyan,
        PieceKind::O => PieceColor::Yellow,
        PieceKind::T => PieceColor::Purple,
        PieceKind::S => PieceColor::Green,
        PieceKind::Z => PieceColor::Red,
        PieceKind::J => PieceColor::Blue,
        PieceKind::L => PieceColor::Orange,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_is_a_tetromino() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).cell_count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn shape_sizes() {
        assert_eq!(shape(PieceKind::I).size(), 4);
        assert_eq!(shape(PieceKind::O).size(), 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            assert_eq!(shape(kind).size(), 3);
        }
    }

    #[test]
    fn colors_are_distinct() {
        let mut names: Vec<_> = PieceKind::ALL.iter().map(|k| color(*k).name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
        assert_eq!(color(PieceKind::T).name(), "purple");
    }
}
