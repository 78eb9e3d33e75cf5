//! Geometry module - piece matrices, rotation and placement checks
//!
//! A piece is described by a square boolean matrix (2x2, 3x3 or 4x4) whose
//! top-left corner sits at a `(row, col)` offset on the board. Rotation is a
//! pure function on matrices; validity is checked against a [`Board`].

use crate::board::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Largest matrix side used by any shape (the I piece).
pub const MAX_MATRIX_SIZE: usize = 4;

/// Square occupancy matrix, stored in a fixed 4x4 array so it stays `Copy`.
///
/// Cells outside `size x size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: u8,
    cells: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl Matrix {
    /// Build a matrix from a 0/1 grid. Entries outside `size` are ignored.
    pub const fn from_grid(size: u8, grid: [[u8; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE]) -> Self {
        assert!(size >= 1 && size as usize <= MAX_MATRIX_SIZE);
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        let mut r = 0;
        while r < size as usize {
            let mut c = 0;
            while c < size as usize {
                cells[r][c] = grid[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { size, cells }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at `(row, col)` is occupied. Out-of-range cells are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize && self.cells[row][col]
    }

    /// Occupied cells as `(row, col)` offsets from the matrix's top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |r| {
            (0..n).filter_map(move |c| self.cells[r][c].then_some((r as i8, c as i8)))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// Rotate 90° clockwise: `result[i][j] = self[n - 1 - j][i]`.
    pub fn rotate_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (i, row) in cells.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - j][i];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

/// Free-function form of [`Matrix::rotate_cw`].
pub fn rotate_cw(matrix: &Matrix) -> Matrix {
    matrix.rotate_cw()
}

/// Check whether `matrix` can sit with its top-left corner at `(row, col)`.
///
/// Every occupied cell must land inside the side walls and above the floor.
/// Cells inside the board (hidden rows included) must also be empty. Cells
/// above the hidden rows are not checked against the board.
pub fn is_valid_placement(matrix: &Matrix, row: i8, col: i8, board: &Board) -> bool {
    for (dr, dc) in matrix.occupied() {
        let r = row + dr;
        let c = col + dc;

        if c < 0 || c >= BOARD_WIDTH as i8 || r >= BOARD_HEIGHT as i8 {
            return false;
        }

        if r >= -(HIDDEN_ROWS as i8) && board.is_occupied(r, c) {
            return false;
        }
    }

    true
}
