//! Board module - manages the playfield grid
//!
//! The playfield is 10 columns by 20 visible rows, plus `HIDDEN_ROWS` rows above
//! the top edge where new pieces enter. Coordinates are signed `(row, col)`:
//! rows run from `-HIDDEN_ROWS` (top, hidden) to 19 (bottom), columns from 0 to 9.
//!
//! Storage is a flat row-major array; row `r` lives at backing row `r + HIDDEN_ROWS`.

use crate::game_state::Tetromino;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Backing rows, hidden ones included
const TOTAL_ROWS: usize = (BOARD_HEIGHT + HIDDEN_ROWS) as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * TOTAL_ROWS;

/// Outcome of committing a piece to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitResult {
    /// Part of the piece was still above the visible area; nothing was written.
    pub game_over: bool,
    pub lines_cleared: u8,
}

/// The game board - 10 columns x (2 hidden + 20 visible) rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        if row < -(HIDDEN_ROWS as i8) || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        let backing_row = (row + HIDDEN_ROWS as i8) as usize;
        Some(backing_row * WIDTH + col as usize)
    }

    #[inline(always)]
    fn backing_row(&self, backing: usize) -> &[Cell] {
        &self.cells[backing * WIDTH..(backing + 1) * WIDTH]
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Visible height (hidden rows excluded)
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        match Self::index(row, 0) {
            Some(start) => self.cells[start..start + WIDTH].iter().all(Option::is_some),
            None => false,
        }
    }

    /// Visible row as a slice (`row` in `0..BOARD_HEIGHT`)
    pub fn row(&self, row: i8) -> Option<&[Cell]> {
        if row < 0 || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some(self.backing_row((row + HIDDEN_ROWS as i8) as usize))
    }

    /// Remove `row` and shift every row above it down by one.
    ///
    /// The topmost hidden row comes in empty.
    fn collapse_row(&mut self, row: i8) {
        let Some(start) = Self::index(row, 0) else {
            return;
        };
        let backing = start / WIDTH;

        for r in (1..=backing).rev() {
            let src = (r - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, r * WIDTH);
        }
        self.cells[..WIDTH].fill(None);
    }

    /// Clear every full visible row, bottom to top, and return how many went.
    ///
    /// After a collapse the same row index is scanned again, since the row that
    /// just moved into it may be full as well.
    pub fn clear_full_rows(&mut self) -> u8 {
        let mut cleared = 0u8;
        let mut row = BOARD_HEIGHT as i8 - 1;

        while row >= 0 {
            if self.is_row_full(row) {
                cleared += 1;
                self.collapse_row(row);
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Write a piece into the grid and clear the lines it completes.
    ///
    /// If any occupied cell of the piece is still above row 0 the commit is
    /// refused as game over and the board is left untouched.
    pub fn commit(&mut self, piece: &Tetromino) -> CommitResult {
        if piece.matrix.occupied().any(|(dr, _)| piece.row + dr < 0) {
            return CommitResult {
                game_over: true,
                lines_cleared: 0,
            };
        }

        for (dr, dc) in piece.matrix.occupied() {
            self.set(piece.row + dr, piece.col + dc, Some(piece.kind));
        }

        CommitResult {
            game_over: false,
            lines_cleared: self.clear_full_rows(),
        }
    }

    /// Export the visible rows as piece codes (`0` empty, see [`PieceKind::code`]).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; BOARD_HEIGHT as usize]) {
        for (y, dst) in out.iter_mut().enumerate() {
            let src = self.backing_row(y + HIDDEN_ROWS as usize);
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map_or(0, |k| k.code());
            }
        }
    }

    /// Every backing cell, hidden rows first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
