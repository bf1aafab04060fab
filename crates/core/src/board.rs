//! Board module - the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that locked there. Flat array storage, row-major, no allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows reported by a single scan.
pub const MAX_ROWS: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
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
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision test used by placement.
    ///
    /// Columns outside the well and rows below the floor are blocked. Rows
    /// above the top are open regardless of column contents, so a piece may
    /// rotate or spawn partially above the visible area.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled (any colors)
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> ArrayVec<usize, MAX_ROWS> {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove every full row at once and compact the rest downward.
    ///
    /// Surviving rows keep their relative order; empty rows are prepended at
    /// the top until the height is restored. Returns the number of rows
    /// removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let full = self.full_rows();
        if full.is_empty() {
            return 0;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Bottom-up two-pointer pass; copy_within handles the overlap.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if full.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        full.len()
    }

    /// Write a piece's filled cells into the grid with its kind.
    ///
    /// The caller has already validated the placement. Cells that fall
    /// outside the grid are skipped and reported through the return value.
    pub fn lock_cells(
        &mut self,
        cells: impl IntoIterator<Item = (i8, i8)>,
        kind: PieceKind,
    ) -> bool {
        let mut all_written = true;
        for (x, y) in cells {
            all_written &= self.set(x, y, Some(kind));
        }
        all_written
    }

    /// Write the grid as color codes (0 = empty), for snapshots.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_WIDTH as usize)) {
            for (dst, cell) in row.iter_mut().zip(chunk) {
                *dst = cell.map_or(0, |k| k.code());
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells in row `y`.
    pub fn row_count(&self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Build a board from rows, top to bottom, for scripted setups.
    ///
    /// Panics unless given exactly `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
    pub fn from_rows(rows: &[[Cell; BOARD_WIDTH as usize]]) -> Self {
        assert_eq!(rows.len(), BOARD_HEIGHT as usize);
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        board
    }

    /// Copy of row `y`.
    pub fn row(&self, y: usize) -> [Cell; BOARD_WIDTH as usize] {
        let mut out = [None; BOARD_WIDTH as usize];
        if y < BOARD_HEIGHT as usize {
            let start = y * BOARD_WIDTH as usize;
            out.copy_from_slice(&self.cells[start..start + BOARD_WIDTH as usize]);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
