//! Shape module - tetromino matrices and the clockwise rotation transform
//!
//! A shape is a small rectangular boolean matrix. Orientation lives in the
//! matrix itself: rotating produces a new matrix rather than bumping an
//! orientation index, so there are no per-kind rotation tables.
//!
//! Storage is a fixed 4x4 array, so shapes are `Copy` and rotation never
//! allocates.

use crate::types::PieceKind;

/// Largest supported matrix side.
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular boolean matrix, `height` rows by `width` columns.
///
/// Cells outside `width`/`height` are always `false`, which keeps derived
/// equality meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if the rows are empty, ragged, or exceed 4x4; shapes come from
    /// the fixed catalog or from tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&height) && (1..=MAX_SHAPE_DIM).contains(&width),
            "shape must be between 1x1 and 4x4"
        );
        assert!(rows.iter().all(|r| r.len() == width), "shape rows must be equal length");

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                bits[y][x] = v != 0;
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            bits,
        }
    }

    /// Spawn orientation for a catalog kind.
    pub fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (`x`, `y`) is filled. Out of range is empty.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.bits[y][x]
    }

    /// Offsets `(dx, dy)` of the filled cells, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.bits[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// 90° clockwise rotation.
    ///
    /// The result is `width` rows by `height` columns, with
    /// `new[i][j] = old[old_height - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Self {
        let old_h = self.height as usize;
        let new_h = self.width as usize;
        let new_w = old_h;

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in bits.iter_mut().enumerate().take(new_h) {
            for (j, cell) in row.iter_mut().enumerate().take(new_w) {
                *cell = self.bits[old_h - 1 - j][i];
            }
        }

        Self {
            width: new_w as u8,
            height: new_h as u8,
            bits,
        }
    }
}
