//! Read-only access to an n×n occupancy grid.
//!
//! The conflict engine never owns or mutates the grid. Whatever stores the
//! pieces implements [`Grid`] and hands the engine a borrow of itself.

use alloc::vec::Vec;

use crate::config::{EMPTY, PIECE};

/// Read-only view of an n×n grid of cells holding 0 (empty) or 1 (piece).
pub trait Grid {
    /// Side length `n` of the grid.
    fn size(&self) -> usize;

    /// Value at (`row`, `col`). Callers only ask for `row, col < size()`.
    fn cell_at(&self, row: usize, col: usize) -> u8;

    /// Returns `true` if (`row`, `col`) holds exactly one piece.
    #[inline]
    fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col) == PIECE
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn cell_at(&self, row: usize, col: usize) -> u8 {
        (**self).cell_at(row, col)
    }
}

/// Rows shorter than the row count read as empty past their end.
impl Grid for [Vec<u8>] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(EMPTY)
    }
}

impl Grid for Vec<Vec<u8>> {
    #[inline]
    fn size(&self) -> usize {
        self.as_slice().size()
    }

    #[inline]
    fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.as_slice().cell_at(row, col)
    }
}

impl<const N: usize> Grid for [[u8; N]; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn cell_at(&self, row: usize, col: usize) -> u8 {
        self[row][col]
    }
}
