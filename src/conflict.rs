//! Conflict detection for rook and queen placements.
//!
//! [`ConflictEngine`] borrows a [`Grid`] and answers whether a line, or the
//! whole board, holds more than one piece. It keeps no state of its own, so
//! every query re-reads the grid.

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::grid::Grid;
use crate::line::{major_diagonal_key, minor_diagonal_key, Line};

/// Summary of every conflict on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ConflictReport {
    pub size: usize,
    pub rows: bool,
    pub columns: bool,
    pub major_diagonals: bool,
    pub minor_diagonals: bool,
    pub rooks: bool,
    pub queens: bool,
    /// Lines holding more than one piece, in [`Line::all`] order.
    pub conflicting_lines: Vec<Line>,
}

/// Read-only conflict queries over a borrowed grid.
#[derive(Debug)]
pub struct ConflictEngine<'a, G: Grid + ?Sized> {
    grid: &'a G,
}

impl<G: Grid + ?Sized> Clone for ConflictEngine<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Grid + ?Sized> Copy for ConflictEngine<'_, G> {}

impl<'a, G: Grid + ?Sized> ConflictEngine<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Self { grid }
    }

    /// Side length of the underlying grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns `true` if `0 <= row < n` and `0 <= col < n`.
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size();
        0 <= row && (row as usize) < n && 0 <= col && (col as usize) < n
    }

    /// Returns `true` if `line` holds more than one piece.
    ///
    /// Lines that miss the grid hold no cells and never conflict.
    pub fn has_conflict_on(&self, line: Line) -> bool {
        let conflict = line
            .cells(self.size())
            .filter(|&(r, c)| self.grid.is_occupied(r, c))
            .nth(1)
            .is_some();
        if conflict {
            log::trace!("conflict on {}", line);
        }
        conflict
    }

    /// Returns `true` if row `row` holds more than one piece.
    ///
    /// `row` must be inside the grid; otherwise `BoardError::OutOfRange`.
    pub fn has_row_conflict_at(&self, row: usize) -> Result<bool, BoardError> {
        if row >= self.size() {
            return Err(BoardError::OutOfRange { row, col: 0 });
        }
        Ok(self.has_conflict_on(Line::Row(row)))
    }

    /// Returns `true` if column `col` holds more than one piece.
    ///
    /// `col` must be inside the grid; otherwise `BoardError::OutOfRange`.
    pub fn has_col_conflict_at(&self, col: usize) -> Result<bool, BoardError> {
        if col >= self.size() {
            return Err(BoardError::OutOfRange { row: 0, col });
        }
        Ok(self.has_conflict_on(Line::Column(col)))
    }

    /// Returns `true` if the diagonal with `col - row == key` holds more than
    /// one piece. Any key is accepted.
    pub fn has_major_diagonal_conflict_at(&self, key: isize) -> bool {
        self.has_conflict_on(Line::MajorDiagonal(key))
    }

    /// Returns `true` if the diagonal with `col + row == key` holds more than
    /// one piece. Any key is accepted.
    pub fn has_minor_diagonal_conflict_at(&self, key: isize) -> bool {
        self.has_conflict_on(Line::MinorDiagonal(key))
    }

    pub fn has_any_row_conflicts(&self) -> bool {
        (0..self.size()).any(|r| self.has_conflict_on(Line::Row(r)))
    }

    pub fn has_any_col_conflicts(&self) -> bool {
        (0..self.size()).any(|c| self.has_conflict_on(Line::Column(c)))
    }

    /// Sweeps keys `-(n-1)..=n-1`.
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        let last = self.size() as isize - 1;
        (-last..=last).any(|d| self.has_major_diagonal_conflict_at(d))
    }

    /// Sweeps keys `0..=2n-2`.
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        let last = 2 * (self.size() as isize - 1);
        (0..=last).any(|s| self.has_minor_diagonal_conflict_at(s))
    }

    /// Two pieces share a row or a column.
    pub fn has_any_rook_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// Two pieces share a row, a column or a diagonal.
    pub fn has_any_queen_conflicts(&self) -> bool {
        self.has_any_rook_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// Returns `true` if any of the four lines through (`row`, `col`) holds
    /// more than one piece. The cell itself need not be occupied.
    pub fn has_any_queen_conflicts_at_point(
        &self,
        row: usize,
        col: usize,
    ) -> Result<bool, BoardError> {
        let n = self.size();
        if row >= n || col >= n {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.has_row_conflict_at(row)?
            || self.has_col_conflict_at(col)?
            || self.has_major_diagonal_conflict_at(major_diagonal_key(row, col))
            || self.has_minor_diagonal_conflict_at(minor_diagonal_key(row, col)))
    }

    /// Every line of the grid that holds more than one piece.
    pub fn conflicting_lines(&self) -> Vec<Line> {
        Line::all(self.size())
            .filter(|&line| self.has_conflict_on(line))
            .collect()
    }

    /// Evaluates every aggregate at once.
    pub fn report(&self) -> ConflictReport {
        let conflicting_lines = self.conflicting_lines();
        let any = |pred: fn(&Line) -> bool| conflicting_lines.iter().any(pred);
        let rows = any(|l| matches!(l, Line::Row(_)));
        let columns = any(|l| matches!(l, Line::Column(_)));
        let major_diagonals = any(|l| matches!(l, Line::MajorDiagonal(_)));
        let minor_diagonals = any(|l| matches!(l, Line::MinorDiagonal(_)));
        ConflictReport {
            size: self.size(),
            rows,
            columns,
            major_diagonals,
            minor_diagonals,
            rooks: rows || columns,
            queens: rows || columns || major_diagonals || minor_diagonals,
            conflicting_lines,
        }
    }
}
