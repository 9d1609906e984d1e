//! Owned n×n board: the store that holds pieces and hands out conflict engines.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::{is_cell_value, CELL_SEPARATORS, EMPTY, PIECE, ROW_SEPARATORS};
use crate::conflict::ConflictEngine;
use crate::grid::Grid;

/// Square matrix of cells, each 0 (empty) or 1 (piece).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    rows: Vec<Vec<u8>>,
}

impl Board {
    /// Create an empty `n`×`n` board.
    pub fn new(n: usize) -> Self {
        Board {
            rows: vec![vec![EMPTY; n]; n],
        }
    }

    /// Create a board from a literal matrix. `n` is the number of rows; every
    /// row must have `n` cells holding 0 or 1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let n = rows.len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                log::debug!("rejecting board: row {} has {} cells, expected {}", r, row.len(), n);
                return Err(BoardError::NotSquare {
                    row: r,
                    len: row.len(),
                    n,
                });
            }
            if let Some(c) = row.iter().position(|&v| !is_cell_value(v)) {
                log::debug!("rejecting board: cell ({}, {}) = {}", r, c, row[c]);
                return Err(BoardError::InvalidCell {
                    row: r,
                    col: c,
                    value: row[c],
                });
            }
        }
        Ok(Board { rows })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Immutable view of the rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Whether a piece sits at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.rows[row][col] == PIECE)
    }

    /// Flip (row, col) between empty and occupied.
    pub fn toggle_piece(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        let cell = &mut self.rows[row][col];
        *cell = if *cell == PIECE { EMPTY } else { PIECE };
        log::trace!("toggled ({}, {}) to {}", row, col, cell);
        Ok(())
    }

    /// Marks (row, col) occupied. Callers have already checked the bounds.
    pub(crate) fn place(&mut self, row: usize, col: usize) {
        self.rows[row][col] = PIECE;
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v == PIECE)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Conflict queries against the current contents of the board.
    pub fn conflicts(&self) -> ConflictEngine<'_, Self> {
        ConflictEngine::new(self)
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        let n = self.size();
        if row >= n || col >= n {
            Err(BoardError::OutOfRange { row, col })
        } else {
            Ok(())
        }
    }
}

impl Grid for Board {
    #[inline]
    fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

/// Parses `"1,0,0; 0,1,0; 0,0,1"`: rows split on `;` or newlines, cells on
/// commas or whitespace. Blank rows are skipped.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.split(ROW_SEPARATORS).filter(|l| !l.trim().is_empty()) {
            let r = rows.len();
            let row = line
                .split(CELL_SEPARATORS)
                .filter(|cell| !cell.trim().is_empty())
                .enumerate()
                .map(|(c, cell)| match cell.trim() {
                    "0" => Ok(EMPTY),
                    "1" => Ok(PIECE),
                    _ => Err(BoardError::ParseCell { row: r, col: c }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            if r + 1 < self.rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
