//! Common types for the conflict engine: board errors.

use crate::bitboard::BitBoardError;

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Packing into a [`crate::BitBoard`] failed.
    BitBoardError(BitBoardError),
    /// Row or column index lies outside [0..n).
    OutOfRange { row: usize, col: usize },
    /// Board side differs from the fixed size of the target.
    SizeMismatch { expected: usize, found: usize },
    /// Literal matrix has a row whose length differs from the row count.
    NotSquare { row: usize, len: usize, n: usize },
    /// Literal matrix holds a value other than 0 or 1.
    InvalidCell { row: usize, col: usize, value: u8 },
    /// Cell text could not be read as 0 or 1.
    ParseCell { row: usize, col: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "Cannot pack board: {}", e),
            BoardError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::SizeMismatch { expected, found } => write!(
                f,
                "Board is {}x{} but {}x{} was expected",
                found, found, expected, expected
            ),
            BoardError::NotSquare { row, len, n } => write!(
                f,
                "Row {} has {} cells but the board has {} rows",
                row, len, n
            ),
            BoardError::InvalidCell { row, col, value } => write!(
                f,
                "Cell ({}, {}) holds {}, expected 0 or 1",
                row, col, value
            ),
            BoardError::ParseCell { row, col } => {
                write!(f, "Cell ({}, {}) is not 0 or 1", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
