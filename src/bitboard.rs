//! Packed occupancy for small fixed-size boards.
//!
//! `BitBoard<T, N>` keeps an `N×N` placement in the low `N*N` bits of `T`,
//! row-major. Every constructor checks that `N*N` fits in `T`, so the shifts
//! in the accessors stay in range.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{EMPTY, PIECE};
use crate::grid::Grid;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N*N` cells need more bits than `T` holds.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is not below `N`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => write!(
                f,
                "a {}x{} board needs {} bits but only {} are available",
                n,
                n,
                n * n,
                capacity
            ),
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "({}, {}) is off the bitboard", row, col)
            }
        }
    }
}

/// An N×N placement of pieces packed into the unsigned integer `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: PrimInt + Unsigned, const N: usize> {
    bits: T,
}

impl<T: PrimInt + Unsigned, const N: usize> BitBoard<T, N> {
    /// Empty board, or `SizeTooLarge` when `N*N` exceeds the bits of `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if N * N > capacity {
            return Err(BitBoardError::SizeTooLarge { n: N, capacity });
        }
        Ok(BitBoard { bits: T::zero() })
    }

    /// Board with a piece on every `(row, col)` of `cells`.
    pub fn from_iter<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        cells.into_iter().try_fold(Self::try_new()?, |mut board, (r, c)| {
            board.set(r, c)?;
            Ok(board)
        })
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(self.bit(Self::offset(row, col)?))
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::mask(row, col)?;
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits ^ Self::mask(row, col)?;
        Ok(())
    }

    #[inline]
    fn offset(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row < N && col < N {
            Ok(row * N + col)
        } else {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        }
    }

    #[inline]
    fn mask(row: usize, col: usize) -> Result<T, BitBoardError> {
        Ok(T::one() << Self::offset(row, col)?)
    }

    #[inline]
    fn bit(&self, offset: usize) -> bool {
        !((self.bits >> offset) & T::one()).is_zero()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Grid for BitBoard<T, N> {
    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn cell_at(&self, row: usize, col: usize) -> u8 {
        if self.bit(row * N + col) {
            PIECE
        } else {
            EMPTY
        }
    }
}

/// Packs a [`Board`] whose side is exactly `N`.
impl<T: PrimInt + Unsigned, const N: usize> TryFrom<&Board> for BitBoard<T, N> {
    type Error = BoardError;

    fn try_from(board: &Board) -> Result<Self, Self::Error> {
        if board.size() != N {
            return Err(BoardError::SizeMismatch {
                expected: N,
                found: board.size(),
            });
        }
        Ok(Self::from_iter(board.pieces())?)
    }
}

impl<T: PrimInt + Unsigned, const N: usize> From<&BitBoard<T, N>> for Board {
    fn from(bits: &BitBoard<T, N>) -> Self {
        let mut board = Board::new(N);
        for r in 0..N {
            for c in 0..N {
                if bits.is_occupied(r, c) {
                    board.place(r, c);
                }
            }
        }
        board
    }
}

impl<T: PrimInt + Unsigned, const N: usize> fmt::Display for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..N {
                let ch = if self.bit(r * N + c) { 'Q' } else { '.' };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
