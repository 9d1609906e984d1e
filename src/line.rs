//! Lines of an n×n grid: rows, columns and both diagonal directions.

use core::fmt;
use core::iter::FusedIterator;

/// One line of attack on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right diagonal with key `c - r`.
    MajorDiagonal(isize),
    /// Top-right to bottom-left diagonal with key `c + r`.
    MinorDiagonal(isize),
}

/// Key of the major diagonal through (`row`, `col`).
#[inline]
pub const fn major_diagonal_key(row: usize, col: usize) -> isize {
    col as isize - row as isize
}

/// Key of the minor diagonal through (`row`, `col`).
#[inline]
pub const fn minor_diagonal_key(row: usize, col: usize) -> isize {
    (col + row) as isize
}

impl Line {
    /// The four lines passing through (`row`, `col`), in row, column, major,
    /// minor order.
    pub const fn through(row: usize, col: usize) -> [Line; 4] {
        [
            Line::Row(row),
            Line::Column(col),
            Line::MajorDiagonal(major_diagonal_key(row, col)),
            Line::MinorDiagonal(minor_diagonal_key(row, col)),
        ]
    }

    /// Every line of an `n`×`n` grid: rows, columns, major diagonals
    /// `-(n-1)..=n-1`, then minor diagonals `0..=2n-2`.
    pub fn all(n: usize) -> impl Iterator<Item = Line> {
        let last = n as isize - 1;
        (0..n)
            .map(Line::Row)
            .chain((0..n).map(Line::Column))
            .chain((-last..=last).map(Line::MajorDiagonal))
            .chain((0..=2 * last).map(Line::MinorDiagonal))
    }

    /// Returns `true` if this line has at least one cell on an `n`×`n` grid.
    pub fn exists_on(self, n: usize) -> bool {
        self.cells(n).len() > 0
    }

    /// In-bounds cells of this line on an `n`×`n` grid.
    ///
    /// The walk starts at the cell where the line enters the grid and steps
    /// along it, so keys that miss the grid produce an empty iterator.
    pub fn cells(self, n: usize) -> LineCells {
        let size = n as isize;
        match self {
            Line::Row(r) if r < n => LineCells::new(r, 0, n, Step::Right),
            Line::Column(c) if c < n => LineCells::new(0, c, n, Step::Down),
            Line::MajorDiagonal(d) if d.unsigned_abs() < n => {
                let offset = d.unsigned_abs();
                if d >= 0 {
                    LineCells::new(0, offset, n - offset, Step::DownRight)
                } else {
                    LineCells::new(offset, 0, n - offset, Step::DownRight)
                }
            }
            Line::MinorDiagonal(s) if 0 <= s && s <= 2 * (size - 1) => {
                let s = s as usize;
                if s < n {
                    LineCells::new(0, s, s + 1, Step::DownLeft)
                } else {
                    LineCells::new(s - (n - 1), n - 1, 2 * n - 1 - s, Step::DownLeft)
                }
            }
            _ => LineCells::EMPTY,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
            Line::MajorDiagonal(d) => write!(f, "major diagonal {}", d),
            Line::MinorDiagonal(s) => write!(f, "minor diagonal {}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Right,
    Down,
    DownRight,
    DownLeft,
}

/// Iterator over the in-bounds `(row, col)` cells of a [`Line`].
#[derive(Debug, Clone)]
pub struct LineCells {
    row: usize,
    col: usize,
    remaining: usize,
    step: Step,
}

impl LineCells {
    const EMPTY: Self = LineCells {
        row: 0,
        col: 0,
        remaining: 0,
        step: Step::Right,
    };

    #[inline]
    const fn new(row: usize, col: usize, remaining: usize, step: Step) -> Self {
        LineCells {
            row,
            col,
            remaining,
            step,
        }
    }
}

impl Iterator for LineCells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = (self.row, self.col);
        self.remaining -= 1;
        // the final cell may sit on column 0 of a minor diagonal
        if self.remaining > 0 {
            match self.step {
                Step::Right => self.col += 1,
                Step::Down => self.row += 1,
                Step::DownRight => {
                    self.row += 1;
                    self.col += 1;
                }
                Step::DownLeft => {
                    self.row += 1;
                    self.col -= 1;
                }
            }
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineCells {}
impl FusedIterator for LineCells {}
