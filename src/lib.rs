#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
pub mod config;
mod conflict;
pub mod grid;
mod line;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use conflict::*;
pub use grid::Grid;
pub use line::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
