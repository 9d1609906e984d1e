//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, ConflictEngine, ConflictReport, Grid, Line};
