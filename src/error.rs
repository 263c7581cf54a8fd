//! Errors raised while building a `Board`.

use thiserror::Error;

/// Reasons a tile arrangement cannot become a `Board`.
///
/// Every variant is a precondition violation: the input does not describe a
/// square grid holding each of `0..N²` exactly once. An unsolvable but
/// well-formed board is *not* an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("board dimension must be at least 2, got {dimension}")]
    DimensionTooSmall { dimension: usize },

    #[error("board dimension {dimension} is too large")]
    DimensionTooLarge { dimension: usize },

    #[error("row {row} has {got} tiles, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("expected {expected} tiles, got {got}")]
    WrongTileCount { expected: usize, got: usize },

    #[error("tile {tile} is out of range (max {max})")]
    TileOutOfRange { tile: u32, max: u32 },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },

    #[error("invalid token '{token}' on line {line}")]
    Parse { line: usize, token: String },

    #[error("input is empty, expected the board dimension first")]
    MissingDimension,
}
