//! # Slider Puzzle Solver Library
//!
//! This library models the N×N sliding-tile puzzle (8-puzzle, 15-puzzle, ...)
//! and finds shortest solutions with an A* search.
//!
//! It is used by two binaries:
//! - `solver`: Reads a board file and prints a shortest solution, or reports
//!   that none exists.
//! - `batch_solver`: Generates seeded random boards and solves them in bulk,
//!   reporting moves and search effort.
//!
//! ## Modules
//! - `board`: The immutable `Board`, its heuristics (`hamming`, `manhattan`),
//!   goal test, move generation (`neighbors`) and the parity-flipping `twin`.
//! - `solver`: The `Solver`, which searches a board and its twin from one
//!   priority queue to either find a shortest solution or prove there is none.
//! - `utils`: Parsing boards from text.
//! - `error`: `BoardError`, returned when input does not describe a valid board.

pub mod board;
pub mod error;
pub mod solver;
pub mod utils;

pub use crate::board::Board;
pub use crate::error::BoardError;
pub use crate::solver::{SearchStats, Solver};
