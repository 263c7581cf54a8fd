//! Board representation for the sliding-tile puzzle.
//!
//! This module defines `Board`, an immutable N×N arrangement of numbered tiles
//! and one blank (encoded as `0`). A board knows how far it is from the goal
//! (`hamming`, `manhattan`), whether it *is* the goal, which boards are one
//! slide away (`neighbors`), and how to build its parity-flipped `twin`.
//!
//! Boards are never mutated. Every transformation returns a new `Board`.
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// The tile value used for the blank cell.
pub const BLANK: u32 = 0;

/// One configuration of an N×N sliding-tile puzzle.
///
/// Tiles are stored in row-major order. Two boards are equal iff their tile
/// sequences are identical, no matter how they were constructed.
///
/// # Examples
/// ```
/// use slider_solver::board::Board;
///
/// let board = Board::from_grid(&[vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]).unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.hamming(), 5);
/// assert_eq!(board.manhattan(), 10);
/// assert!(!board.is_goal());
/// assert_eq!(board.neighbors().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Vec<u32>,
}

impl Board {
    /// Builds a board from an N×N grid where `rows[r][c]` is the tile in row `r`,
    /// column `c`.
    ///
    /// # Returns
    /// * `Ok(Board)` if the grid is square, `N >= 2`, and holds each of `0..N²`
    ///   exactly once.
    /// * `Err(BoardError)` describing the first violation found otherwise.
    pub fn from_grid(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let dimension = rows.len();
        let (size, _) = tile_bounds(dimension)?;

        let mut tiles = Vec::with_capacity(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(BoardError::NotSquare {
                    row: r,
                    expected: dimension,
                    got: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from a flat, row-major tile sequence of length `dimension²`.
    ///
    /// # Examples
    /// ```
    /// use slider_solver::board::Board;
    ///
    /// let board = Board::from_tiles(2, vec![1, 2, 3, 0]).unwrap();
    /// assert!(board.is_goal());
    ///
    /// assert!(Board::from_tiles(2, vec![1, 1, 3, 0]).is_err());
    /// assert!(Board::from_tiles(2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        let (size, max) = tile_bounds(dimension)?;
        if tiles.len() != size {
            return Err(BoardError::WrongTileCount {
                expected: size,
                got: tiles.len(),
            });
        }

        // N² in-range values with no repeats covers every value, the blank included.
        let mut seen = vec![false; size];
        for &tile in &tiles {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if seen[tile as usize] {
                return Err(BoardError::DuplicateTile { tile });
            }
            seen[tile as usize] = true;
        }

        Ok(Board { dimension, tiles })
    }

    /// Returns the goal board of the given dimension: `1..N²-1` in order, blank last.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        let (_, max) = tile_bounds(dimension)?;
        let mut tiles: Vec<u32> = (1..=max).collect();
        tiles.push(BLANK);
        Ok(Board { dimension, tiles })
    }

    /// Creates a board whose tiles are a uniform random permutation.
    ///
    /// The same `seed` always produces the same board. Roughly half of the
    /// generated boards are unsolvable.
    pub fn new_random_with_seed(dimension: usize, seed: u64) -> Result<Self, BoardError> {
        let mut board = Self::goal(dimension)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        board.tiles.shuffle(&mut rng);
        Ok(board)
    }

    /// Creates a solvable board by sliding `steps` random tiles starting from
    /// the goal, never immediately undoing the previous slide.
    ///
    /// The shortest solution of the result is at most `steps` moves long.
    ///
    /// # Examples
    /// ```
    /// use slider_solver::board::Board;
    ///
    /// let a = Board::scrambled_with_seed(3, 12, 7).unwrap();
    /// let b = Board::scrambled_with_seed(3, 12, 7).unwrap();
    /// assert_eq!(a, b);
    /// assert!(a.manhattan() <= 12);
    /// ```
    pub fn scrambled_with_seed(
        dimension: usize,
        steps: usize,
        seed: u64,
    ) -> Result<Self, BoardError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut previous: Option<Board> = None;
        let mut current = Self::goal(dimension)?;

        for _ in 0..steps {
            let candidates: Vec<Board> = current
                .neighbors()
                .into_iter()
                .filter(|n| previous.as_ref() != Some(n))
                .collect();
            let Some(next) = candidates.choose(&mut rng).cloned() else {
                break;
            };
            previous = Some(std::mem::replace(&mut current, next));
        }

        Ok(current)
    }

    /// Board dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `dimension()`.
    pub fn tile(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.dimension && c < self.dimension, "({}, {}) is off the board", r, c);
        self.tiles[r * self.dimension + c]
    }

    /// The tiles in row-major order.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Linear index of the blank cell.
    pub fn blank_index(&self) -> usize {
        // Construction guarantees exactly one blank.
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or(self.tiles.len() - 1)
    }

    /// The tiles as an N×N grid, suitable for `Board::from_grid`.
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        self.tiles
            .chunks(self.dimension)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Number of tiles out of place, the blank excluded.
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != BLANK && tile as usize != i + 1)
            .count() as u32
    }

    /// Sum of the city-block distances between each tile and its goal cell,
    /// the blank excluded.
    ///
    /// Never overestimates the number of moves left, and changes by exactly one
    /// per slide, which is what the search relies on.
    pub fn manhattan(&self) -> u32 {
        let n = self.dimension;
        let mut distance = 0;

        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == BLANK || tile as usize == i + 1 {
                continue;
            }
            let goal = tile as usize - 1;
            distance += (i / n).abs_diff(goal / n) + (i % n).abs_diff(goal % n);
        }

        distance as u32
    }

    /// Is this the goal board?
    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[..last]
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile as usize == i + 1)
    }

    /// Returns the board obtained by swapping two adjacent non-blank tiles of
    /// the same row.
    ///
    /// The first two cells of the first row are used unless one of them is the
    /// blank, in which case the last two cells of the last row are used. A board
    /// and its twin have opposite solvability, and `b.twin().twin() == b`.
    pub fn twin(&self) -> Board {
        let (a, b) = if self.tiles[0] == BLANK || self.tiles[1] == BLANK {
            let size = self.tiles.len();
            (size - 2, size - 1)
        } else {
            (0, 1)
        };
        self.swapped(a, b)
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// Results are ordered: the tile above the blank, below, left, then right,
    /// skipping those off the edge. Between 2 and 4 boards are returned.
    pub fn neighbors(&self) -> Vec<Board> {
        let n = self.dimension;
        let blank = self.blank_index();
        let (row, col) = (blank / n, blank % n);

        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push(self.swapped(blank, blank - n));
        }
        if row + 1 < n {
            neighbors.push(self.swapped(blank, blank + n));
        }
        if col > 0 {
            neighbors.push(self.swapped(blank, blank - 1));
        }
        if col + 1 < n {
            neighbors.push(self.swapped(blank, blank + 1));
        }
        neighbors
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Board {
            dimension: self.dimension,
            tiles,
        }
    }
}

/// Returns `(N², N² - 1)` for a dimension whose tile count fits in a `u32`.
fn tile_bounds(dimension: usize) -> Result<(usize, u32), BoardError> {
    if dimension < 2 {
        return Err(BoardError::DimensionTooSmall { dimension });
    }
    let size = dimension
        .checked_mul(dimension)
        .and_then(|size| u32::try_from(size).ok())
        .ok_or(BoardError::DimensionTooLarge { dimension })?;
    Ok((size as usize, size - 1))
}

impl fmt::Display for Board {
    /// Renders the dimension on its own line, then one line per row with each
    /// tile right-aligned in two columns and followed by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension) {
            for tile in row {
                write!(f, "{:2} ", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
