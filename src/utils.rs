use crate::board::Board;
use crate::error::BoardError;

/// Parses a board in the puzzle file format: the dimension N followed by N²
/// tiles in row-major order, all whitespace separated.
///
/// Line breaks are not significant, so a board may be written on one line or
/// as a dimension line followed by N rows.
///
/// # Returns
/// * `Ok(Board)` if the text holds a valid board.
/// * `Err(BoardError)` if the text is empty (`MissingDimension`), a token is not
///   a non-negative integer (`Parse`, with its 1-based line), or the tiles
///   break a board invariant.
///
/// # Examples
/// ```
/// use slider_solver::utils::board_from_str;
///
/// let board = board_from_str("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.tile(0, 1), 1);
///
/// assert!(board_from_str("").is_err());
/// assert!(board_from_str("2\n1 2\n3 x\n").is_err());
/// ```
pub fn board_from_str(text: &str) -> Result<Board, BoardError> {
    let mut numbers = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<u32>().map_err(|_| BoardError::Parse {
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            numbers.push(value);
        }
    }

    let Some((&dimension, tiles)) = numbers.split_first() else {
        return Err(BoardError::MissingDimension);
    };

    Board::from_tiles(dimension as usize, tiles.to_vec())
}

/// Parses a board given one string per row, each holding whitespace-separated
/// tiles. The number of rows is the dimension.
pub fn board_from_rows(rows: &[&str]) -> Result<Board, BoardError> {
    let mut grid = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let parsed = row
            .split_whitespace()
            .map(|token| {
                token.parse::<u32>().map_err(|_| BoardError::Parse {
                    line: r + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u32>, BoardError>>()?;
        grid.push(parsed);
    }
    Board::from_grid(&grid)
}
