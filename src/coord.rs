//! Text coordinates shared with the analysis engine, e.g. `D4`.
//!
//! The letter names the column (`A` = x 1, skipping `I`), the number is the
//! 1-based `y` of the point.

use crate::board::{Board, Point};
use crate::constants::COORD_LETTERS;
use crate::error::CoordError;
use crate::position::Move;

/// Encode a point as a coordinate such as `D4`.
///
/// Every column has a letter: boards are never wider than [`MAX_WIDTH`].
///
/// [`MAX_WIDTH`]: crate::constants::MAX_WIDTH
pub fn point_to_coord(board: &Board, point: Point) -> String {
    let (x, y) = board.point_to_xy(point);
    format!("{}{y}", char::from(COORD_LETTERS[x - 1]))
}

/// Encode a move, using `pass` for a pass.
pub fn move_to_coord(board: &Board, mv: Move) -> String {
    match mv {
        Move::Pass => "pass".into(),
        Move::Play(point) => point_to_coord(board, point),
    }
}

/// Decode a coordinate (case-insensitive) or `pass`.
pub fn coord_to_point(board: &Board, s: &str) -> Result<Move, CoordError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }
    let mut chars = s.chars();
    let Some(letter) = chars.next() else {
        return Err(CoordError::Empty);
    };
    let upper = letter.to_ascii_uppercase();
    let x = COORD_LETTERS
        .iter()
        .position(|&c| char::from(c) == upper)
        .map(|i| i + 1)
        .ok_or(CoordError::Column(letter))?;
    let y: usize = chars
        .as_str()
        .parse()
        .map_err(|_| CoordError::Row(s.to_string()))?;
    if !board.on_board(x, y) {
        return Err(CoordError::OffBoard {
            coord: s.to_string(),
            width: board.width(),
            height: board.height(),
        });
    }
    Ok(Move::Play(board.xy_to_point(x, y)))
}
