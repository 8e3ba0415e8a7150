//! Error types for the recoverable failures of the engine.
//!
//! Illegal moves, malformed coordinates and malformed game records are
//! ordinary outcomes and come back as `Result`s. Broken internal invariants
//! are bugs and panic instead.

use thiserror::Error;

use crate::board::Point;

/// Why a move was rejected. A rejected move never changes the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: point not empty")]
    Occupied,

    #[error("illegal move: point is banned")]
    Banned,

    #[error("illegal move: retakes ko at {0}")]
    Ko(Point),

    #[error("illegal move: suicide")]
    Suicide,
}

/// Failure to decode a textual move coordinate such as `D4`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid column letter '{0}'")]
    Column(char),

    #[error("invalid row in '{0}'")]
    Row(String),

    #[error("coordinate {coord} is off a {width}x{height} board")]
    OffBoard {
        coord: String,
        width: usize,
        height: usize,
    },
}

/// Failure to build a board from a text diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("diagram has no rows")]
    Empty,

    #[error("row {row} has {found} points, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character '{0}' in diagram")]
    Character(char),

    #[error("diagram is {found} points wide, at most {max} are supported")]
    TooWide { found: usize, max: usize },
}

/// Failure to load a game record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SgfError {
    #[error("game record is empty")]
    Empty,

    #[error("syntax error at byte {0}")]
    Syntax(usize),

    #[error("unsupported board size '{0}'")]
    Size(String),

    #[error("invalid point '{0}'")]
    Point(String),

    #[error("move {index} at '{coord}' is illegal: {source}")]
    IllegalMove {
        index: usize,
        coord: String,
        #[source]
        source: MoveError,
    },
}

/// Failure to understand a response from the analysis engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GtpError {
    #[error("malformed response: '{0}'")]
    Malformed(String),

    #[error("engine reported failure: {0}")]
    Failure(String),

    #[error("bad move in response: {0}")]
    Coord(#[from] CoordError),
}
