//! Igo-Sensei: the Go rules engine behind a children's teaching game.
//!
//! The crate represents a small-board position, enforces move legality,
//! resolves captures and the single-stone ko, and answers two tactical
//! questions used when teaching: is this point a real eye, and can this
//! string in atari escape a ladder.
//!
//! ## Modules
//!
//! - [`constants`] - Defaults of the teaching variant and diagram characters
//! - [`board`] - Board state, colors, geometry
//! - [`group`] - Flood fill of strings and empty regions
//! - [`position`] - Playing and undoing moves
//! - [`eye`] - Real and false eye detection
//! - [`ladder`] - Ladder escape reading
//! - [`score`] - Territory and area counting
//! - [`coord`] - Text coordinates such as `D4`
//! - [`gtp`] - Commands and responses for the analysis engine
//! - [`sgf`] - Loading game records
//! - [`render`] - Snapshots for the board renderer
//! - [`playout`] - A local random opponent
//!
//! ## Example
//!
//! ```
//! use igo_sensei::board::{Board, CellState};
//! use igo_sensei::coord::coord_to_point;
//! use igo_sensei::position::Move;
//!
//! let mut board = Board::square(7);
//! let mv = coord_to_point(&board, "D4").unwrap();
//! let record = board.play(mv).unwrap();
//! assert!(!board.is_legal(mv));
//!
//! board.undo_play(&record);
//! assert_eq!(board, Board::square(7));
//! assert!(board.cells().iter().all(|&c| c == CellState::Empty));
//! assert!(board.is_legal(Move::Pass));
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod eye;
pub mod group;
pub mod gtp;
pub mod ladder;
pub mod playout;
pub mod position;
pub mod render;
pub mod score;
pub mod sgf;
