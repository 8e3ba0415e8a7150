//! Constants for board geometry, rule defaults and the text protocol.
//!
//! Boards are sized at runtime, so nothing here fixes the grid. The values
//! below are the defaults of the teaching variant: a 7x7 board, no komi and
//! a short byoyomi for the analysis engine.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) for a teaching game.
pub const DEFAULT_SIZE: usize = 7;

/// Board size assumed by a game record without an `SZ` property.
pub const SGF_DEFAULT_SIZE: usize = 19;

/// Largest width the coordinate letters can express (A-Z without I).
pub const MAX_WIDTH: usize = 25;

/// Orthogonal offsets as (dx, dy). Order: up, left, right, down.
pub const ADJACENT: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Diagonal offsets as (dx, dy). Order: up-left, down-left, up-right, down-right.
pub const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

// =============================================================================
// Diagram Characters
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';

/// Banned (permanently unplayable) point.
pub const BANNED: char = '#';

// =============================================================================
// Scoring and Protocol
// =============================================================================

/// Komi of the teaching variant.
pub const KOMI: f32 = 0.0;

/// Column letters for coordinates. `I` is skipped to avoid confusion with `J`.
pub const COORD_LETTERS: &[u8; MAX_WIDTH] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Byoyomi (seconds per move) handed to the analysis engine.
pub const DEFAULT_BYOYOMI: u32 = 3;

/// Handicap stones given to a first-time player.
pub const DEFAULT_HANDICAP: usize = 5;

/// Upper bound on random draws when placing a single handicap stone.
pub const MAX_HANDICAP_ATTEMPTS: usize = 1000;
