//! Board representation: a fixed grid of cells plus turn and ko bookkeeping.
//!
//! Points are canonical indices into a dense array:
//! `index = (x - 1) + (y - 1) * width` for 1-based `(x, y)`.
//! Out-of-range points are a programmer error and panic.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;

use crate::constants::{ADJACENT, BANNED, DIAGONAL, EMPTY, MAX_WIDTH, STONE_BLACK, STONE_WHITE};
use crate::error::BoardError;
use crate::group::Scratch;

/// A point on the board, as a canonical index into the cell array.
pub type Point = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Black,
    White,
    /// Never playable; used to carve non-rectangular shapes out of the grid.
    Banned,
}

impl CellState {
    /// The stone color on this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
            CellState::Empty | CellState::Banned => None,
        }
    }
}

impl From<Color> for CellState {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

/// Rule switches of the teaching variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Self-capture is legal (and removes the mover's group) when true,
    /// rejected as suicide when false.
    pub allow_self_capture: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            allow_self_capture: true,
        }
    }
}

impl Rules {
    pub fn without_self_capture(mut self) -> Self {
        self.allow_self_capture = false;
        self
    }
}

/// A Go board.
///
/// Holds only position state (cells, turn, ko, consecutive passes) plus
/// reusable flood-fill scratch space. The scratch space is not part of the
/// position: it is ignored by equality and never observable from outside.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    pub(crate) turn: Color,
    pub(crate) ko: Option<Point>,
    pub(crate) passes: u32,
    rules: Rules,
    pub(crate) scratch: RefCell<Scratch>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells == other.cells
            && self.turn == other.turn
            && self.ko == other.ko
            && self.passes == other.passes
            && self.rules == other.rules
    }
}

impl Eq for Board {}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rules(width, height, Rules::default())
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// # Panics
    /// If either side is zero or the width exceeds [`MAX_WIDTH`].
    pub fn with_rules(width: usize, height: usize, rules: Rules) -> Self {
        assert!(width > 0 && height > 0, "board must be at least 1x1");
        assert!(
            width <= MAX_WIDTH,
            "board width {width} exceeds the {MAX_WIDTH} coordinate letters"
        );
        let len = width * height;
        Self {
            width,
            height,
            cells: vec![CellState::Empty; len],
            turn: Color::Black,
            ko: None,
            passes: 0,
            rules,
            scratch: RefCell::new(Scratch::new(len)),
        }
    }

    /// Build a board from a diagram of `X`, `O`, `.` and `#` rows, top row first.
    ///
    /// Whitespace inside a row is ignored, blank lines are skipped. Black is to move.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(BoardError::Empty);
        };
        let width = first.len();
        if width > MAX_WIDTH {
            return Err(BoardError::TooWide {
                found: width,
                max: MAX_WIDTH,
            });
        }
        let mut board = Board::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::Ragged {
                    row: y + 1,
                    found: row.len(),
                    expected: width,
                });
            }
            for (x, &c) in row.iter().enumerate() {
                let state = match c {
                    STONE_BLACK => CellState::Black,
                    STONE_WHITE => CellState::White,
                    EMPTY => CellState::Empty,
                    BANNED => CellState::Banned,
                    other => return Err(BoardError::Character(other)),
                };
                board.cells[x + y * width] = state;
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of points on the board (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Override the side to move (handicap placement, game records).
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    pub fn opponent(&self) -> Color {
        self.turn.opponent()
    }

    pub(crate) fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// The point forbidden to the side to move by the ko rule, if any.
    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    /// Number of consecutive passes.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Two consecutive passes end the game and start scoring.
    pub fn is_game_over(&self) -> bool {
        self.passes >= 2
    }

    pub fn get(&self, point: Point) -> CellState {
        self.cells[point]
    }

    pub fn set(&mut self, point: Point, state: CellState) {
        self.cells[point] = state;
    }

    /// Read-only view of every cell, indexed by point.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Reset to the start of a game. Banned cells stay banned.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            if *cell != CellState::Banned {
                *cell = CellState::Empty;
            }
        }
        self.turn = Color::Black;
        self.ko = None;
        self.passes = 0;
    }

    pub fn on_board(&self, x: usize, y: usize) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    pub fn xy_to_point(&self, x: usize, y: usize) -> Point {
        debug_assert!(self.on_board(x, y), "({x}, {y}) is off the board");
        (x - 1) + (y - 1) * self.width
    }

    pub fn point_to_xy(&self, point: Point) -> (usize, usize) {
        debug_assert!(point < self.len(), "point {point} is off the board");
        (point % self.width + 1, point / self.width + 1)
    }

    /// All points in ascending index order.
    pub fn points(&self) -> Range<Point> {
        0..self.cells.len()
    }

    fn offset(&self, point: Point, (dx, dy): (isize, isize)) -> Option<Point> {
        let (x, y) = self.point_to_xy(point);
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.on_board(nx, ny).then(|| self.xy_to_point(nx, ny))
    }

    /// Orthogonal neighbors clipped to the board. Order: up, left, right, down.
    pub fn adjacent_points(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        ADJACENT.iter().filter_map(move |&d| self.offset(point, d))
    }

    /// Diagonal neighbors clipped to the board.
    pub fn diagonal_points(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        DIAGONAL.iter().filter_map(move |&d| self.offset(point, d))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                let ch = match cell {
                    CellState::Black => STONE_BLACK,
                    CellState::White => STONE_WHITE,
                    CellState::Empty => EMPTY,
                    CellState::Banned => BANNED,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
