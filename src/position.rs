//! Move execution: placement, captures, ko, self-capture, and exact undo.
//!
//! Every successful [`Board::play`] returns a [`MoveRecord`] holding just
//! enough to invert the move with [`Board::undo_play`]. A rejected move
//! returns a [`MoveError`] and leaves the board untouched.

use log::{debug, trace};

use crate::board::{Board, CellState, Color, Point};
use crate::error::MoveError;
use crate::group::GoString;

/// A move for the side to play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Play(Point),
}

/// What a successful move did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Placed {
        point: Point,
        /// Points vacated by the move: captured opponent stones, or the
        /// mover's own group when `self_capture` is set.
        captives: Vec<Point>,
        self_capture: bool,
        /// The mover's string after the move; `None` after a self-capture.
        string: Option<GoString>,
    },
}

/// Exact inverse of one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// Side that made the move.
    pub turn: Color,
    pub prior_ko: Option<Point>,
    pub prior_passes: u32,
    pub outcome: Outcome,
}

impl MoveRecord {
    /// The point played, or `None` for a pass.
    pub fn point(&self) -> Option<Point> {
        match self.outcome {
            Outcome::Passed => None,
            Outcome::Placed { point, .. } => Some(point),
        }
    }

    /// Points vacated by the move (empty for a pass).
    pub fn captives(&self) -> &[Point] {
        match &self.outcome {
            Outcome::Passed => &[],
            Outcome::Placed { captives, .. } => captives,
        }
    }

    pub fn is_self_capture(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Placed {
                self_capture: true,
                ..
            }
        )
    }
}

impl Board {
    /// Play a move for the side to move.
    ///
    /// # Errors
    /// - [`MoveError::Occupied`] / [`MoveError::Banned`] if the point is not empty
    /// - [`MoveError::Ko`] if the point is the current ko point
    /// - [`MoveError::Suicide`] for a self-capture when the rules forbid it
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        let turn = self.turn;
        let prior_ko = self.ko;
        let prior_passes = self.passes;

        let point = match mv {
            Move::Pass => {
                self.passes += 1;
                self.ko = None;
                self.switch_turn();
                return Ok(MoveRecord {
                    turn,
                    prior_ko,
                    prior_passes,
                    outcome: Outcome::Passed,
                });
            }
            Move::Play(point) => point,
        };

        match self.get(point) {
            CellState::Empty => {}
            CellState::Banned => return Err(MoveError::Banned),
            _ => return Err(MoveError::Occupied),
        }
        if prior_ko == Some(point) {
            debug!("{turn} at {point} rejected: retakes ko");
            return Err(MoveError::Ko(point));
        }

        self.set(point, turn.into());
        let captives = self.capture_by(point);
        let string = self.group_at(point);

        if string.liberties.is_empty() {
            // Nothing was captured, otherwise the stone would have a liberty.
            if !self.rules().allow_self_capture {
                self.set(point, CellState::Empty);
                debug!("{turn} at {point} rejected: suicide");
                return Err(MoveError::Suicide);
            }
            for &p in &string.points {
                self.set(p, CellState::Empty);
            }
            debug!("{turn} at {point} self-captures {} stones", string.len());
            self.ko = None;
            self.passes = 0;
            self.switch_turn();
            return Ok(MoveRecord {
                turn,
                prior_ko,
                prior_passes,
                outcome: Outcome::Placed {
                    point,
                    captives: string.points,
                    self_capture: true,
                    string: None,
                },
            });
        }

        self.ko = if captives.len() == 1 && string.len() == 1 && string.liberties.len() == 1 {
            debug!("{turn} at {point} starts ko at {}", string.liberties[0]);
            Some(string.liberties[0])
        } else {
            None
        };
        self.passes = 0;
        self.switch_turn();
        Ok(MoveRecord {
            turn,
            prior_ko,
            prior_passes,
            outcome: Outcome::Placed {
                point,
                captives,
                self_capture: false,
                string: Some(string),
            },
        })
    }

    /// Exactly invert a move returned by [`Board::play`].
    ///
    /// The record must be the most recent move not yet undone.
    pub fn undo_play(&mut self, record: &MoveRecord) {
        self.ko = record.prior_ko;
        self.passes = record.prior_passes;
        self.turn = record.turn;
        let Outcome::Placed {
            point,
            captives,
            self_capture,
            ..
        } = &record.outcome
        else {
            return;
        };
        let restored = if *self_capture {
            record.turn
        } else {
            record.turn.opponent()
        };
        for &p in captives {
            self.set(p, restored.into());
        }
        self.set(*point, CellState::Empty);
    }

    /// Whether `mv` is legal for the side to move. Leaves the board unchanged.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        match self.play(mv) {
            Ok(record) => {
                self.undo_play(&record);
                true
            }
            Err(_) => false,
        }
    }

    /// Every legal placement for the side to move, in ascending point order.
    pub fn legal_moves(&mut self) -> Vec<Point> {
        let empties: Vec<Point> = self
            .points()
            .filter(|&p| self.get(p) == CellState::Empty)
            .collect();
        empties
            .into_iter()
            .filter(|&p| self.is_legal(Move::Play(p)))
            .collect()
    }

    /// Remove opponent strings adjacent to `point` that have no liberties left.
    ///
    /// Neighbors are visited in the fixed adjacency order, so the captive
    /// list is reproducible.
    fn capture_by(&mut self, point: Point) -> Vec<Point> {
        let opponent = CellState::from(self.opponent());
        let neighbors: Vec<Point> = self.adjacent_points(point).collect();
        let mut captives = Vec::new();
        for adj in neighbors {
            if self.get(adj) != opponent {
                continue;
            }
            let string = self.group_at(adj);
            if string.liberties.is_empty() {
                trace!("{point} captures {} stones at {adj}", string.len());
                for &p in &string.points {
                    self.set(p, CellState::Empty);
                }
                captives.extend(string.points);
            }
        }
        captives
    }

    /// The string at a point known to hold a stone.
    ///
    /// # Panics
    /// If the point is empty or banned, which means the caller's view of the
    /// board is out of sync with the board.
    pub(crate) fn group_at(&self, point: Point) -> GoString {
        match self.string_at(point) {
            Some(string) => string,
            None => panic!("invariant violated: no string at occupied point {point}"),
        }
    }
}
