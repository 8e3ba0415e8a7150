//! Territory and area counting for the scoring phase.
//!
//! Uses area scoring: stones on the board plus empty regions bordered by a
//! single color. Komi is zero in the teaching variant, and dead stones are
//! expected to have been captured before both sides pass.

use std::cmp::Ordering;

use crate::board::{Board, CellState, Color};
use crate::constants::KOMI;

/// Area totals for both sides.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
    pub komi: f32,
}

impl Score {
    /// Black's lead (negative when White leads).
    pub fn margin(&self) -> f32 {
        self.black as f32 - self.white as f32 - self.komi
    }

    /// The winner, or `None` for a draw.
    pub fn winner(&self) -> Option<Color> {
        match self.margin().partial_cmp(&0.0) {
            Some(Ordering::Greater) => Some(Color::Black),
            Some(Ordering::Less) => Some(Color::White),
            _ => None,
        }
    }
}

impl Board {
    /// Owner of every point: stones own themselves, empty points belong to
    /// the single color bordering their region, anything else is neutral.
    pub fn territory(&self) -> Vec<Option<Color>> {
        let mut owners: Vec<Option<Color>> = self.cells().iter().map(|c| c.color()).collect();
        let mut seen = vec![false; self.len()];
        for point in self.points() {
            if seen[point] || self.get(point) != CellState::Empty {
                continue;
            }
            let Some(region) = self.connected_empties_at(point) else {
                continue;
            };
            let owner = region.owner();
            for &p in &region.points {
                seen[p] = true;
                owners[p] = owner;
            }
        }
        owners
    }

    /// Area score of the current position.
    pub fn area_score(&self) -> Score {
        let (black, white) = self
            .territory()
            .into_iter()
            .fold((0, 0), |(b, w), owner| match owner {
                Some(Color::Black) => (b + 1, w),
                Some(Color::White) => (b, w + 1),
                None => (b, w),
            });
        Score {
            black,
            white,
            komi: KOMI,
        }
    }
}
