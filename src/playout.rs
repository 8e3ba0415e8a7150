//! A local random opponent and random handicap placement.
//!
//! The real opponent is the external analysis engine. This one stands in
//! for it in the terminal game and in tests: it plays uniformly random legal
//! moves, never fills its own real eyes, never self-captures, and passes
//! when nothing else is left.

use log::{debug, warn};

use crate::board::{Board, CellState, Color, Point};
use crate::constants::MAX_HANDICAP_ATTEMPTS;
use crate::position::{Move, MoveRecord};

/// Plays random sensible moves.
pub struct RandomOpponent {
    rng: fastrand::Rng,
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A reproducible opponent.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick a move for the side to move. The board is left unchanged.
    pub fn choose(&mut self, board: &mut Board) -> Move {
        let mut candidates: Vec<Point> = board
            .points()
            .filter(|&p| board.get(p) == CellState::Empty && !board.is_eye_of_turn(p))
            .collect();

        // Draw without replacement until a move passes the checks.
        let n = candidates.len();
        for i in 0..n {
            let j = self.rng.usize(i..n);
            candidates.swap(i, j);
            let pt = candidates[i];
            if let Ok(record) = board.play(Move::Play(pt)) {
                let self_capture = record.is_self_capture();
                board.undo_play(&record);
                if !self_capture {
                    return Move::Play(pt);
                }
            }
        }
        Move::Pass
    }

    /// Play random moves for both sides until two passes or `max_moves`.
    ///
    /// Returns the records in order, so the caller can undo the game.
    pub fn play_out(&mut self, board: &mut Board, max_moves: usize) -> Vec<MoveRecord> {
        let mut history = Vec::new();
        while !board.is_game_over() && history.len() < max_moves {
            let mv = self.choose(board);
            match board.play(mv) {
                Ok(record) => history.push(record),
                Err(e) => unreachable!("chosen move {mv:?} was rejected: {e}"),
            }
        }
        debug!("playout finished after {} moves", history.len());
        history
    }
}

/// Place `count` black stones at random legal points, then hand the move to White.
///
/// Returns the points used. Draws that are illegal or would self-capture are
/// retried; a stone that cannot be placed after many draws is skipped.
pub fn place_handicap(board: &mut Board, rng: &mut fastrand::Rng, count: usize) -> Vec<Point> {
    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let mut done = false;
        for _ in 0..MAX_HANDICAP_ATTEMPTS {
            board.set_turn(Color::Black);
            let x = rng.usize(1..=board.width());
            let y = rng.usize(1..=board.height());
            let pt = board.xy_to_point(x, y);
            let Ok(record) = board.play(Move::Play(pt)) else {
                continue;
            };
            if record.is_self_capture() {
                board.undo_play(&record);
                continue;
            }
            placed.push(pt);
            done = true;
            break;
        }
        if !done {
            warn!("gave up placing handicap stone {}", placed.len() + 1);
        }
    }
    board.set_turn(Color::White);
    placed
}
