//! The boundary with the board renderer.
//!
//! The renderer draws from a flat array with one value per point
//! (`1.0` black, `-1.0` white, `0.0` otherwise), animates the stone just
//! placed and the stones just captured, and reports clicks back as 1-based
//! board coordinates.

use crate::board::{Board, Color, Point};
use crate::position::MoveRecord;

/// Everything the renderer needs to draw one move.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    pub states: Vec<f32>,
    /// `1.0` if Black made the move, `-1.0` if White did.
    pub mover: f32,
    /// Point just played; `None` for a pass or a cleared board.
    pub point: Option<Point>,
    /// Points to animate away.
    pub captives: Vec<Point>,
}

impl RenderFrame {
    /// Frame for the move in `record`, drawn on the board after the move.
    pub fn from_record(board: &Board, record: &MoveRecord) -> Self {
        Self {
            states: board.stone_values(),
            mover: color_value(record.turn),
            point: record.point(),
            captives: record.captives().to_vec(),
        }
    }

    /// Frame for an empty board at the start of a game.
    pub fn cleared(board: &Board) -> Self {
        Self {
            states: vec![0.0; board.len()],
            mover: color_value(Color::Black),
            point: None,
            captives: Vec::new(),
        }
    }
}

fn color_value(color: Color) -> f32 {
    match color {
        Color::Black => 1.0,
        Color::White => -1.0,
    }
}

impl Board {
    /// One value per point: `1.0` black, `-1.0` white, `0.0` empty or banned.
    pub fn stone_values(&self) -> Vec<f32> {
        self.cells()
            .iter()
            .map(|cell| cell.color().map_or(0.0, color_value))
            .collect()
    }

    /// Map a renderer click to a point, ignoring clicks off the board.
    pub fn click_to_point(&self, x: usize, y: usize) -> Option<Point> {
        self.on_board(x, y).then(|| self.xy_to_point(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Move;

    #[test]
    fn test_frame_after_capture() {
        let mut board = Board::from_diagram(
            "XO.
             ...
             ...",
        )
        .unwrap();
        let record = board.play(Move::Play(4)).unwrap();
        let frame = RenderFrame::from_record(&board, &record);
        assert_eq!(frame.mover, 1.0);
        assert_eq!(frame.point, Some(4));
        assert!(frame.captives.is_empty());

        let capture = board.play(Move::Play(3)).unwrap();
        let frame = RenderFrame::from_record(&board, &capture);
        assert_eq!(frame.mover, -1.0);
        assert_eq!(frame.captives, vec![0]);
        assert_eq!(frame.states[0], 0.0);
        assert_eq!(frame.states[1], -1.0);
        assert_eq!(frame.states[3], -1.0);
        assert_eq!(frame.states[4], 1.0);
    }

    #[test]
    fn test_cleared_frame() {
        let board = Board::square(5);
        let frame = RenderFrame::cleared(&board);
        assert_eq!(frame.states.len(), 25);
        assert!(frame.states.iter().all(|&v| v == 0.0));
        assert_eq!(frame.point, None);
    }

    #[test]
    fn test_click_to_point() {
        let board = Board::new(7, 5);
        assert_eq!(board.click_to_point(1, 1), Some(0));
        assert_eq!(board.click_to_point(7, 5), Some(34));
        assert_eq!(board.click_to_point(0, 3), None);
        assert_eq!(board.click_to_point(8, 1), None);
    }
}
