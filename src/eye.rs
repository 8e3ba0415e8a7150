//! Eye detection for the side to move.
//!
//! A point looks like an eye when every orthogonal neighbor is a safe stone
//! of the side to move. Whether it is a real eye depends on its diagonals:
//! an opponent stone is bad, and an empty diagonal is bad unless it is itself
//! a real eye. Chains of empty diagonals are followed recursively, with the
//! points under evaluation carried down the call so cycles terminate.

use crate::board::{Board, CellState, Point};

impl Board {
    /// Empty, and every orthogonal neighbor is a stone of the side to move
    /// with more than one liberty.
    pub fn like_eye(&self, point: Point) -> bool {
        if self.get(point) != CellState::Empty {
            return false;
        }
        let own = CellState::from(self.turn());
        if !self.adjacent_points(point).all(|p| self.get(p) == own) {
            return false;
        }
        self.adjacent_points(point)
            .all(|p| self.group_at(p).liberties.len() > 1)
    }

    /// Whether `point` is a real eye for the side to move.
    pub fn is_eye_of_turn(&self, point: Point) -> bool {
        self.eye_of_turn(point, &mut Vec::new())
    }

    /// Looks like an eye but is not a real one.
    pub fn is_false_eye(&self, point: Point) -> bool {
        self.like_eye(point) && !self.is_eye_of_turn(point)
    }

    fn eye_of_turn(&self, point: Point, visiting: &mut Vec<Point>) -> bool {
        if !self.like_eye(point) {
            return false;
        }
        // Edge and corner points tolerate no bad diagonal, interior points one.
        let tolerance = if self.adjacent_points(point).count() == 4 { 1 } else { 0 };
        let opponent = CellState::from(self.opponent());
        let mut bad = 0;
        for diagonal in self.diagonal_points(point) {
            let state = self.get(diagonal);
            if state == opponent {
                bad += 1;
            } else if state == CellState::Empty && !visiting.contains(&diagonal) {
                visiting.push(point);
                if !self.eye_of_turn(diagonal, visiting) {
                    bad += 1;
                }
                visiting.pop();
            }
            if bad > tolerance {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).unwrap()
    }

    #[test]
    fn test_center_eye() {
        let b = board(
            ".....
             .XXX.
             .X.X.
             .XXX.
             .....",
        );
        let center = b.xy_to_point(3, 3);
        assert!(b.like_eye(center));
        assert!(b.is_eye_of_turn(center));
        assert!(!b.is_false_eye(center));
    }

    #[test]
    fn test_one_bad_diagonal_tolerated_in_center() {
        let b = board(
            ".....
             .OXX.
             .X.X.
             .XXX.
             .....",
        );
        // White at (2,2) is the only bad diagonal.
        let center = b.xy_to_point(3, 3);
        assert!(b.is_eye_of_turn(center));
    }

    #[test]
    fn test_two_bad_diagonals_make_false_eye() {
        let b = board(
            ".....
             .OXX.
             .X.X.
             .XXO.
             .....",
        );
        let center = b.xy_to_point(3, 3);
        assert!(b.like_eye(center));
        assert!(!b.is_eye_of_turn(center));
        assert!(b.is_false_eye(center));
    }

    #[test]
    fn test_edge_eye_tolerates_no_bad_diagonal() {
        let real = board(
            "X.X..
             XXX..
             .....",
        );
        assert!(real.is_eye_of_turn(1));

        let broken = board(
            "X.X..
             XXO..
             .....",
        );
        assert!(broken.like_eye(1));
        assert!(!broken.is_eye_of_turn(1));
        assert!(broken.is_false_eye(1));
    }

    #[test]
    fn test_not_eye_for_other_side() {
        let mut b = board(
            ".....
             .XXX.
             .X.X.
             .XXX.
             .....",
        );
        b.set_turn(crate::board::Color::White);
        assert!(!b.like_eye(b.xy_to_point(3, 3)));
    }

    #[test]
    fn test_neighbor_in_atari_is_not_eye_like() {
        let b = board(
            "X.X
             OXO
             ...",
        );
        // (1,1) and (3,1) are single stones with one liberty each.
        assert!(!b.like_eye(1));
    }

    #[test]
    fn test_two_point_eye_recursion_terminates() {
        // Two adjacent-diagonal empty points each lean on the other.
        let b = board(
            "XXXXXX
             XX.XXX
             XXX.XX
             XXXXXX",
        );
        let a = b.xy_to_point(3, 2);
        let c = b.xy_to_point(4, 3);
        assert!(b.is_eye_of_turn(a));
        assert!(b.is_eye_of_turn(c));
    }

    #[test]
    fn test_empty_diagonal_that_is_not_eye_counts_as_bad() {
        let b = board(
            "......
             .XXX..
             .X.X..
             .XX...
             ......",
        );
        // (4,4) is open, so it counts as one bad diagonal, which the interior tolerates.
        assert!(b.is_eye_of_turn(b.xy_to_point(3, 3)));
    }
}
