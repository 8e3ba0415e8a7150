//! Tactical reading: eyes and ladders on small diagrams.
//!
//! Diagrams use `X` for black, `O` for white, `.` for empty and `#` for
//! banned points; the first line is y = 1. Black is to move unless stated otherwise.

use pretty_assertions::assert_eq;

use igo_sensei::board::{Board, Color};
use igo_sensei::playout::RandomOpponent;
use igo_sensei::position::Move;

// =============================================================================
// Helper functions
// =============================================================================

fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).unwrap()
}

/// Whether the string at (x, y) can escape, asserting the board is untouched.
fn escapes(board: &mut Board, x: usize, y: usize, max_depth: Option<usize>) -> bool {
    let before = board.clone();
    let string = board.string_at(board.xy_to_point(x, y)).unwrap();
    let result = match max_depth {
        Some(depth) => board.can_escape_within(&string, depth),
        None => board.can_escape(&string),
    };
    assert_eq!(*board, before, "ladder reading changed the board");
    result
}

// =============================================================================
// Eyes
// =============================================================================

const RING: &str = ".....
                    .XXX.
                    .X.X.
                    .XXX.
                    .....";

#[test]
fn test_surrounded_center_is_eye() {
    let b = board(RING);
    let center = b.xy_to_point(3, 3);
    assert!(b.like_eye(center));
    assert!(b.is_eye_of_turn(center));
    assert!(!b.is_false_eye(center));
}

#[test]
fn test_edge_eye_flips_with_one_opposing_diagonal() {
    let real = board(
        ".X.X.
         .XXX.
         .....",
    );
    let top = real.xy_to_point(3, 1);
    assert!(real.is_eye_of_turn(top));

    let broken = board(
        ".X.X.
         .OXX.
         .....",
    );
    assert!(broken.like_eye(top));
    assert!(!broken.is_eye_of_turn(top));
}

#[test]
fn test_two_eyes_sharing_diagonals() {
    // Two empty points diagonal to each other; each is a real eye only
    // because the other one is.
    let b = board(
        "XXXX
         X.XX
         XX.X
         XXXX",
    );
    assert!(b.is_eye_of_turn(b.xy_to_point(2, 2)));
    assert!(b.is_eye_of_turn(b.xy_to_point(3, 3)));
}

// =============================================================================
// Ladders
// =============================================================================

/// Black X at C3-D3 in atari; white chases toward the lower right corner.
const LADDER: &str = ".....
                      ..OO.
                      .OXXO
                      ..O..
                      .....";

/// The same ladder with a black stone waiting in the corner.
const LADDER_BREAKER: &str = ".....
                              ..OO.
                              .OXXO
                              ..O..
                              ....X";

#[test]
fn test_ladder_is_captured() {
    let mut b = board(LADDER);
    assert!(!escapes(&mut b, 3, 3, None));
}

#[test]
fn test_ladder_breaker_escapes() {
    let mut b = board(LADDER_BREAKER);
    assert!(escapes(&mut b, 3, 3, None));
}

#[test]
fn test_ladder_depth_cap_assumes_capture() {
    let mut b = board(LADDER_BREAKER);
    assert!(!escapes(&mut b, 3, 3, Some(1)));
    assert!(escapes(&mut b, 3, 3, Some(10)));
}

#[test]
fn test_blocked_counter_capture_falls_through_to_next_attacker() {
    // White's last move at (3,2) took a ko, so Black cannot capture it back
    // at (3,1). The white stone at (2,3) is also in atari, and taking it at
    // (1,3) saves the black stone; extending to (4,3) would self-capture.
    let mut b = board(
        "##X##
         .#.##
         .OX.#
         .####",
    );
    b.set_turn(Color::White);
    b.play(Move::Play(b.xy_to_point(3, 2))).unwrap();
    assert_eq!(b.ko(), Some(b.xy_to_point(3, 1)));
    assert_eq!(b.turn(), Color::Black);

    let string = b.string_at(b.xy_to_point(3, 3)).unwrap();
    assert_eq!(string.liberties, vec![b.xy_to_point(4, 3)]);
    assert!(escapes(&mut b, 3, 3, None));
}

#[test]
fn test_counter_capture_to_two_liberties_reads_both_ataris() {
    // Capturing (3,2) from (3,1) leaves the black stone two liberties,
    // (3,2) and (4,3). White cannot answer at (3,2), the new ko point,
    // but the atari at (4,3) connects to (4,4) and wins.
    let mut b = board(
        "##.##
         ##O##
         ##X.#
         ###O.
         ###.#",
    );
    assert!(!escapes(&mut b, 3, 3, None));

    // Without the stone at (4,4) a white atari at (4,3) has no liberty.
    let mut open = board(
        "##.##
         ##O##
         ##X.#
         #####
         #####",
    );
    assert!(escapes(&mut open, 3, 3, None));
}

#[test]
fn test_ladder_reading_leaves_random_positions_intact() {
    for seed in 0..10 {
        let mut b = Board::square(7);
        RandomOpponent::with_seed(seed).play_out(&mut b, 30);
        let own = b.turn();
        let points: Vec<usize> = b.points().collect();
        for pt in points {
            if b.get(pt).color() != Some(own) {
                continue;
            }
            let Some(string) = b.string_at(pt) else {
                continue;
            };
            if !string.in_atari() {
                continue;
            }
            let before = b.clone();
            b.can_escape_within(&string, 6);
            assert_eq!(b, before, "seed {seed}, point {pt}");
        }
    }
}
