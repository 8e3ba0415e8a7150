//! Ladder reading: can a string in atari escape?
//!
//! The search plays hypothetical moves on the real board with
//! [`Board::play`] and takes every one of them back with
//! [`Board::undo_play`] before returning, so the board is left exactly as
//! it was found. The side to move must be the owner of the string.

use log::debug;

use crate::board::{Board, Point};
use crate::group::GoString;
use crate::position::{Move, Outcome};

impl Board {
    /// Whether the side to move can save `string` from capture.
    ///
    /// A string with more than one liberty is safe. Otherwise the escaping
    /// side tries to capture an adjacent attacker in atari, then to extend
    /// into its last liberty, reading out the chase whenever an escape
    /// leaves exactly two liberties.
    pub fn can_escape(&mut self, string: &GoString) -> bool {
        self.check_owner(string);
        let escaped = self.read_ladder(string, None);
        debug!("ladder at {:?}: escapes = {escaped}", string.points.first());
        escaped
    }

    /// Like [`Board::can_escape`], but gives up after `max_depth` escape
    /// attempts along any line and then answers `false`.
    pub fn can_escape_within(&mut self, string: &GoString, max_depth: usize) -> bool {
        self.check_owner(string);
        self.read_ladder(string, Some(max_depth))
    }

    fn check_owner(&self, string: &GoString) {
        debug_assert_eq!(
            string.color,
            self.turn(),
            "ladder reading needs the string's owner as the side to move"
        );
    }

    fn read_ladder(&mut self, string: &GoString, budget: Option<usize>) -> bool {
        if string.liberties.len() > 1 {
            return true;
        }
        let budget = match budget {
            Some(0) => return false,
            Some(depth) => Some(depth - 1),
            None => None,
        };
        let Some(&anchor) = string.points.first() else {
            return false;
        };

        // Capture an attacker that is itself in atari.
        for &opponent in &string.opponents {
            let attacker = self.group_at(opponent);
            if !attacker.in_atari() {
                continue;
            }
            let Ok(capture) = self.play(Move::Play(attacker.liberties[0])) else {
                continue;
            };
            let safe = self.survives_chase(anchor, budget);
            self.undo_play(&capture);
            if safe {
                return true;
            }
        }

        // Extend into the last liberty.
        let Some(&liberty) = string.liberties.first() else {
            return false;
        };
        let Ok(extension) = self.play(Move::Play(liberty)) else {
            return false;
        };
        let safe = match &extension.outcome {
            Outcome::Placed { self_capture: true, .. } => false,
            _ => self.survives_chase(anchor, budget),
        };
        self.undo_play(&extension);
        safe
    }

    /// After an escape move, with the attacker to play: the string at
    /// `anchor` is safe if it has three or more liberties, or two liberties
    /// and every atari on one of them can be escaped again.
    fn survives_chase(&mut self, anchor: Point, budget: Option<usize>) -> bool {
        let Some(string) = self.string_at(anchor) else {
            return false;
        };
        match string.liberties.len() {
            0 | 1 => false,
            2 => {
                for &liberty in &string.liberties {
                    let Ok(atari) = self.play(Move::Play(liberty)) else {
                        continue;
                    };
                    let escaped = match self.string_at(anchor) {
                        Some(chased) => self.read_ladder(&chased, budget),
                        None => false,
                    };
                    self.undo_play(&atari);
                    if !escaped {
                        return false;
                    }
                }
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).unwrap()
    }

    #[test]
    fn test_two_liberties_is_safe() {
        let mut b = board(
            ".....
             ..X..
             .....",
        );
        let s = b.string_at(b.xy_to_point(3, 2)).unwrap();
        assert!(b.can_escape(&s));
    }

    #[test]
    fn test_extension_into_open_space() {
        // Black at (2,2) in atari, extending to (3,2) gives plenty of liberties.
        let mut b = board(
            ".O....
             OX....
             .O....
             ......",
        );
        let before = b.clone();
        let s = b.string_at(b.xy_to_point(2, 2)).unwrap();
        assert!(s.in_atari());
        assert!(b.can_escape(&s));
        assert_eq!(b, before);
    }

    #[test]
    fn test_extension_into_wall_fails() {
        let mut b = board(
            ".O.
             OXO
             O.O",
        );
        let before = b.clone();
        let s = b.string_at(b.xy_to_point(2, 2)).unwrap();
        assert!(!b.can_escape(&s));
        assert_eq!(b, before);
    }

    #[test]
    fn test_counter_capture_escapes() {
        // White (2,1)-(3,1) is in atari; capturing it at (4,1) gives the
        // black pair three liberties. Extending to (3,3) would self-capture.
        let mut b = board(
            "#OO...
             OXXO..
             .O.O..
             ..O...",
        );
        let before = b.clone();
        let s = b.string_at(b.xy_to_point(2, 2)).unwrap();
        assert!(s.in_atari());
        assert!(b.can_escape(&s));
        assert_eq!(b, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "side to move")]
    fn test_string_of_opponent_is_rejected() {
        let mut b = board(
            ".O....
             OX....
             .O....
             ......",
        );
        let white = b.string_at(b.xy_to_point(2, 1)).unwrap();
        b.can_escape(&white);
    }

    #[test]
    fn test_depth_cap_assumes_capture() {
        let mut b = board(
            ".O....
             OX....
             .O....
             ......",
        );
        let before = b.clone();
        let s = b.string_at(b.xy_to_point(2, 2)).unwrap();
        assert!(!b.can_escape_within(&s, 0));
        assert!(b.can_escape_within(&s, 4));
        assert_eq!(b, before);
    }
}
