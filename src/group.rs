//! Flood-fill analysis of strings (connected stones) and empty regions.
//!
//! Both scans mark visited points with generation counters instead of
//! clearing a visited array on every call, so a query costs time
//! proportional to the region it walks rather than the whole board.

use log::trace;

use crate::board::{Board, CellState, Color, Point};

/// Per-point marks valid for one generation.
#[derive(Clone, Debug)]
struct Marker {
    value: u32,
    marks: Vec<u32>,
}

impl Marker {
    fn new(len: usize) -> Self {
        Self {
            value: 0,
            marks: vec![0; len],
        }
    }

    /// Start a new generation, forgetting every previous mark.
    fn clear(&mut self) {
        if self.value == u32::MAX {
            self.marks.fill(0);
            self.value = 0;
        }
        self.value += 1;
    }

    fn is_marked(&self, point: Point) -> bool {
        self.marks[point] == self.value
    }

    fn mark(&mut self, point: Point) {
        self.marks[point] = self.value;
    }
}

/// Scratch space owned by a board for its flood fills.
#[derive(Clone, Debug)]
pub(crate) struct Scratch {
    /// Points already expanded, plus boundary points already reported.
    visited: Marker,
    /// Member points already queued for expansion.
    queued: Marker,
}

impl Scratch {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            visited: Marker::new(len),
            queued: Marker::new(len),
        }
    }
}

/// A maximal group of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoString {
    pub color: Color,
    /// Member stones in discovery order, starting with the queried point.
    pub points: Vec<Point>,
    /// Distinct empty points adjacent to the group.
    pub liberties: Vec<Point>,
    /// Distinct opponent stones adjacent to the group.
    pub opponents: Vec<Point>,
}

impl GoString {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn in_atari(&self) -> bool {
        self.liberties.len() == 1
    }
}

/// A maximal 4-connected region of empty points and the stones bordering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectedEmpties {
    pub points: Vec<Point>,
    pub blacks: Vec<Point>,
    pub whites: Vec<Point>,
}

impl ConnectedEmpties {
    /// The color owning this region as territory: the only color touching it.
    pub fn owner(&self) -> Option<Color> {
        match (self.blacks.is_empty(), self.whites.is_empty()) {
            (false, true) => Some(Color::Black),
            (true, false) => Some(Color::White),
            _ => None,
        }
    }
}

impl Board {
    /// The string containing `point`, or `None` for an empty or banned point.
    pub fn string_at(&self, point: Point) -> Option<GoString> {
        let state = self.get(point);
        let color = state.color()?;
        let opponent = CellState::from(color.opponent());
        let mut liberties = Vec::new();
        let mut opponents = Vec::new();
        let points = self.flood(point, state, |pt, s| {
            if s == CellState::Empty {
                liberties.push(pt);
            } else if s == opponent {
                opponents.push(pt);
            }
        });
        trace!(
            "string at {point}: {} stones, {} liberties",
            points.len(),
            liberties.len()
        );
        Some(GoString {
            color,
            points,
            liberties,
            opponents,
        })
    }

    /// The empty region containing `point`, or `None` if `point` is not empty.
    pub fn connected_empties_at(&self, point: Point) -> Option<ConnectedEmpties> {
        if self.get(point) != CellState::Empty {
            return None;
        }
        let mut blacks = Vec::new();
        let mut whites = Vec::new();
        let points = self.flood(point, CellState::Empty, |pt, s| match s {
            CellState::Black => blacks.push(pt),
            CellState::White => whites.push(pt),
            _ => {}
        });
        Some(ConnectedEmpties {
            points,
            blacks,
            whites,
        })
    }

    /// Breadth-first fill over cells equal to `member`, starting at `start`.
    ///
    /// Every neighboring point of another state is reported once to
    /// `on_boundary`. Returns the member points in discovery order.
    fn flood<F>(&self, start: Point, member: CellState, mut on_boundary: F) -> Vec<Point>
    where
        F: FnMut(Point, CellState),
    {
        let mut scratch = self.scratch.borrow_mut();
        let Scratch { visited, queued } = &mut *scratch;
        visited.clear();
        queued.clear();

        let mut points = vec![start];
        queued.mark(start);
        let mut index = 0;
        while index < points.len() {
            let pt = points[index];
            index += 1;
            if visited.is_marked(pt) {
                continue;
            }
            visited.mark(pt);
            for adj in self.adjacent_points(pt) {
                if visited.is_marked(adj) {
                    continue;
                }
                let state = self.get(adj);
                if state == member {
                    if !queued.is_marked(adj) {
                        queued.mark(adj);
                        points.push(adj);
                    }
                } else {
                    visited.mark(adj);
                    on_boundary(adj, state);
                }
            }
        }
        points
    }
}
