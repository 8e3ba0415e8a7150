//! Loading positions from SGF game records.
//!
//! Only the main line is read: at every branch the first variation is
//! followed and the rest are skipped. The position is rebuilt by replaying
//! each recorded move through [`Board::play`] on an empty board of the
//! declared size, so a record containing an illegal move is rejected.

use log::debug;

use crate::board::{Board, CellState, Color, Point};
use crate::constants::{MAX_WIDTH, SGF_DEFAULT_SIZE};
use crate::error::SgfError;
use crate::position::Move;

/// A node's properties in file order.
#[derive(Debug, Default)]
struct Node {
    props: Vec<(String, Vec<String>)>,
}

impl Node {
    fn values(&self, id: &str) -> &[String] {
        self.props
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    fn single_value(&self, id: &str) -> Option<&str> {
        self.values(id).first().map(String::as_str)
    }
}

struct SgfParser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SgfParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Nodes of the first game tree's main line.
    fn parse_main_line(&mut self) -> Result<Vec<Node>, SgfError> {
        self.skip_whitespace();
        if self.peek() != Some(b'(') {
            return Err(SgfError::Syntax(self.pos));
        }
        self.pos += 1;
        let mut nodes = Vec::new();
        self.parse_tree(&mut nodes, true)?;
        Ok(nodes)
    }

    /// Parse a game tree after its opening parenthesis. Nodes are kept only
    /// while `keep` holds, which is true along the first variation.
    fn parse_tree(&mut self, nodes: &mut Vec<Node>, keep: bool) -> Result<(), SgfError> {
        let mut first_variation = true;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b';') => {
                    self.pos += 1;
                    let node = self.parse_node()?;
                    if keep {
                        nodes.push(node);
                    }
                }
                Some(b'(') => {
                    self.pos += 1;
                    self.parse_tree(nodes, keep && first_variation)?;
                    first_variation = false;
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => return Err(SgfError::Syntax(self.pos)),
            }
        }
    }

    fn parse_node(&mut self) -> Result<Node, SgfError> {
        let mut node = Node::default();
        loop {
            self.skip_whitespace();
            let start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
                self.pos += 1;
            }
            if start == self.pos {
                return Ok(node);
            }
            let id = String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned();
            let mut values = Vec::new();
            loop {
                self.skip_whitespace();
                if self.peek() != Some(b'[') {
                    break;
                }
                self.pos += 1;
                values.push(self.parse_value()?);
            }
            if values.is_empty() {
                return Err(SgfError::Syntax(self.pos));
            }
            node.props.push((id, values));
        }
    }

    /// Read a property value after its `[`, honoring `\` escapes.
    fn parse_value(&mut self) -> Result<String, SgfError> {
        let mut value = Vec::new();
        loop {
            match self.peek() {
                None => return Err(SgfError::Syntax(self.pos)),
                Some(b']') => {
                    self.pos += 1;
                    return Ok(String::from_utf8_lossy(&value).into_owned());
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let Some(escaped) = self.peek() else {
                        return Err(SgfError::Syntax(self.pos));
                    };
                    value.push(escaped);
                    self.pos += 1;
                }
                Some(b) => {
                    value.push(b);
                    self.pos += 1;
                }
            }
        }
    }
}

/// Rebuild the final position of a game record's main line.
///
/// # Errors
/// Syntax errors, unsupported sizes, bad points, and illegal recorded moves.
pub fn load(sgf: &str) -> Result<Board, SgfError> {
    let trimmed = sgf.trim();
    if trimmed.is_empty() {
        return Err(SgfError::Empty);
    }
    let nodes = SgfParser::new(trimmed).parse_main_line()?;
    let Some(root) = nodes.first() else {
        return Err(SgfError::Empty);
    };

    let (width, height) = match root.single_value("SZ") {
        Some(sz) => parse_size(sz)?,
        None => (SGF_DEFAULT_SIZE, SGF_DEFAULT_SIZE),
    };
    let mut board = Board::new(width, height);

    for (id, color) in [("AB", CellState::Black), ("AW", CellState::White)] {
        for value in root.values(id) {
            let point = parse_point(&board, value)?;
            board.set(point, color);
        }
    }
    match root.single_value("PL") {
        Some("B") | Some("b") => board.set_turn(Color::Black),
        Some("W") | Some("w") => board.set_turn(Color::White),
        _ => {}
    }

    let mut index = 0;
    for node in &nodes {
        let (color, value) = match (node.single_value("B"), node.single_value("W")) {
            (Some(v), _) => (Color::Black, v),
            (None, Some(v)) => (Color::White, v),
            (None, None) => continue,
        };
        index += 1;
        let mv = parse_move(&board, value)?;
        board.set_turn(color);
        board.play(mv).map_err(|source| SgfError::IllegalMove {
            index,
            coord: value.to_string(),
            source,
        })?;
    }
    debug!("loaded {width}x{height} game record with {index} moves");
    Ok(board)
}

/// `SZ[n]` or `SZ[w:h]`.
fn parse_size(sz: &str) -> Result<(usize, usize), SgfError> {
    let bad = || SgfError::Size(sz.to_string());
    let (w, h) = match sz.split_once(':') {
        Some((w, h)) => (w.trim(), h.trim()),
        None => (sz.trim(), sz.trim()),
    };
    let width: usize = w.parse().map_err(|_| bad())?;
    let height: usize = h.parse().map_err(|_| bad())?;
    if !(1..=MAX_WIDTH).contains(&width) || !(1..=MAX_WIDTH).contains(&height) {
        return Err(bad());
    }
    Ok((width, height))
}

/// Two lowercase letters, `a` = 1, column first.
fn parse_point(board: &Board, value: &str) -> Result<Point, SgfError> {
    let bad = || SgfError::Point(value.to_string());
    let &[col, row] = value.as_bytes() else {
        return Err(bad());
    };
    if !col.is_ascii_lowercase() || !row.is_ascii_lowercase() {
        return Err(bad());
    }
    let x = usize::from(col - b'a') + 1;
    let y = usize::from(row - b'a') + 1;
    if !board.on_board(x, y) {
        return Err(bad());
    }
    Ok(board.xy_to_point(x, y))
}

/// A point, or a pass written as `[]` or (on boards up to 19x19) `[tt]`.
fn parse_move(board: &Board, value: &str) -> Result<Move, SgfError> {
    let legacy_pass = value == "tt" && board.width() <= 19 && board.height() <= 19;
    if value.is_empty() || legacy_pass {
        return Ok(Move::Pass);
    }
    parse_point(board, value).map(Move::Play)
}
